//! Zoned timestamp validation without timezone dependencies.
//!
//! Front-matter `date` values are expected to carry an explicit UTC offset
//! or zone, e.g. `2013-11-15T19:39:03-04:00` or `2021-05-01T10:00:00Z`.
//! This is validation only; nothing downstream needs the parsed value, so
//! no datetime crate is pulled in.

/// Check that `s` is an RFC 3339 timestamp with an explicit zone.
pub fn is_zoned_timestamp(s: &str) -> bool {
    parse_zoned(s).is_some()
}

fn parse_zoned(s: &str) -> Option<()> {
    let b = s.as_bytes();

    // Minimum: "YYYY-MM-DDTHH:MM:SSZ" (20 chars)
    if b.len() < 20 {
        return None;
    }

    let year = parse_num(&b[0..4])?;
    if b[4] != b'-' {
        return None;
    }
    let month = parse_num(&b[5..7])?;
    if b[7] != b'-' {
        return None;
    }
    let day = parse_num(&b[8..10])?;
    if !(1..=12).contains(&month) || day < 1 || day > days_in_month(year, month) {
        return None;
    }

    if b[10] != b'T' && b[10] != b't' {
        return None;
    }
    let hour = parse_num(&b[11..13])?;
    if b[13] != b':' {
        return None;
    }
    let minute = parse_num(&b[14..16])?;
    if b[16] != b':' {
        return None;
    }
    let second = parse_num(&b[17..19])?;
    if hour > 23 || minute > 59 || second > 59 {
        return None;
    }

    // Optional fractional seconds
    let mut i = 19;
    if b[i] == b'.' {
        i += 1;
        let start = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        if i == start {
            return None;
        }
    }

    // The zone part is mandatory
    match b.get(i)? {
        b'Z' | b'z' if i + 1 == b.len() => Some(()),
        b'+' | b'-' if b.len() == i + 6 && b[i + 3] == b':' => {
            let offset_hour = parse_num(&b[i + 1..i + 3])?;
            let offset_minute = parse_num(&b[i + 4..i + 6])?;
            (offset_hour <= 18 && offset_minute <= 59).then_some(())
        }
        _ => None,
    }
}

/// Parse a fixed-width ASCII digit run.
fn parse_num(bytes: &[u8]) -> Option<u32> {
    let mut n = 0u32;
    for &b in bytes {
        if !b.is_ascii_digit() {
            return None;
        }
        n = n * 10 + u32::from(b - b'0');
    }
    Some(n)
}

fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utc_zulu_accepted() {
        assert!(is_zoned_timestamp("2021-05-01T10:00:00Z"));
        assert!(is_zoned_timestamp("2021-05-01t10:00:00z"));
    }

    #[test]
    fn test_numeric_offsets_accepted() {
        assert!(is_zoned_timestamp("2013-11-15T19:39:03-04:00"));
        assert!(is_zoned_timestamp("2024-06-15T14:30:45+09:30"));
    }

    #[test]
    fn test_fractional_seconds_accepted() {
        assert!(is_zoned_timestamp("2021-05-01T10:00:00.123Z"));
        assert!(is_zoned_timestamp("2021-05-01T10:00:00.5+02:00"));
        assert!(!is_zoned_timestamp("2021-05-01T10:00:00.Z"));
    }

    #[test]
    fn test_missing_zone_rejected() {
        assert!(!is_zoned_timestamp("2021-05-01T10:00:00"));
        assert!(!is_zoned_timestamp("2021-05-01"));
    }

    #[test]
    fn test_malformed_rejected() {
        assert!(!is_zoned_timestamp("not a date"));
        assert!(!is_zoned_timestamp("2021-13-01T10:00:00Z"));
        assert!(!is_zoned_timestamp("2021-02-30T10:00:00Z"));
        assert!(!is_zoned_timestamp("2021-05-01T24:00:00Z"));
        assert!(!is_zoned_timestamp("2021-05-01T10:00:00Zjunk"));
        assert!(!is_zoned_timestamp("2021-05-01T10:00:00+0400"));
    }

    #[test]
    fn test_leap_day() {
        assert!(is_zoned_timestamp("2020-02-29T00:00:00Z"));
        assert!(!is_zoned_timestamp("2021-02-29T00:00:00Z"));
        assert!(is_zoned_timestamp("2000-02-29T00:00:00Z"));
        assert!(!is_zoned_timestamp("1900-02-29T00:00:00Z"));
    }
}
