//! Index data structures: the page registry and the inverted word index.

mod inverted;
mod registry;

pub use inverted::InvertedIndex;
pub use registry::PageRegistry;

/// Dense page identifier, assigned in first-seen order starting at 0.
pub type PageId = u32;
