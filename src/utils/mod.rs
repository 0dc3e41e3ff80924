//! Utility modules for the index builder.

pub mod date;
pub mod plural;

pub use plural::plural_count;
