//! Word lists for solving
//!
//! Two static lists: a curated primary list of likely answers and a larger
//! extended fallback vocabulary. The primary list is a subset of the extended
//! one, so the extended list never loses a word by failing over.

mod embedded;
pub mod loader;

pub use embedded::{EXTENDED, EXTENDED_COUNT, PRIMARY, PRIMARY_COUNT};

use crate::core::Word;

/// The primary and extended lists for one solver instance
///
/// Loaded once at startup and shared by every session; filtering reads from
/// these lists fresh each round.
pub struct WordLists {
    pub primary: Vec<Word>,
    pub extended: Vec<Word>,
}

impl WordLists {
    /// Build from the embedded lists
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            primary: loader::words_from_slice(PRIMARY),
            extended: loader::words_from_slice(EXTENDED),
        }
    }
}
