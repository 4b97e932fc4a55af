//! Consistency filtering
//!
//! Reduces a word list to the words still compatible with the current
//! knowledge. Nothing is cached: the knowledge changes every round, so call
//! sites re-filter from the backing list each time.

use crate::core::{Knowledge, Word};

/// Collect the words consistent with the current knowledge
#[must_use]
pub fn consistent<'a>(knowledge: &Knowledge, words: &'a [Word]) -> Vec<&'a Word> {
    words.iter().filter(|word| knowledge.allows(word)).collect()
}

/// Count the words consistent with the current knowledge
///
/// Same predicate as [`consistent`] without materializing the survivors;
/// used on the minimax hot path.
#[must_use]
pub fn count_consistent(knowledge: &Knowledge, words: &[Word]) -> usize {
    words.iter().filter(|word| knowledge.allows(word)).count()
}
