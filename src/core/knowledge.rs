//! Accumulated knowledge from feedback
//!
//! `Knowledge` records everything inferred from the feedback seen so far in
//! one solving session: letters locked to a slot, letters known to be present
//! but unplaced, and per-slot sets of excluded letters. Repeated-letter counts
//! are not tracked, only presence.

use super::{Feedback, Status, WORD_LEN, Word};
use rustc_hash::FxHashSet;

/// Everything learned from feedback in one solving session
///
/// Created empty, mutated once per round via [`Knowledge::update`], never
/// rolled back. Hypothetical scoring works on clones, leaving the live state
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Knowledge {
    /// Letters confirmed at their slot
    locked: [Option<u8>; WORD_LEN],
    /// Letters confirmed present but not yet pinned to a slot
    needed: FxHashSet<u8>,
    /// Letters that cannot occupy each slot
    impossibles: [FxHashSet<u8>; WORD_LEN],
}

impl Knowledge {
    /// Create an empty knowledge state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one feedback observation into the state
    ///
    /// Returns true iff the feedback is all-`Correct`, in which case the state
    /// is left untouched (safe to call again after solving). Otherwise:
    /// - `Miss` excludes the letter from every slot not locked to it
    /// - `WrongSpot` excludes the letter from this slot only and marks it needed
    /// - `Correct` locks the slot
    ///
    /// A locked slot's letter is never left in that slot's impossible set.
    /// Contradictory feedback is not validated against.
    pub fn update(&mut self, guess: &Word, feedback: &Feedback) -> bool {
        if feedback.is_solved() {
            return true;
        }

        for (slot, (&ch, &status)) in guess.chars().iter().zip(feedback.statuses()).enumerate() {
            match status {
                Status::Miss => {
                    for (other, impossible) in self.impossibles.iter_mut().enumerate() {
                        if self.locked[other] != Some(ch) {
                            impossible.insert(ch);
                        }
                    }
                }
                Status::WrongSpot => {
                    // Not in this slot, but somewhere
                    self.impossibles[slot].insert(ch);
                    self.needed.insert(ch);
                }
                Status::Correct => {
                    self.locked[slot] = Some(ch);
                    self.impossibles[slot].remove(&ch);
                }
            }
        }

        false
    }

    /// Check whether a word is consistent with everything learned so far
    ///
    /// A word passes iff every slot matches its character class (the locked
    /// letter, or anything outside the slot's impossible set) and every needed
    /// letter occurs somewhere in the word.
    #[must_use]
    pub fn allows(&self, word: &Word) -> bool {
        for slot in 0..WORD_LEN {
            let ch = word.char_at(slot);
            match self.locked[slot] {
                Some(locked) => {
                    if ch != locked {
                        return false;
                    }
                }
                None => {
                    if self.impossibles[slot].contains(&ch) {
                        return false;
                    }
                }
            }
        }

        self.needed.iter().all(|&needed| word.contains(needed))
    }

    /// The letter locked at a slot, if any
    #[inline]
    #[must_use]
    pub const fn locked_at(&self, slot: usize) -> Option<u8> {
        self.locked[slot]
    }

    /// Whether a letter is known to be present but not yet placed
    #[inline]
    #[must_use]
    pub fn requires(&self, letter: u8) -> bool {
        self.needed.contains(&letter)
    }

    /// Whether a letter is excluded from a specific slot
    #[inline]
    #[must_use]
    pub fn excluded_at(&self, slot: usize, letter: u8) -> bool {
        self.impossibles[slot].contains(&letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn observe(knowledge: &mut Knowledge, guess: &str, answer: &str) -> bool {
        let guess = word(guess);
        let feedback = Feedback::evaluate(&guess, &word(answer));
        knowledge.update(&guess, &feedback)
    }

    #[test]
    fn update_locks_correct_slots() {
        let mut knowledge = Knowledge::new();
        let solved = observe(&mut knowledge, "crane", "crown");

        assert!(!solved);
        assert_eq!(knowledge.locked_at(0), Some(b'c'));
        assert_eq!(knowledge.locked_at(1), Some(b'r'));
        assert_eq!(knowledge.locked_at(2), None);
    }

    #[test]
    fn update_miss_excludes_letter_everywhere() {
        let mut knowledge = Knowledge::new();
        observe(&mut knowledge, "crane", "biddy");

        for slot in 0..WORD_LEN {
            assert!(knowledge.excluded_at(slot, b'c'));
            assert!(knowledge.excluded_at(slot, b'e'));
        }
    }

    #[test]
    fn update_wrong_spot_excludes_locally_and_requires() {
        let mut knowledge = Knowledge::new();
        // C is misplaced at slot 0 against TRACE
        observe(&mut knowledge, "crane", "trace");

        assert!(knowledge.requires(b'c'));
        assert!(knowledge.excluded_at(0, b'c'));
        assert!(!knowledge.excluded_at(1, b'c'));
        assert!(!knowledge.excluded_at(3, b'c'));
    }

    #[test]
    fn update_solved_returns_true_without_mutation() {
        let mut knowledge = Knowledge::new();
        observe(&mut knowledge, "crane", "trace");
        let before = knowledge.clone();

        let guess = word("trace");
        assert!(knowledge.update(&guess, &Feedback::SOLVED));
        assert_eq!(knowledge, before);

        // Safe to repeat
        assert!(knowledge.update(&guess, &Feedback::SOLVED));
        assert_eq!(knowledge, before);
    }

    #[test]
    fn locked_letter_never_in_own_slot_exclusions() {
        let mut knowledge = Knowledge::new();
        // S is correct at slot 0 but a miss at slots 2 and 3
        observe(&mut knowledge, "sassy", "sound");

        assert_eq!(knowledge.locked_at(0), Some(b's'));
        assert!(!knowledge.excluded_at(0, b's'));
        // The global exclusion still lands on the unlocked slots
        assert!(knowledge.excluded_at(1, b's'));
        assert!(knowledge.excluded_at(4, b's'));
    }

    #[test]
    fn allows_checks_lock_exclusion_and_needed() {
        let mut knowledge = Knowledge::new();
        observe(&mut knowledge, "crane", "trace");

        // The answer always remains consistent
        assert!(knowledge.allows(&word("trace")));
        // Violates the lock at slot 1 (R)
        assert!(!knowledge.allows(&word("taste")));
        // Missing the needed C
        assert!(!knowledge.allows(&word("grate")));
        // Matches the locks and carries the needed C, but N is globally excluded
        assert!(!knowledge.allows(&word("nrace")));
    }

    #[test]
    fn allows_everything_when_empty() {
        let knowledge = Knowledge::new();
        assert!(knowledge.allows(&word("crane")));
        assert!(knowledge.allows(&word("zesty")));
    }

    #[test]
    fn clones_are_independent() {
        let mut knowledge = Knowledge::new();
        observe(&mut knowledge, "crane", "trace");

        let mut copy = knowledge.clone();
        observe(&mut copy, "track", "trace");

        assert_ne!(copy, knowledge);
        assert_eq!(knowledge.locked_at(0), None); // Original untouched
        assert_eq!(copy.locked_at(0), Some(b't'));
    }
}
