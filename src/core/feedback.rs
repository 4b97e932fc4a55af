//! Per-letter feedback evaluation and representation
//!
//! Feedback for a guess is a fixed sequence of per-slot statuses:
//! - `Miss`: the letter is absent, or all its occurrences are accounted for
//! - `WrongSpot`: the letter is in the answer but not at this position
//! - `Correct`: exact positional match

use super::{WORD_LEN, Word};
use std::fmt;

/// Status of a single letter slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Miss,
    WrongSpot,
    Correct,
}

/// Feedback for one guess: a status per slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Status; WORD_LEN]);

impl Feedback {
    /// All slots correct (the puzzle is solved)
    pub const SOLVED: Self = Self([Status::Correct; WORD_LEN]);

    /// Create feedback directly from a status array
    #[inline]
    #[must_use]
    pub const fn new(statuses: [Status; WORD_LEN]) -> Self {
        Self(statuses)
    }

    /// Get the per-slot statuses
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[Status; WORD_LEN] {
        &self.0
    }

    /// Check whether every slot is `Correct`
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|s| *s == Status::Correct)
    }

    /// Compute the feedback a guess would receive against a known answer
    ///
    /// Two passes. The first pass marks exact matches and letters absent from
    /// the answer entirely, collecting every answer letter that was not matched
    /// exactly into an "others" pool. The second pass marks each remaining slot
    /// `WrongSpot` if its letter occurs in that pool, `Miss` otherwise.
    ///
    /// The pool is not consumed during the second pass, so a guess repeating a
    /// letter more times than the answer contains it can collect `WrongSpot` on
    /// the extra occurrences in scan order. This diverges from canonical
    /// leftmost-first duplicate handling and is kept deliberately: solver
    /// behavior downstream depends on it being stable.
    ///
    /// # Examples
    /// ```
    /// use wordle_knowns::core::{Feedback, Status, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("trace").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &answer);
    ///
    /// use Status::{Correct, Miss, WrongSpot};
    /// assert_eq!(
    ///     feedback.statuses(),
    ///     &[WrongSpot, Correct, Correct, Miss, Correct]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, answer: &Word) -> Self {
        let mut statuses = [None; WORD_LEN];
        let mut others: Vec<u8> = Vec::with_capacity(WORD_LEN);

        // First pass: exact matches and outright misses. Every answer letter
        // not consumed by an exact match lands in the pool.
        for slot in 0..WORD_LEN {
            let g = guess.char_at(slot);
            let a = answer.char_at(slot);
            if g == a {
                statuses[slot] = Some(Status::Correct);
            } else if !answer.contains(g) {
                statuses[slot] = Some(Status::Miss);
                others.push(a);
            } else {
                others.push(a);
            }
        }

        // Second pass: resolve the slots left open by the first pass.
        let resolved = std::array::from_fn(|slot| {
            statuses[slot].unwrap_or_else(|| {
                if others.contains(&guess.char_at(slot)) {
                    Status::WrongSpot
                } else {
                    Status::Miss
                }
            })
        });

        Self(resolved)
    }

    /// Parse feedback from a 5-symbol response string
    ///
    /// Accepts:
    /// - `!` for correct
    /// - `?` for wrong spot
    /// - `_` or `-` for miss
    ///
    /// Returns `None` for any other shape or alphabet.
    ///
    /// # Examples
    /// ```
    /// use wordle_knowns::core::Feedback;
    ///
    /// let f1 = Feedback::parse("_?!_?").unwrap();
    /// let f2 = Feedback::parse("-?!-?").unwrap();
    /// assert_eq!(f1, f2);
    /// assert!(Feedback::parse("_?!").is_none());
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != WORD_LEN {
            return None;
        }

        let mut statuses = [Status::Miss; WORD_LEN];
        for (slot, ch) in chars.into_iter().enumerate() {
            statuses[slot] = match ch {
                '!' => Status::Correct,
                '?' => Status::WrongSpot,
                '_' | '-' => Status::Miss,
                _ => return None,
            };
        }

        Some(Self(statuses))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in &self.0 {
            let symbol = match status {
                Status::Correct => '!',
                Status::WrongSpot => '?',
                Status::Miss => '_',
            };
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
