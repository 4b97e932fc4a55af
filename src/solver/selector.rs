//! Two-tier guess selection
//!
//! Small pools get the exhaustive minimax search; large pools get the
//! frequency heuristic. The thresholds trade answer quality against the
//! O(universe × pool) cost of the exhaustive tier.

use crate::core::{Knowledge, Word};
use crate::solver::{frequency, minimax};
use rand::Rng;

/// Below this pool size the whole primary vocabulary is searched exhaustively
pub const EXHAUSTIVE_VOCAB_LIMIT: usize = 50;

/// Below this pool size the pool itself is searched exhaustively
pub const EXHAUSTIVE_POOL_LIMIT: usize = 500;

/// A selected guess and how it was chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// The word to guess next
    pub word: Word,
    /// Size of the candidate pool the word was chosen from
    pub pool_size: usize,
    /// True when the exhaustive tier produced the word
    pub exhaustive: bool,
}

impl Suggestion {
    /// Chance (in percent) that this guess is the answer outright
    #[must_use]
    pub fn certainty(&self) -> u8 {
        (100.0 / self.pool_size as f64).round() as u8
    }
}

/// Choose the next guess for the current pool
///
/// - pool < 50: minimax over the full primary `dictionary`
/// - pool < 500: minimax restricted to the pool itself
/// - otherwise: frequency heuristic with a random pick from the tie pool
///
/// Returns `None` only when the pool (and, for the smallest tier, the
/// dictionary) is empty.
pub fn select_guess(
    pool: &[&Word],
    knowledge: &Knowledge,
    dictionary: &[Word],
    rng: &mut impl Rng,
) -> Option<Suggestion> {
    let pool_size = pool.len();

    let (word, exhaustive) = if pool_size < EXHAUSTIVE_VOCAB_LIMIT {
        // Close enough to the end that any vocabulary word may be worth
        // burning a turn on
        let universe: Vec<&Word> = dictionary.iter().collect();
        (minimax::best_guess(&universe, pool, knowledge, dictionary)?, true)
    } else if pool_size < EXHAUSTIVE_POOL_LIMIT {
        (minimax::best_guess(pool, pool, knowledge, dictionary)?, true)
    } else {
        (frequency::best_guess(pool, knowledge, rng)?, false)
    };

    Some(Suggestion {
        word: word.clone(),
        pool_size,
        exhaustive,
    })
}
