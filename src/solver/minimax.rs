//! Exhaustive total-remaining-words search (Tier A)
//!
//! For every guess in the universe, simulate the feedback against every
//! possible remaining answer, apply it to a disposable copy of the knowledge,
//! and measure how many dictionary words would survive. The guess minimizing
//! the summed survivor count wins; ties fall to the smaller worst case, then
//! to the earlier position in the universe.

use crate::core::{Feedback, Knowledge, Word};
use crate::solver::filter;
use rayon::prelude::*;

/// Aggregate outcome of one hypothetical guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessScore {
    /// Sum of surviving pool sizes across all simulated answers
    pub total: usize,
    /// Largest surviving pool size across all simulated answers
    pub worst: usize,
}

/// Score a guess against every possible remaining answer
///
/// Hypothetical pools are re-filtered against `dictionary` (the primary
/// vocabulary) on a clone of `knowledge`; an exactly-right guess contributes
/// zero survivors.
#[must_use]
pub fn score_guess(
    guess: &Word,
    pool: &[&Word],
    knowledge: &Knowledge,
    dictionary: &[Word],
) -> GuessScore {
    let mut total = 0;
    let mut worst = 0;

    for &answer in pool {
        let feedback = Feedback::evaluate(guess, answer);
        let mut trial = knowledge.clone();
        let survivors = if trial.update(guess, &feedback) {
            0
        } else {
            filter::count_consistent(&trial, dictionary)
        };

        total += survivors;
        worst = worst.max(survivors);
    }

    GuessScore { total, worst }
}

/// Select the guess with the minimal total, breaking ties by worst case
///
/// Deterministic: among equal `(total, worst)` scores the guess appearing
/// first in `universe` wins. The scoring loop runs in parallel; including the
/// universe index in the minimized key reproduces the sequential
/// first-encounter order.
#[must_use]
pub fn best_guess<'a>(
    universe: &[&'a Word],
    pool: &[&Word],
    knowledge: &Knowledge,
    dictionary: &[Word],
) -> Option<&'a Word> {
    universe
        .par_iter()
        .enumerate()
        .map(|(index, &guess)| {
            let score = score_guess(guess, pool, knowledge, dictionary);
            (score.total, score.worst, index, guess)
        })
        .min_by_key(|&(total, worst, index, _)| (total, worst, index))
        .map(|(_, _, _, guess)| guess)
}
