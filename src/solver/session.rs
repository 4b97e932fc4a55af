//! The solve loop
//!
//! One `Session` owns the knowledge for one puzzle and drives the
//! filter → select → observe → update cycle until solved or out of words.
//! Feedback arrives through the [`FeedbackSource`] seam: simulated from a
//! known answer, or typed in by whoever is playing the real game.

use crate::core::{Feedback, Knowledge, Word};
use crate::solver::filter;
use crate::solver::selector::{Suggestion, select_guess};
use crate::wordlists::WordLists;
use log::{debug, error, warn};
use rand::Rng;
use std::io;

/// Supplies feedback for each suggested guess
pub trait FeedbackSource {
    /// Observe the feedback for a suggested guess
    ///
    /// # Errors
    /// Returns an I/O error when the underlying input channel fails.
    fn observe(&mut self, suggestion: &Suggestion) -> io::Result<Feedback>;
}

/// Programmatic feedback source with a known answer (simulation / self-play)
pub struct SimulatedAnswer {
    answer: Word,
}

impl SimulatedAnswer {
    #[must_use]
    pub const fn new(answer: Word) -> Self {
        Self { answer }
    }
}

impl FeedbackSource for SimulatedAnswer {
    fn observe(&mut self, suggestion: &Suggestion) -> io::Result<Feedback> {
        Ok(Feedback::evaluate(&suggestion.word, &self.answer))
    }
}

/// One completed round: the suggestion made and the feedback it earned
#[derive(Debug, Clone)]
pub struct RoundRecord {
    pub suggestion: Suggestion,
    pub feedback: Feedback,
}

/// Outcome of a full session
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub solved: bool,
    pub rounds: Vec<RoundRecord>,
}

impl SessionReport {
    /// Number of guesses taken (including the solving guess)
    #[must_use]
    pub fn guesses(&self) -> usize {
        self.rounds.len()
    }
}

/// A single solving session
///
/// Owns its knowledge state exclusively; nothing is shared across sessions.
pub struct Session<'a, R: Rng> {
    lists: &'a WordLists,
    knowledge: Knowledge,
    rng: R,
}

impl<'a, R: Rng> Session<'a, R> {
    #[must_use]
    pub fn new(lists: &'a WordLists, rng: R) -> Self {
        Self {
            lists,
            knowledge: Knowledge::new(),
            rng,
        }
    }

    /// The knowledge accumulated so far
    #[must_use]
    pub const fn knowledge(&self) -> &Knowledge {
        &self.knowledge
    }

    /// Run the session to completion
    ///
    /// Each round filters the active list, selects a guess, observes feedback
    /// and merges it into the knowledge. When the primary list runs out of
    /// candidates the session retries once with the extended list; if that is
    /// also exhausted it gives up. There is no guess cap: a solvable puzzle
    /// runs until solved.
    ///
    /// # Errors
    /// Propagates I/O errors from the feedback source.
    pub fn run(&mut self, source: &mut dyn FeedbackSource) -> io::Result<SessionReport> {
        let mut rounds = Vec::new();
        let mut extended_active = false;

        loop {
            let active = if extended_active {
                &self.lists.extended
            } else {
                &self.lists.primary
            };

            let pool = filter::consistent(&self.knowledge, active);
            if pool.is_empty() {
                if extended_active {
                    error!("no candidates left in the extended list, giving up");
                    return Ok(SessionReport {
                        solved: false,
                        rounds,
                    });
                }
                warn!("not in the primary list, trying the extended list");
                extended_active = true;
                continue;
            }
            debug!("{} valid words remain", pool.len());

            let Some(suggestion) =
                select_guess(&pool, &self.knowledge, active, &mut self.rng)
            else {
                error!("selector produced no guess, giving up");
                return Ok(SessionReport {
                    solved: false,
                    rounds,
                });
            };

            let feedback = source.observe(&suggestion)?;
            let solved = self.knowledge.update(&suggestion.word, &feedback);
            rounds.push(RoundRecord {
                suggestion,
                feedback,
            });

            if solved {
                return Ok(SessionReport {
                    solved: true,
                    rounds,
                });
            }
        }
    }
}

/// Replay a sequence of guesses against a known answer
///
/// Returns the knowledge state those guesses would have produced; useful for
/// inspecting which words remain after a partially played game.
#[must_use]
pub fn replay_guesses(answer: &Word, guesses: &[Word]) -> Knowledge {
    let mut knowledge = Knowledge::new();
    for guess in guesses {
        let feedback = Feedback::evaluate(guess, answer);
        knowledge.update(guess, &feedback);
    }
    knowledge
}
