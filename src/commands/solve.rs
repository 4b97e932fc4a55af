//! Solve a specific target word in simulation mode

use crate::core::Word;
use crate::solver::{Session, SessionReport, SimulatedAnswer};
use crate::wordlists::WordLists;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;

/// Result of solving one target word
pub struct SolveOutcome {
    pub target: String,
    pub report: SessionReport,
}

/// Solve a target word by simulating feedback against it
///
/// The target does not need to appear in either word list; an absent target
/// simply exhausts both lists and the report comes back unsolved.
///
/// # Errors
///
/// Returns an error if the target is not a valid 5-letter word.
pub fn solve_word(
    target: &str,
    lists: &WordLists,
    seed: Option<u64>,
) -> Result<SolveOutcome, String> {
    let answer = Word::new(target).map_err(|e| format!("Invalid target word: {e}"))?;

    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut session = Session::new(lists, rng);
    let mut source = SimulatedAnswer::new(answer);
    let report = session
        .run(&mut source)
        .map_err(|e: io::Error| e.to_string())?;

    Ok(SolveOutcome {
        target: target.to_lowercase(),
        report,
    })
}
