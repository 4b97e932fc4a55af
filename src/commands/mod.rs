//! Command implementations

mod play;
mod remaining;
mod simulate;
mod solve;

pub use play::run_play;
pub use remaining::{remaining_words, run_remaining};
pub use simulate::{SimulationStats, run_simulation};
pub use solve::{SolveOutcome, solve_word};
