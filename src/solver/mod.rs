//! Constraint filtering, guess selection and the solve loop

pub mod filter;
pub mod frequency;
pub mod minimax;
mod selector;
mod session;

pub use selector::{EXHAUSTIVE_POOL_LIMIT, EXHAUSTIVE_VOCAB_LIMIT, Suggestion, select_guess};
pub use session::{
    FeedbackSource, RoundRecord, Session, SessionReport, SimulatedAnswer, replay_guesses,
};
