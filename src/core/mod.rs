//! Core domain types for the solver

mod feedback;
mod knowledge;
mod word;

pub use feedback::{Feedback, Status};
pub use knowledge::Knowledge;
pub use word::{Word, WordError};

/// Fixed puzzle width. Five throughout, though the types generalize.
pub const WORD_LEN: usize = 5;
