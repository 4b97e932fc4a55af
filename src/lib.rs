//! Wordle Knowns
//!
//! A knowledge-tracking word guessing assistant. Feedback from each guess is
//! folded into a per-slot knowledge state, which filters the candidate pool
//! and drives a two-tier guess selector: exhaustive minimax for small pools,
//! letter-frequency scoring for large ones.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_knowns::core::{Feedback, Knowledge, Word};
//!
//! let guess = Word::new("crane").unwrap();
//! let answer = Word::new("trace").unwrap();
//!
//! let feedback = Feedback::evaluate(&guess, &answer);
//! let mut knowledge = Knowledge::new();
//! knowledge.update(&guess, &feedback);
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
