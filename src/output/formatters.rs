//! Formatting utilities for terminal output

use crate::core::{Feedback, Status};

/// The response symbol for one status (`_` / `?` / `!`)
#[must_use]
pub const fn status_symbol(status: Status) -> char {
    match status {
        Status::Miss => '_',
        Status::WrongSpot => '?',
        Status::Correct => '!',
    }
}

/// Format feedback as a 5-symbol response string
#[must_use]
pub fn feedback_to_symbols(feedback: Feedback) -> String {
    feedback.statuses().iter().map(|&s| status_symbol(s)).collect()
}

/// Format feedback as emoji squares
#[must_use]
pub fn feedback_to_emoji(feedback: Feedback) -> String {
    feedback
        .statuses()
        .iter()
        .map(|status| match status {
            Status::Miss => '⬜',
            Status::WrongSpot => '🟨',
            Status::Correct => '🟩',
        })
        .collect()
}
