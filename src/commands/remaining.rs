//! Replay guesses against a known answer and list the surviving words

use crate::core::Word;
use crate::solver::{filter, replay_guesses};
use crate::wordlists::WordLists;

/// Which primary words are still possible after the given guesses
///
/// Replays the feedback each guess would have received against `answer`,
/// accumulates the knowledge and filters the primary list with it.
///
/// # Errors
///
/// Returns an error if the answer or any guess is not a valid 5-letter word.
pub fn remaining_words(
    answer: &str,
    guesses: &[String],
    lists: &WordLists,
) -> Result<Vec<String>, String> {
    let answer = Word::new(answer).map_err(|e| format!("Invalid answer word: {e}"))?;
    let guesses: Vec<Word> = guesses
        .iter()
        .map(|g| Word::new(g.as_str()).map_err(|e| format!("Invalid guess '{g}': {e}")))
        .collect::<Result<_, _>>()?;

    let knowledge = replay_guesses(&answer, &guesses);
    Ok(filter::consistent(&knowledge, &lists.primary)
        .into_iter()
        .map(|word| word.text().to_string())
        .collect())
}

/// Print the surviving words, one per line
///
/// # Errors
///
/// Propagates validation errors from [`remaining_words`].
pub fn run_remaining(
    answer: &str,
    guesses: &[String],
    lists: &WordLists,
) -> Result<(), String> {
    let remaining = remaining_words(answer, guesses, lists)?;
    println!("{} words remain:", remaining.len());
    for word in remaining {
        println!("  {word}");
    }
    Ok(())
}
