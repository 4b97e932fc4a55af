//! Interactive assistant mode
//!
//! Suggests guesses for a real game and reads the observed feedback from the
//! terminal as 5-symbol response strings.

use crate::core::Feedback;
use crate::output::formatters::feedback_to_symbols;
use crate::solver::{FeedbackSource, Session, Suggestion};
use crate::wordlists::WordLists;
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};

/// Feedback source backed by an interactive terminal prompt
///
/// Malformed responses are rejected and re-prompted in a plain loop; the
/// prompt never gives up on its own, only on end of input.
struct ConsolePrompt;

impl FeedbackSource for ConsolePrompt {
    fn observe(&mut self, suggestion: &Suggestion) -> io::Result<Feedback> {
        let label = if suggestion.exhaustive {
            "Best Guess"
        } else {
            "Guess"
        };
        println!(
            "{}: {} ({}% certain)",
            label,
            suggestion.word.text().to_uppercase().bright_yellow().bold(),
            suggestion.certainty()
        );

        loop {
            print!("What's the result? (_/?/!) ");
            io::stdout().flush()?;

            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before feedback arrived",
                ));
            }

            if let Some(feedback) = Feedback::parse(input.trim()) {
                return Ok(feedback);
            }
            println!("{}", "Invalid response string, try again".yellow());
        }
    }
}

/// Run the interactive assistant
///
/// # Errors
///
/// Returns an I/O error if the terminal input channel fails.
pub fn run_play(lists: &WordLists, seed: Option<u64>) -> io::Result<()> {
    println!("\nEnter the feedback for each suggested guess:");
    println!("  !  correct position");
    println!("  ?  in the word, wrong position");
    println!("  _  not in the word\n");

    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut session = Session::new(lists, rng);
    let report = session.run(&mut ConsolePrompt)?;

    println!();
    if report.solved {
        println!(
            "{}",
            format!("Oh yeah, {} guesses", report.guesses())
                .green()
                .bold()
        );
        for (i, round) in report.rounds.iter().enumerate() {
            println!(
                "  {}. {} {}",
                i + 1,
                round.suggestion.word.text().to_uppercase(),
                feedback_to_symbols(round.feedback)
            );
        }
    } else {
        println!("{}", "I give up".red().bold());
    }

    Ok(())
}
