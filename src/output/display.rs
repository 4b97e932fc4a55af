//! Display functions for command results

use super::formatters::{feedback_to_emoji, feedback_to_symbols};
use crate::commands::{SimulationStats, SolveOutcome};
use colored::Colorize;

/// Print the rounds and outcome of a single solved word
pub fn print_solve_outcome(outcome: &SolveOutcome, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        outcome.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, round) in outcome.report.rounds.iter().enumerate() {
        let label = if round.suggestion.exhaustive {
            "best"
        } else {
            "scored"
        };
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            round.suggestion.word.text().to_uppercase(),
            feedback_to_emoji(round.feedback)
        );

        if verbose {
            println!("  Feedback:   {}", feedback_to_symbols(round.feedback));
            println!(
                "  Pool:       {} candidates ({label}, {}% certain)",
                round.suggestion.pool_size,
                round.suggestion.certainty()
            );
        }
    }

    println!();
    if outcome.report.solved {
        println!(
            "{}",
            format!("Solved in {} guesses", outcome.report.guesses())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("Gave up after {} guesses", outcome.report.guesses())
                .red()
                .bold()
        );
    }
}

/// Print the summary of a simulation run
pub fn print_simulation_stats(stats: &SimulationStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", stats.total_words);
    println!(
        "   Solved:           {} ({:.1}%)",
        stats.solved,
        stats.solved as f64 / stats.total_words as f64 * 100.0
    );
    if stats.failed > 0 {
        println!(
            "   Gave up:          {}",
            stats.failed.to_string().red().bold()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", stats.duration.as_secs_f64());

    println!("\n{}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=stats.max_guesses {
        let count = stats.distribution.get(&guess_count).copied().unwrap_or(0);
        if stats.solved > 0 {
            let pct = count as f64 / stats.solved as f64 * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
            );
            println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
        }
    }
}
