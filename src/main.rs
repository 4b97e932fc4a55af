//! Wordle Knowns - CLI
//!
//! Knowledge-tracking word guessing assistant with interactive, simulation
//! and replay modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_knowns::{
    commands::{run_play, run_remaining, run_simulation, solve_word},
    output::{print_simulation_stats, print_solve_outcome},
    wordlists::{WordLists, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_knowns",
    about = "Word guessing assistant that tracks per-slot knowledge from feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the primary (likely answers) word list with a file
    #[arg(long, global = true, value_name = "FILE")]
    primary: Option<PathBuf>,

    /// Override the extended (fallback) word list with a file
    #[arg(long, global = true, value_name = "FILE")]
    extended: Option<PathBuf>,

    /// Seed for reproducible tie-breaking among equally scored guesses
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive assistant mode (default): suggests guesses, you type the feedback
    Play,

    /// Solve a specific target word in simulation
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Run the solver against every primary word and report statistics
    Simulate {
        /// Limit number of words to test
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Report file for per-word guess counts (word<TAB>guesses)
        #[arg(short, long, default_value = "simulation.tsv")]
        output: PathBuf,
    },

    /// List the words still possible after a sequence of guesses
    Remaining {
        /// The known answer to replay against
        answer: String,

        /// The guesses already played, in order
        #[arg(required = true)]
        guesses: Vec<String>,
    },
}

/// Load word lists, applying any file overrides from the CLI
fn load_wordlists(cli: &Cli) -> Result<WordLists> {
    let mut lists = WordLists::embedded();

    if let Some(path) = &cli.primary {
        lists.primary = load_from_file(path)?;
    }
    if let Some(path) = &cli.extended {
        lists.extended = load_from_file(path)?;
    }

    Ok(lists)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let lists = load_wordlists(&cli)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play(&lists, cli.seed)?,
        Commands::Solve { word, verbose } => {
            let outcome = solve_word(&word, &lists, cli.seed).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_outcome(&outcome, verbose);
        }
        Commands::Simulate { limit, output } => {
            let stats = run_simulation(&lists, limit, cli.seed.unwrap_or(0), &output)?;
            print_simulation_stats(&stats);
            println!("\nPer-word records written to {}", output.display());
        }
        Commands::Remaining { answer, guesses } => {
            run_remaining(&answer, &guesses, &lists).map_err(|e| anyhow::anyhow!(e))?;
        }
    }

    Ok(())
}
