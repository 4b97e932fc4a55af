//! Batch simulation harness
//!
//! Runs one solving session per primary word and writes a tabular report of
//! `word<TAB>guesses` records, one per word, for aggregate evaluation.

use crate::solver::{Session, SimulatedAnswer};
use crate::wordlists::WordLists;
use indicatif::{ProgressBar, ProgressStyle};
use log::error;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};

/// Aggregate statistics from a simulation run
#[derive(Debug)]
pub struct SimulationStats {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
}

/// Run the solver against every primary word (or a limited prefix)
///
/// Each word gets its own session seeded from `seed` and the word's index, so
/// a run is reproducible end to end. Sessions that give up are logged at
/// error level and still contribute one record.
///
/// # Errors
///
/// Returns an I/O error if the report file cannot be created or written.
pub fn run_simulation(
    lists: &WordLists,
    limit: Option<usize>,
    seed: u64,
    out_path: &Path,
) -> io::Result<SimulationStats> {
    let targets: Vec<_> = lists
        .primary
        .iter()
        .take(limit.unwrap_or(lists.primary.len()))
        .collect();

    println!("Simulating {} words...", targets.len());

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut out = BufWriter::new(File::create(out_path)?);

    let mut solved = 0;
    let mut failed = 0;
    let mut total_guesses = 0;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    let start = Instant::now();

    for (index, target) in targets.iter().enumerate() {
        let rng = StdRng::seed_from_u64(seed.wrapping_add(index as u64));
        let mut session = Session::new(lists, rng);
        let mut source = SimulatedAnswer::new((*target).clone());
        let report = session.run(&mut source)?;

        let guesses = report.guesses();
        writeln!(out, "{}\t{}", target.text(), guesses)?;

        if report.solved {
            solved += 1;
            total_guesses += guesses;
            max_guesses = max_guesses.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            failed += 1;
            error!("gave up on {}", target.text());
        }

        if index % 10 == 0 && solved > 0 {
            let avg = total_guesses as f64 / solved as f64;
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");
    out.flush()?;

    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };

    Ok(SimulationStats {
        total_words: targets.len(),
        solved,
        failed,
        average_guesses,
        max_guesses,
        distribution,
        duration: start.elapsed(),
    })
}
