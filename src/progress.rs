/*!
 * Progress feedback for long enumeration runs
 *
 * Two mutually exclusive modes, chosen once per run: verbose mode prints
 * every generated string plus a per-chunk completion notice, quiet mode
 * drives a single continuously-overwritten percent bar per length. State
 * lives here, owned by the pipeline orchestrator, and is only touched
 * between chunks - never by the parallel decode workers.
 */

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

pub enum Reporter {
    Verbose,
    Bar(ProgressBar),
}

impl Reporter {
    /// Start reporting one permutation length covering `total` indices.
    pub fn start(verbose: bool, length: usize, total: u64) -> Self {
        if verbose {
            println!(
                "{}",
                format!("Enumerating length {length} ({total} permutations)").cyan()
            );
            return Reporter::Verbose;
        }
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} length {msg} [{bar:40.cyan/blue}] {percent}% ({pos}/{len})")
                .expect("progress template is valid")
                .progress_chars("#>-"),
        );
        pb.set_message(length.to_string());
        Reporter::Bar(pb)
    }

    /// Emit one generated string (verbose mode only).
    #[inline]
    pub fn line(&self, line: &str) {
        if matches!(self, Reporter::Verbose) {
            println!("{line}");
        }
    }

    /// Record that a chunk has been fully flushed to the sink.
    pub fn chunk_flushed(&self, processed: u64, total: u64) {
        match self {
            Reporter::Verbose => {
                println!(
                    "{}",
                    format!("  ✓ chunk flushed ({processed}/{total})").dimmed()
                );
            }
            Reporter::Bar(pb) => pb.set_position(processed),
        }
    }

    /// Close out the current length, clearing the status line.
    pub fn finish(&self) {
        if let Reporter::Bar(pb) = self {
            pb.finish_and_clear();
        }
    }
}
