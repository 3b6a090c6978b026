mod cli;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use bruteforce_wordlist::{
    enumerate, open_sink, permutation_count, validate, Alphabet, EnumerationConfig,
    DEFAULT_ALPHABET,
};
use cli::{Args, Mode};

fn main() -> Result<()> {
    let args = Args::parse();

    println!("\n{}", "🔑 Bruteforce Wordlist v1.0.0".bold().cyan());
    println!(
        "{}\n",
        "Permutation wordlist generator for offline cracking - Educational use only".dimmed()
    );

    let threads = args.threads.unwrap_or_else(num_cpus::get);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .context("Failed to size the worker thread pool")?;

    match args.mode {
        Mode::Generate {
            output,
            alphabet,
            min,
            max,
            chunk_size,
            append,
            skip_overflow,
        } => {
            let alphabet = Alphabet::parse(alphabet.as_deref().unwrap_or(DEFAULT_ALPHABET))?;
            let config = EnumerationConfig {
                min_len: min,
                max_len: max,
                chunk_size,
                verbose: args.verbose,
                skip_overflow,
            };
            validate(&alphabet, &config)?;

            println!(
                "Alphabet: {} symbols | Lengths: {}-{} | Threads: {}",
                alphabet.len().to_string().cyan(),
                min.to_string().cyan(),
                max.to_string().cyan(),
                threads.to_string().cyan()
            );
            println!("Output: {}\n", output.display().to_string().yellow());

            // Ctrl-C stops the run at the next chunk boundary.
            let running = Arc::new(AtomicBool::new(true));
            let r = running.clone();
            ctrlc::set_handler(move || {
                r.store(false, Ordering::SeqCst);
            })
            .context("Failed to install Ctrl-C handler")?;

            let sink = open_sink(&output, append)?;
            let report = enumerate(&alphabet, &config, sink, &running)?;

            println!("\n{} {}", "✓".green(), "Wordlist complete".bold());
            for length in &report.lengths_skipped {
                println!(
                    "{}",
                    format!("  ⚠️  length {length} skipped (count overflow)").yellow()
                );
            }
            println!("\n{}", "Statistics:".bold());
            println!("  Lines written: {}", report.lines_written.to_string().cyan());
            println!("  Duration: {:.2}s", report.duration_secs);
            println!(
                "  Speed: {} lines/second",
                format!("{:.0}", report.lines_per_second).green()
            );
        }
        Mode::Count { alphabet, min, max } => {
            let alphabet = Alphabet::parse(alphabet.as_deref().unwrap_or(DEFAULT_ALPHABET))?;
            let config = EnumerationConfig {
                min_len: min,
                max_len: max,
                ..Default::default()
            };
            validate(&alphabet, &config)?;

            println!("{}", "Permutations per length:".bold());
            let mut grand_total: Option<u64> = Some(0);
            for length in min..=max {
                match permutation_count(alphabet.len(), length) {
                    Some(count) => {
                        println!("  {:>3}  {}", length, count.to_string().cyan());
                        grand_total = grand_total.and_then(|t| t.checked_add(count));
                    }
                    None => {
                        println!("  {:>3}  {}", length, "overflows 64-bit range".red());
                        grand_total = None;
                    }
                }
            }
            match grand_total {
                Some(total) => println!("\nTotal: {}", total.to_string().bold().green()),
                None => println!("\nTotal: {}", "overflows 64-bit range".red()),
            }
        }
    }

    Ok(())
}
