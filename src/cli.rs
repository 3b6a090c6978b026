use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bruteforce-wordlist")]
#[command(version = "1.0.0")]
#[command(about = "Exhaustive permutation wordlist generator - Educational use only", long_about = None)]
pub struct Args {
    /// Number of threads to use (default: CPU count)
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Verbose output (print every generated string)
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub mode: Mode,
}

#[derive(Subcommand)]
pub enum Mode {
    /// Generate the wordlist and write it to a file
    ///
    /// Enumerates every permutation of distinct alphabet symbols for each
    /// length in the range, in lexicographic order, one string per line.
    ///
    /// Example: bruteforce-wordlist generate wordlist.txt --min 1 --max 4
    Generate {
        /// Output file for the generated wordlist
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Alphabet to permute, in order (default: a-z, 0-9, '.', '_', '-')
        #[arg(short, long)]
        alphabet: Option<String>,

        /// Minimum permutation length
        #[arg(long, default_value = "1")]
        min: usize,

        /// Maximum permutation length
        #[arg(long, default_value = "4")]
        max: usize,

        /// Indices decoded and buffered per chunk (memory knob)
        #[arg(short, long, default_value = "65536")]
        chunk_size: usize,

        /// Append to the output file instead of overwriting it
        #[arg(long)]
        append: bool,

        /// Skip lengths whose permutation count overflows 64 bits
        /// instead of aborting the run
        #[arg(long)]
        skip_overflow: bool,
    },

    /// Count permutations per length without generating anything
    ///
    /// Dry run: prints the number of lines `generate` would write for each
    /// length, using the same overflow detection.
    ///
    /// Example: bruteforce-wordlist count --min 1 --max 8
    Count {
        /// Alphabet to permute, in order (default: a-z, 0-9, '.', '_', '-')
        #[arg(short, long)]
        alphabet: Option<String>,

        /// Minimum permutation length
        #[arg(long, default_value = "1")]
        min: usize,

        /// Maximum permutation length
        #[arg(long, default_value = "4")]
        max: usize,
    },
}
