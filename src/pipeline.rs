/*!
 * Chunked enumeration pipeline
 *
 * For each requested length, partitions the global index space into
 * bounded chunks, decodes every index of a chunk in parallel into a
 * disjoint row of a shared buffer, and appends the rendered strings to
 * the output sink in ascending index order. Chunks are strictly
 * sequential: the next chunk's decode work starts only after the current
 * chunk is fully flushed, which bounds memory to one chunk of rows and
 * keeps the output file in ascending rank order.
 *
 * This is the only module that performs I/O; the decoder stays pure.
 */

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use colored::Colorize;
use rayon::prelude::*;

use crate::alphabet::Alphabet;
use crate::chunk::ChunkSchedule;
use crate::decoder::{decode, permutation_count};
use crate::error::WordlistError;
use crate::progress::Reporter;

/// Tuning and policy knobs for one enumeration run.
pub struct EnumerationConfig {
    /// Shortest permutation length to enumerate.
    pub min_len: usize,
    /// Longest permutation length to enumerate (inclusive).
    pub max_len: usize,
    /// Maximum indices decoded and buffered per chunk. Memory/performance
    /// knob only - never affects output content or order.
    pub chunk_size: usize,
    /// Print every generated string instead of a progress bar.
    pub verbose: bool,
    /// Skip lengths whose permutation count overflows instead of aborting.
    pub skip_overflow: bool,
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        Self {
            min_len: 1,
            max_len: 4,
            chunk_size: 65_536,
            verbose: false,
            skip_overflow: false,
        }
    }
}

/// Summary of a completed run.
#[derive(Debug)]
pub struct EnumerationReport {
    pub lines_written: u64,
    pub lengths_skipped: Vec<usize>,
    pub duration_secs: f64,
    pub lines_per_second: f64,
}

/// Reject invalid configurations before any enumeration begins.
pub fn validate(alphabet: &Alphabet, config: &EnumerationConfig) -> Result<(), WordlistError> {
    if config.min_len == 0 {
        return Err(WordlistError::ZeroLength);
    }
    if config.min_len > config.max_len {
        return Err(WordlistError::EmptyLengthRange {
            min: config.min_len,
            max: config.max_len,
        });
    }
    if config.max_len > alphabet.len() {
        return Err(WordlistError::LengthExceedsAlphabet {
            len: config.max_len,
            alphabet: alphabet.len(),
        });
    }
    if config.chunk_size == 0 {
        return Err(WordlistError::ZeroChunkSize);
    }
    Ok(())
}

/// Open the output file, truncating or appending per caller choice.
pub fn open_sink(path: &Path, append: bool) -> Result<File, WordlistError> {
    let mut opts = OpenOptions::new();
    opts.create(true);
    if append {
        opts.append(true);
    } else {
        opts.write(true).truncate(true);
    }
    Ok(opts.open(path)?)
}

/// Enumerate every permutation of the alphabet for each length in the
/// configured range, appending one string per line to `sink`.
///
/// Output is grouped by ascending length, then ascending rank within a
/// length. The `running` flag is checked at chunk boundaries; clearing it
/// stops the run after the current chunk is flushed.
///
/// # Arguments
/// * `alphabet` - Ordered symbol set defining the output order
/// * `config` - Length range, chunk size, and reporting/overflow policy
/// * `sink` - Append-only destination for newline-delimited strings
/// * `running` - Cooperative cancellation flag (true = keep going)
pub fn enumerate<W: Write>(
    alphabet: &Alphabet,
    config: &EnumerationConfig,
    mut sink: W,
    running: &AtomicBool,
) -> Result<EnumerationReport, WordlistError> {
    validate(alphabet, config)?;

    let n = alphabet.len();
    let start = Instant::now();
    let mut lines_written: u64 = 0;
    let mut lengths_skipped: Vec<usize> = Vec::new();
    // Chunk serialization buffers, reused across chunks.
    let mut text = String::new();
    let mut line = String::new();

    for r in config.min_len..=config.max_len {
        let total = match permutation_count(n, r) {
            Some(total) => total,
            None if config.skip_overflow => {
                eprintln!(
                    "{}",
                    format!("⚠️  Skipping length {r}: permutation count overflows 64 bits")
                        .yellow()
                );
                lengths_skipped.push(r);
                continue;
            }
            None => return Err(WordlistError::CountOverflow { length: r }),
        };
        if total == 0 {
            continue;
        }

        let reporter = Reporter::start(config.verbose, r, total);
        let schedule = ChunkSchedule::new(total, config.chunk_size);
        for chunk in schedule.iter() {
            if !running.load(Ordering::SeqCst) {
                return Err(WordlistError::Interrupted { lines_written });
            }

            // Each index decodes into its own row; no two workers touch
            // the same bytes, so the buffer needs no locking.
            let mut rows = vec![0u8; chunk.len * r];
            rows.par_chunks_mut(r).enumerate().for_each(|(j, row)| {
                decode(n, chunk.offset + j as u64, row);
            });

            // Single-writer serialization: the whole chunk is rendered in
            // rank order, then flushed in one append.
            text.clear();
            for row in rows.chunks(r) {
                line.clear();
                alphabet.render_into(row, &mut line);
                reporter.line(&line);
                text.push_str(&line);
                text.push('\n');
            }
            sink.write_all(text.as_bytes())?;
            sink.flush()?;

            lines_written += chunk.len as u64;
            reporter.chunk_flushed(chunk.offset + chunk.len as u64, total);
        }
        reporter.finish();
    }

    let duration_secs = start.elapsed().as_secs_f64();
    Ok(EnumerationReport {
        lines_written,
        lengths_skipped,
        duration_secs,
        lines_per_second: lines_written as f64 / duration_secs.max(f64::EPSILON),
    })
}
