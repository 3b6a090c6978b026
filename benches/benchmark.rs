//! Benchmarks for permutation unranking and chunked enumeration.
//!
//! Measures raw decode throughput across permutation lengths and the full
//! pipeline (decode + render + append) against a null sink.

use std::io;
use std::sync::atomic::AtomicBool;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use bruteforce_wordlist::{
    decode, enumerate, permutation_count, Alphabet, EnumerationConfig,
};

/// Alphabet used consistently across all benchmarks.
const BENCH_ALPHABET: &str = "abcdefghijklmnop";

/// Benchmarks a single unranking operation at increasing lengths.
fn bench_decode(c: &mut Criterion) {
    let n = BENCH_ALPHABET.len();
    let mut group = c.benchmark_group("decode_single_index");

    for r in [4usize, 8, 12, 16] {
        let total = permutation_count(n, r).unwrap();
        let index = total / 2;
        let mut row = vec![0u8; r];
        group.bench_with_input(BenchmarkId::from_parameter(r), &r, |b, _| {
            b.iter(|| {
                decode(black_box(n), black_box(index), &mut row);
                black_box(&row);
            });
        });
    }

    group.finish();
}

/// Benchmarks the full pipeline writing to a null sink.
fn bench_enumerate(c: &mut Criterion) {
    let alphabet = Alphabet::parse(&BENCH_ALPHABET[..8]).unwrap();
    let config = EnumerationConfig {
        min_len: 1,
        max_len: 5,
        chunk_size: 4096,
        verbose: false,
        skip_overflow: false,
    };
    // 8 + 56 + 336 + 1680 + 6720 lines per iteration.
    let lines: u64 = (1..=5).map(|r| permutation_count(8, r).unwrap()).sum();

    let mut group = c.benchmark_group("enumerate_pipeline");
    group.throughput(Throughput::Elements(lines));
    group.bench_function("8_symbols_len_1_to_5", |b| {
        let running = AtomicBool::new(true);
        b.iter(|| {
            let report = enumerate(&alphabet, &config, io::sink(), &running).unwrap();
            black_box(report.lines_written);
        });
    });
    group.finish();
}

criterion_group!(benches, bench_decode, bench_enumerate);
criterion_main!(benches);
