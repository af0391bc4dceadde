//! Performance benchmarks for oxiarc-huffman
//!
//! This benchmark suite evaluates:
//! - Tree and lookup table construction
//! - Compression/decompression throughput into pre-allocated buffers
//! - Default table versus per-input empirical tables

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxiarc_huffman::{FrequencyTable, Huffman};
use std::hint::black_box;

/// Type alias for pattern generator functions
type PatternGenerator = fn(usize) -> Vec<u8>;

/// Generate test data patterns for benchmarking
mod test_data {
    /// Zero bytes - the default table's one-bit symbol
    pub fn zeros(size: usize) -> Vec<u8> {
        vec![0; size]
    }

    /// Random data - no skew to exploit
    pub fn random(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }

    /// Text-like data - what the default table is tuned for
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. \
                     Pack my box with five dozen liquor jugs. \
                     How vexingly quick daft zebras jump! ";
        let mut data = Vec::with_capacity(size);
        while data.len() < size {
            let remaining = size - data.len();
            let chunk_size = remaining.min(text.len());
            data.extend_from_slice(&text[..chunk_size]);
        }
        data
    }

    /// Small-integer payloads, as produced by packed network snapshots
    pub fn snapshot_like(size: usize) -> Vec<u8> {
        (0..size)
            .map(|i| match i % 7 {
                0 | 1 | 2 => 0,
                3 => (i % 5) as u8,
                4 => 0xFF,
                _ => (i % 64) as u8,
            })
            .collect()
    }
}

const SIZES: [(&str, usize); 3] = [
    ("1KB", 1024),
    ("64KB", 64 * 1024),
    ("1MB", 1024 * 1024),
];

const PATTERNS: [(&str, PatternGenerator); 4] = [
    ("zeros", test_data::zeros as PatternGenerator),
    ("random", test_data::random as PatternGenerator),
    ("text", test_data::text_like as PatternGenerator),
    ("snapshot", test_data::snapshot_like as PatternGenerator),
];

/// Benchmark tree + lookup table construction
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    let default_table = FrequencyTable::default();
    group.bench_function("default_table", |b| {
        b.iter(|| black_box(Huffman::new(black_box(&default_table))));
    });

    let empirical = FrequencyTable::from_data(&test_data::text_like(64 * 1024));
    group.bench_function("empirical_text", |b| {
        b.iter(|| black_box(Huffman::new(black_box(&empirical))));
    });

    group.finish();
}

/// Benchmark compression speed with the default table
fn bench_compression_speed(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression_speed");
    let huffman = Huffman::shared();

    for (size_name, size) in SIZES {
        for (pattern_name, generator) in PATTERNS {
            let data = generator(size);
            let mut output = vec![0u8; huffman.max_compressed_len(size)];
            let id = format!("{}/{}", size_name, pattern_name);

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(&id), &data, |b, data| {
                b.iter(|| {
                    let written = huffman.compress(black_box(data), &mut output).unwrap();
                    black_box(written);
                });
            });
        }
    }

    group.finish();
}

/// Benchmark decompression speed with the default table
fn bench_decompression_speed(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompression_speed");
    let huffman = Huffman::shared();

    for (size_name, size) in SIZES {
        for (pattern_name, generator) in PATTERNS {
            let original = generator(size);
            let compressed = oxiarc_huffman::compress(&original).unwrap();
            let mut output = vec![0u8; size];
            let id = format!("{}/{}", size_name, pattern_name);

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(
                BenchmarkId::from_parameter(&id),
                &compressed,
                |b, compressed| {
                    b.iter(|| {
                        let written = huffman
                            .decompress(black_box(compressed), &mut output)
                            .unwrap();
                        black_box(written);
                    });
                },
            );
        }
    }

    group.finish();
}

/// Compare the default table with a table fitted to the input
fn bench_compare_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_tables");
    let size = 64 * 1024;

    for (pattern_name, generator) in PATTERNS {
        let data = generator(size);
        let fitted = Huffman::new(&FrequencyTable::from_data(&data));

        for (table_name, huffman) in [("default", Huffman::shared()), ("fitted", &fitted)] {
            let compressed = oxiarc_huffman::compress_with(huffman, &data).unwrap();
            let mut output = vec![0u8; size];

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("{}_roundtrip", table_name), pattern_name),
                &data,
                |b, data| {
                    let mut scratch = vec![0u8; compressed.len()];
                    b.iter(|| {
                        let n = huffman.compress(black_box(data), &mut scratch).unwrap();
                        let m = huffman.decompress(&scratch[..n], &mut output).unwrap();
                        black_box(m);
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_compression_speed,
    bench_decompression_speed,
    bench_compare_tables,
);
criterion_main!(benches);
