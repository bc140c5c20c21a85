//! EliMAC Comprehensive Criterion Benchmark
//!
//! Statistically rigorous performance measurements across all scenarios.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use elimac::{Elimac, Precomputation, TagRequest};
use rand::prelude::*;
use std::hint::black_box;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

const KEY1: [u8; 16] = [
    0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c,
];
const KEY2: [u8; 16] = [
    0x3c, 0x4f, 0xcf, 0x09, 0x88, 0x15, 0xf7, 0xab, 0xa6, 0xd2, 0xae, 0x28, 0x16, 0x15, 0x7e, 0x2b,
];

/// Counters covering every non-final block of a `len`-byte message.
fn cache_blocks(len: usize) -> u32 {
    ((len / 16) as u32).max(1)
}

// =============================================================================
// BENCHMARK 1: LATENCY
// =============================================================================

/// Hot path latency for small messages (tokens, headers, records).
fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Latency");
    let mac = Elimac::new(&KEY1, &KEY2);

    let sizes = [
        (16, "16B"),
        (64, "64B"),
        (256, "256B"),
        (KB, "1KB"),
        (4 * KB, "4KB"),
    ];

    for (size, name) in sizes {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &input,
            |b, data| b.iter(|| mac.tag(black_box(data)).unwrap()),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: BULK THROUGHPUT
// =============================================================================

/// Sequential throughput across the cache hierarchy (L1 to RAM).
fn bench_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Bulk");
    group.sample_size(50);
    let mac = Elimac::new(&KEY1, &KEY2);

    let sizes = [
        (8 * KB, "8KB"),
        (64 * KB, "64KB"),
        (256 * KB, "256KB"),
        (MB, "1MB"),
        (4 * MB, "4MB"),
        (16 * MB, "16MB"),
    ];

    for (size, name) in sizes {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &input,
            |b, data| b.iter(|| mac.tag(black_box(data)).unwrap()),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: MODES
// =============================================================================

/// The four request modes over the same inputs: how much the subkey cache
/// and the parallel fold buy at each size.
fn bench_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Modes");
    group.sample_size(50);
    let mac = Elimac::new(&KEY1, &KEY2);

    let sizes = [(4 * KB, "4KB"), (64 * KB, "64KB"), (MB, "1MB"), (16 * MB, "16MB")];

    for (size, name) in sizes {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        let cache = mac.precompute(cache_blocks(size)).unwrap();
        group.throughput(Throughput::Bytes(size as u64));

        let modes: [(&str, bool, bool); 4] = [
            ("sequential", false, false),
            ("precomputed", false, true),
            ("parallel", true, false),
            ("parallel-precomputed", true, true),
        ];

        for (mode, parallel, precomputed) in modes {
            group.bench_with_input(
                criterion::BenchmarkId::new(mode, name),
                &input,
                |b, data| {
                    let request = TagRequest {
                        tag_bits: 128,
                        parallel,
                        precomputation: if precomputed {
                            Precomputation::Cached(&cache)
                        } else {
                            Precomputation::Off
                        },
                    };
                    b.iter(|| mac.tag_with(black_box(data), &request).unwrap())
                },
            );
        }
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 4: STREAMING
// =============================================================================

/// Throughput for incremental updates (network streams, large files).
fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("4-Streaming");
    group.sample_size(50);
    let mac = Elimac::new(&KEY1, &KEY2);

    let test_cases = [
        (MB, 4 * KB, "1MB-4KB-chunks"),
        (MB, 64 * KB, "1MB-64KB-chunks"),
        (16 * MB, 64 * KB, "16MB-64KB-chunks"),
        (16 * MB, 256 * KB, "16MB-256KB-chunks"),
    ];

    for (total_size, chunk_size, name) in test_cases {
        let mut input = vec![0u8; total_size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(total_size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &(input, chunk_size),
            |b, (data, chunk_sz)| {
                b.iter(|| {
                    let mut hasher = mac.hasher();
                    for chunk in data.chunks(*chunk_sz) {
                        hasher.update(black_box(chunk));
                    }
                    hasher.finalize().unwrap()
                })
            },
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 5: THREAD SCALING
// =============================================================================

/// Multi-core scaling efficiency of the parallel fold (1 to N threads).
#[cfg(feature = "multithread")]
fn bench_thread_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("5-Thread-Scaling");
    group.sample_size(50);
    let mac = Elimac::new(&KEY1, &KEY2);

    let size = 16 * MB;
    let mut input = vec![0u8; size];
    rand::rng().fill(&mut input[..]);
    group.throughput(Throughput::Bytes(size as u64));

    let request = TagRequest {
        parallel: true,
        ..TagRequest::default()
    };

    let max_threads = num_cpus::get();
    let thread_counts: Vec<usize> = [1, 2, 4, 8, 16, 32]
        .iter()
        .copied()
        .filter(|&t| t <= max_threads)
        .collect();

    for threads in thread_counts {
        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(format!("{}threads", threads)),
            &threads,
            |b, &t| {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(t)
                    .build()
                    .unwrap();
                pool.install(|| b.iter(|| mac.tag_with(black_box(&input), &request).unwrap()));
            },
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 6: SPECIAL OPERATIONS
// =============================================================================

/// Latency/Throughput for secondary features (precompute, verify, truncation).
fn bench_special_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("6-Special-Operations");
    let mac = Elimac::new(&KEY1, &KEY2);

    let size = 64 * KB;
    let mut input = vec![0u8; size];
    rand::rng().fill(&mut input[..]);
    group.throughput(Throughput::Bytes(size as u64));

    // Regular tag
    group.bench_function("tag", |b| b.iter(|| mac.tag(black_box(&input)).unwrap()));

    // Subkey cache construction
    let blocks = cache_blocks(size);
    group.bench_function("precompute", |b| {
        b.iter(|| mac.precompute(black_box(blocks)).unwrap())
    });

    // Truncated tag
    let short_request = TagRequest {
        tag_bits: 64,
        ..TagRequest::default()
    };
    group.bench_function("tag-64bit", |b| {
        b.iter(|| mac.tag_with(black_box(&input), &short_request).unwrap())
    });

    // Verification (constant-time)
    let tag = mac.tag(&input).unwrap();
    group.bench_function("verify", |b| {
        b.iter(|| mac.verify(black_box(&input), black_box(tag.as_bytes())).unwrap())
    });

    // Instance setup (two key schedules + dispatch)
    group.bench_function("instance-setup", |b| {
        b.iter(|| Elimac::new(black_box(&KEY1), black_box(&KEY2)))
    });

    group.finish();
}

// =============================================================================
// BENCHMARK 7: BACKENDS
// =============================================================================

/// Dispatched kernel vs portable fallback on the block primitive.
fn bench_backends(c: &mut Criterion) {
    use elimac::kernels::constants::FINAL_ROUNDS;
    use elimac::kernels::schedule::KeySchedule;

    let mut group = c.benchmark_group("7-Backends");
    let schedule = KeySchedule::new(&KEY1, FINAL_ROUNDS).unwrap();
    let block = [0x42u8; 16];
    group.throughput(Throughput::Bytes(16));

    // Production path (AES-NI where detected)
    group.bench_function(format!("dispatched ({})", elimac::active_backend()), |b| {
        b.iter(|| elimac::kernels::encrypt_block(black_box(&schedule), black_box(&block)))
    });

    // Pure Rust baseline to quantify the hardware speedup
    group.bench_function("portable", |b| {
        b.iter(|| elimac::kernels::portable::encrypt_block(black_box(&schedule), black_box(&block)))
    });

    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(
    benches,
    bench_latency,
    bench_bulk,
    bench_modes,
    bench_streaming,
    bench_special_operations,
    bench_backends,
);

#[cfg(feature = "multithread")]
criterion_group!(benches_multithread, bench_thread_scaling,);

#[cfg(feature = "multithread")]
criterion_main!(benches, benches_multithread);

#[cfg(not(feature = "multithread"))]
criterion_main!(benches);
