//! MAC Comparison Benchmark
//!
//! Compares EliMAC against established message authentication codes:
//! CMAC-AES128 (same primitive, serial chaining), HMAC-SHA-256 (the
//! ubiquitous default), and keyed BLAKE3 (the fast tree hash).

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use aes::Aes128;
use cmac::Cmac;
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use elimac::{Elimac, Precomputation, TagRequest};
use hmac::Hmac;
use rand::prelude::*;
use sha2::Sha256;
use std::hint::black_box;

use cmac::Mac as _;

type HmacSha256 = Hmac<Sha256>;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

const KEY1: [u8; 16] = [
    0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c,
];
const KEY2: [u8; 16] = [
    0x3c, 0x4f, 0xcf, 0x09, 0x88, 0x15, 0xf7, 0xab, 0xa6, 0xd2, 0xae, 0x28, 0x16, 0x15, 0x7e, 0x2b,
];
const KEY32: [u8; 32] = [0x42u8; 32];

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_mac_compare(c: &mut Criterion) {
    let mac = Elimac::new(&KEY1, &KEY2);

    // Scenarios:
    // - Small (64B): per-message overhead (schedules are prebuilt everywhere)
    // - Medium (4KB): L1 cache hot-path
    // - Large (1MB): bulk throughput, where the parallel fold can engage
    let sizes = [64, 4 * KB, MB];

    for size in sizes {
        let mut group = c.benchmark_group(format!("MAC-{size}B"));
        group.throughput(Throughput::Bytes(size as u64));

        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);

        // 1. EliMAC (Production Path)
        group.bench_function("EliMAC", |b| {
            b.iter(|| mac.tag(black_box(&input)).unwrap());
        });

        // 2. EliMAC with precomputed stream subkeys
        let cache = mac.precompute(((size / 16) as u32).max(1)).unwrap();
        let cached_request = TagRequest {
            precomputation: Precomputation::Cached(&cache),
            ..TagRequest::default()
        };
        group.bench_function("EliMAC-precomputed", |b| {
            b.iter(|| mac.tag_with(black_box(&input), &cached_request).unwrap());
        });

        // 3. EliMAC parallel fold (pays off on bulk inputs only)
        let parallel_request = TagRequest {
            parallel: true,
            ..TagRequest::default()
        };
        group.bench_function("EliMAC-parallel", |b| {
            b.iter(|| mac.tag_with(black_box(&input), &parallel_request).unwrap());
        });

        // 4. CMAC-AES128 - same block cipher, strictly serial chaining
        group.bench_function("CMAC-AES128", |b| {
            b.iter(|| {
                let mut m = <Cmac<Aes128>>::new_from_slice(&KEY1).unwrap();
                m.update(black_box(&input));
                black_box(m.finalize().into_bytes())
            });
        });

        // 5. HMAC-SHA-256 - the ubiquitous default
        group.bench_function("HMAC-SHA256", |b| {
            b.iter(|| {
                let mut m = <HmacSha256>::new_from_slice(&KEY32).unwrap();
                m.update(black_box(&input));
                black_box(m.finalize().into_bytes())
            });
        });

        // 6. Keyed BLAKE3 (serial)
        group.bench_function("BLAKE3-keyed", |b| {
            b.iter(|| black_box(blake3::keyed_hash(&KEY32, black_box(&input))));
        });

        // 7. Keyed BLAKE3 (Rayon) - tree-parallel reference point
        group.bench_function("BLAKE3-keyed-rayon", |b| {
            b.iter(|| {
                let mut h = blake3::Hasher::new_keyed(&KEY32);
                h.update_rayon(black_box(&input));
                black_box(h.finalize())
            });
        });

        group.finish();
    }
}

criterion_group!(benches, bench_mac_compare);
criterion_main!(benches);
