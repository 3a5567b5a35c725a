//! Performance benchmarks for oxigif-lzw.
//!
//! Measures compression and decompression throughput for the pixel
//! patterns GIF frames actually exhibit: flat fills, dithered noise, and
//! banded gradients.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxigif_lzw::{compress, decompress};
use std::hint::black_box;

/// Flat fill - a single palette index (best compression).
fn uniform(size: usize) -> Vec<u8> {
    vec![0x17; size]
}

/// Dithered noise - reproducible pseudo-random indices (worst compression).
fn noise(size: usize) -> Vec<u8> {
    let mut seed: u64 = 0x123456789ABCDEF0;
    (0..size)
        .map(|_| {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            (seed >> 33) as u8
        })
        .collect()
}

/// Horizontal bands - short runs typical of gradient fills.
fn banded(size: usize) -> Vec<u8> {
    (0..size).map(|i| ((i / 32) % 256) as u8).collect()
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress");
    for (name, generator) in [
        ("uniform", uniform as fn(usize) -> Vec<u8>),
        ("noise", noise),
        ("banded", banded),
    ] {
        for size in [4096usize, 65536] {
            let data = generator(size);
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::new(name, size), &data, |b, data| {
                b.iter(|| compress(black_box(data), 8).unwrap());
            });
        }
    }
    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompress");
    for (name, generator) in [
        ("uniform", uniform as fn(usize) -> Vec<u8>),
        ("noise", noise),
        ("banded", banded),
    ] {
        for size in [4096usize, 65536] {
            let data = generator(size);
            let packed = compress(&data, 8).unwrap();
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::new(name, size), &packed, |b, packed| {
                b.iter(|| decompress(black_box(packed), 8).unwrap());
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_compress, bench_decompress);
criterion_main!(benches);
