//! Performance benchmarks for bytekit
//!
//! Run with: cargo bench

use bytekit::config::HashWidth;
use bytekit::hash::{fnv1a_32, fnv1a_64, hash_file};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::fs::File;
use std::io::Write;
use tempfile::TempDir;

/// Create a test file of the specified size
fn create_test_file(dir: &std::path::Path, name: &str, size: usize) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut file = File::create(&path).unwrap();

    let chunk_size = 64 * 1024;
    let chunk: Vec<u8> = (0..chunk_size).map(|i| (i % 256) as u8).collect();
    let mut remaining = size;

    while remaining > 0 {
        let to_write = remaining.min(chunk_size);
        file.write_all(&chunk[..to_write]).unwrap();
        remaining -= to_write;
    }

    path
}

fn bench_hash_memory(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash_memory");

    for size in [1024, 64 * 1024, 1024 * 1024].iter() {
        let data: Vec<u8> = (0..*size).map(|i| (i % 256) as u8).collect();
        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_with_input(BenchmarkId::new("fnv1a_32", size), &data, |b, data| {
            b.iter(|| fnv1a_32(black_box(data)));
        });

        group.bench_with_input(BenchmarkId::new("fnv1a_64", size), &data, |b, data| {
            b.iter(|| fnv1a_64(black_box(data)));
        });
    }

    group.finish();
}

fn bench_hash_file(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();
    let size = 10 * 1024 * 1024;
    let path = create_test_file(dir.path(), "bench.bin", size);

    let mut group = c.benchmark_group("hash_file");
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_function("fnv1a_64_10mb", |b| {
        b.iter(|| hash_file(black_box(&path), HashWidth::Fnv64).unwrap());
    });

    group.finish();
}

fn bench_load_file(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();
    let size = 10 * 1024 * 1024;
    let path = create_test_file(dir.path(), "load.bin", size);

    let mut group = c.benchmark_group("load_file");
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_function("load_10mb", |b| {
        b.iter(|| bytekit::fs::load(black_box(&path)).unwrap());
    });

    group.bench_function("measure_read_into_10mb", |b| {
        let mut dest = vec![0u8; size + 1];
        b.iter(|| {
            let needed = bytekit::fs::measure(black_box(&path)).unwrap();
            bytekit::fs::read_into(black_box(&path), &mut dest[..needed]).unwrap()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_hash_memory, bench_hash_file, bench_load_file);
criterion_main!(benches);
