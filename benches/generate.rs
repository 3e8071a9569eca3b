//! Criterion benchmarks for maze generation.
//!
//! Run with:
//!   cargo bench
//!
//! Results are saved to target/criterion/

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use mazegen::maze::{Generator, MazeConfig};

fn make_config(size: u32, seed: u64) -> MazeConfig {
    MazeConfig {
        seed: Some(seed),
        ..MazeConfig::new(size)
    }
}

/// Benchmark full generation (carve + branch fill) at varying grid sizes.
fn bench_generate_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_size");

    for size in [9u32, 15, 25, 41].iter() {
        group.throughput(Throughput::Elements((*size as u64) * (*size as u64)));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let mut gen = Generator::new(make_config(size, 42)).unwrap();
            b.iter(|| black_box(gen.generate().unwrap()));
        });
    }

    group.finish();
}

/// Benchmark the carve phase alone (fill_threshold = 0 skips branches).
fn bench_carve_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("carve_only");

    for size in [15u32, 25].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let cfg = MazeConfig {
                fill_threshold: 0.0,
                ..make_config(size, 42)
            };
            let mut gen = Generator::new(cfg).unwrap();
            b.iter(|| black_box(gen.generate().unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate_sizes, bench_carve_only);
criterion_main!(benches);
