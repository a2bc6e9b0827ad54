//! Wehewehe Benchmarks
//!
//! Benchmarks for the Lei Chain Table, implemented with the Criterion
//! framework.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, SamplingMode, Throughput,
};
use std::time::Duration;

use wehewehe_lib::data_structures::lei_chain_table::{polynomial_hash, LeiChainTable};

fn words(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("word{i:06}")).collect()
}

/// Benchmark the polynomial hash over growing key lengths
fn bench_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_hash");

    for len in [4, 16, 64, 256].iter() {
        let key = "k".repeat(*len);
        group.throughput(Throughput::Bytes(*len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &key, |b, key| {
            b.iter(|| polynomial_hash(black_box(key), 100));
        });
    }

    group.finish();
}

/// Benchmark loading and lookups as the load factor grows past 1
fn bench_lei_chain_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("lei_chain_table");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [100, 1_000, 10_000].iter() {
        let keys = words(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("insert", size), &keys, |b, keys| {
            b.iter(|| {
                let mut table = LeiChainTable::new(100).unwrap();
                for key in keys {
                    table.insert(key.as_str(), "definition");
                }
                table
            });
        });

        let mut table = LeiChainTable::new(100).unwrap();
        for key in &keys {
            table.insert(key.as_str(), "definition");
        }

        group.bench_with_input(BenchmarkId::new("lookup_hit", size), &keys, |b, keys| {
            b.iter(|| {
                for key in keys {
                    black_box(table.lookup(key));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("lookup_miss", size), &keys, |b, keys| {
            b.iter(|| {
                for key in keys {
                    black_box(table.lookup(&key[1..]));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_hash, bench_lei_chain_table);
criterion_main!(benches);
