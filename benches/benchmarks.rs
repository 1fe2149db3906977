//! Performance benchmarks for eta.
//!
//! Run with: cargo bench
//!
//! Measures the per-item overhead of the adapter: snapshot computation with
//! printing disabled, and snapshot computation plus a sink write.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::io;

use eta::Eta;

fn bench_advance(c: &mut Criterion) {
    c.bench_function("advance_10k_items_silent", |b| {
        b.iter(|| {
            let progress = Eta::new(0..10_000usize).unwrap().auto_print(false);
            let mut acc = 0usize;
            for (item, stats) in progress {
                acc += item;
                black_box(stats);
            }
            black_box(acc)
        })
    });

    c.bench_function("advance_1k_items_sink_write", |b| {
        b.iter(|| {
            let progress = Eta::new(0..1_000usize).unwrap().sink(io::sink());
            for pair in progress {
                black_box(pair);
            }
        })
    });
}

criterion_group!(benches, bench_advance);
criterion_main!(benches);
