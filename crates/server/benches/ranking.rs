//! Benchmarks for similarity ranking
//!
//! Run with: cargo bench --package server
//!
//! Ranks one row of a synthetic catalog the size of a typical TMDB 5000 export.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use server::ranking::{rank_similar, top_similar};

const CATALOG_SIZE: usize = 4806;

fn synthetic_row() -> Vec<f32> {
    (0..CATALOG_SIZE)
        .map(|i| ((i * 7919) % 1000) as f32 / 1000.0)
        .collect()
}

fn bench_rank_full_row(c: &mut Criterion) {
    let row = synthetic_row();

    c.bench_function("rank_similar_full_row", |b| {
        b.iter(|| {
            let ranked = rank_similar(black_box(&row), black_box(42));
            black_box(ranked)
        })
    });
}

fn bench_top_five(c: &mut Criterion) {
    let row = synthetic_row();

    c.bench_function("top_similar_5", |b| {
        b.iter(|| {
            let top = top_similar(black_box(&row), black_box(42), black_box(5));
            black_box(top)
        })
    });
}

criterion_group!(benches, bench_rank_full_row, bench_top_five);
criterion_main!(benches);
