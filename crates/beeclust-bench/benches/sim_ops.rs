//! Criterion micro-benchmarks for heat-field construction, tick
//! execution, and swarm analysis.

use beeclust_bench::{arena_profile, open_profile};
use beeclust_engine::TransitionEngine;
use beeclust_field::HeatField;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_heat_field(c: &mut Criterion) {
    let arena = arena_profile(64, 64, 100, 1);
    c.bench_function("heat_field_compute_64x64", |b| {
        b.iter(|| black_box(HeatField::compute(black_box(&arena))))
    });

    let open = open_profile(64, 64);
    c.bench_function("heat_field_compute_64x64_no_sources", |b| {
        b.iter(|| black_box(HeatField::compute(black_box(&open))))
    });
}

fn bench_tick(c: &mut Criterion) {
    let arena = arena_profile(64, 64, 100, 2);
    let heat = HeatField::compute(&arena);
    c.bench_function("tick_64x64_10pct_bees", |b| {
        b.iter_batched(
            || {
                (
                    arena.clone(),
                    TransitionEngine::new(ChaCha8Rng::seed_from_u64(3)),
                )
            },
            |(mut grid, mut engine)| black_box(engine.tick(&mut grid, &heat)),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_analysis(c: &mut Criterion) {
    let arena = arena_profile(64, 64, 250, 4);
    let heat = HeatField::compute(&arena);
    c.bench_function("swarms_64x64_25pct_bees", |b| {
        b.iter(|| black_box(beeclust_analysis::swarms(black_box(&arena))))
    });
    c.bench_function("score_64x64_25pct_bees", |b| {
        b.iter(|| black_box(beeclust_analysis::score(black_box(&arena), &heat)))
    });
}

criterion_group!(benches, bench_heat_field, bench_tick, bench_analysis);
criterion_main!(benches);
