//! Strategy and analysis benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_nim::analysis::grundy_value;
use rust_nim::core::{GameRng, HeapState};
use rust_nim::strategy::{Expert, Novice, Strategy};

fn bench_strategies(c: &mut Criterion) {
    let winning = HeapState::from_heaps(&[7, 5, 6, 3, 4]);
    let losing = HeapState::from_heaps(&[1, 2, 3, 4, 4]);
    let mut rng = GameRng::new(42);

    c.bench_function("expert_winning", |b| {
        b.iter(|| Expert.choose_move(black_box(&winning), &mut rng))
    });
    c.bench_function("expert_fallback", |b| {
        b.iter(|| Expert.choose_move(black_box(&losing), &mut rng))
    });
    c.bench_function("novice", |b| {
        b.iter(|| Novice.choose_move(black_box(&winning), &mut rng))
    });
}

fn bench_grundy(c: &mut Criterion) {
    let state = HeapState::from_heaps(&[5, 6, 7]);
    c.bench_function("grundy_value_5_6_7", |b| b.iter(|| grundy_value(black_box(&state))));
}

criterion_group!(benches, bench_strategies, bench_grundy);
criterion_main!(benches);
