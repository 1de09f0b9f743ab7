use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use card_round::{
    CardPool, HandComposer, Round, RoundConfig, SelectionReason,
    cards::Attribute,
};
use rand::{SeedableRng, rngs::StdRng};
use std::{hint::black_box, time::Duration};

/// Catalogue with `per_attribute` cards of each attribute, ranks cycling 1..=10
fn catalogue(per_attribute: usize) -> CardPool {
    let names: Vec<String> = Attribute::ALL
        .iter()
        .flat_map(|a| (0..per_attribute).map(move |i| format!("{a}_{i}_{}", i % 10 + 1)))
        .collect();
    CardPool::build(names).unwrap()
}

/// Benchmark composing one hand from catalogues of growing size
fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose_hand");
    for size in [10, 100, 1_000] {
        let pool = catalogue(size);
        let composer = HandComposer::new();
        let mut rng = StdRng::seed_from_u64(1);
        group.bench_with_input(BenchmarkId::from_parameter(size * 3), &pool, |b, pool| {
            b.iter(|| composer.compose_with(black_box(pool), &mut rng).unwrap());
        });
    }
    group.finish();
}

/// Benchmark a full idle round: deal, then tick to auto-selection
fn bench_idle_round(c: &mut Criterion) {
    let pool = catalogue(10);
    c.bench_function("idle_round_to_auto_select", |b| {
        b.iter_batched(
            || Round::with_seed(RoundConfig::default(), pool.clone(), 7),
            |mut round| {
                round.deal().unwrap();
                for _ in 0..300 {
                    black_box(round.tick(Duration::from_millis(100), false));
                }
                round
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

/// Benchmark deal plus manual pick
fn bench_deal_and_pick(c: &mut Criterion) {
    let pool = catalogue(10);
    c.bench_function("deal_and_pick", |b| {
        b.iter_batched(
            || Round::with_seed(RoundConfig::default(), pool.clone(), 7),
            |mut round| {
                round.deal().unwrap();
                round.select(2, SelectionReason::Manual).unwrap()
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(composition, bench_compose);
criterion_group!(round_flow, bench_idle_round, bench_deal_and_pick);

criterion_main!(composition, round_flow);
