//! Statistical checks on rank-weighted composition.
//!
//! With a catalogue holding ranks 1..=10 once per attribute, each position
//! draws rank r with probability weight(r) / 380.

use card_round::cards::{Attribute, CardPool, HandComposer, rank_weight};
use rand::{SeedableRng, rngs::StdRng};

const DRAWS: usize = 20_000;
const TOLERANCE: f64 = 0.02;

fn uniform_pool() -> CardPool {
    let names: Vec<String> = Attribute::ALL
        .iter()
        .flat_map(|a| (1..=10).map(move |r| format!("{a}{r}")))
        .collect();
    CardPool::build(names).unwrap()
}

/// Per-position rank counts over `DRAWS` hands
fn sample_ranks(seed: u64) -> Vec<[usize; 11]> {
    let pool = uniform_pool();
    let composer = HandComposer::new();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut counts = vec![[0usize; 11]; 5];

    for _ in 0..DRAWS {
        let hand = composer.compose_with(&pool, &mut rng).unwrap();
        for (position, card) in hand.cards().enumerate() {
            counts[position][card.rank() as usize] += 1;
        }
    }

    counts
}

#[test]
fn test_total_weight_for_uniform_ranks() {
    let total: u32 = (1..=10).map(rank_weight).sum();
    assert_eq!(total, 380);
}

#[test]
fn test_low_ranks_dominate_every_position() {
    let expected = 300.0 / 380.0;
    for (position, counts) in sample_ranks(2024).iter().enumerate() {
        let low: usize = counts[1..=6].iter().sum();
        let observed = low as f64 / DRAWS as f64;
        assert!(
            (observed - expected).abs() < TOLERANCE,
            "position {position}: P(rank 1-6) = {observed:.4}, expected {expected:.4}"
        );
    }
}

#[test]
fn test_each_rank_matches_its_weight() {
    let counts = sample_ranks(7);
    // Position 0 draws only Fire, so every rank appears exactly once.
    for rank in 1..=10u32 {
        let expected = f64::from(rank_weight(rank)) / 380.0;
        let observed = counts[0][rank as usize] as f64 / DRAWS as f64;
        assert!(
            (observed - expected).abs() < TOLERANCE,
            "rank {rank}: {observed:.4} vs {expected:.4}"
        );
    }
}

#[test]
fn test_rank_ten_is_rare() {
    let counts = sample_ranks(99);
    let tens: usize = counts.iter().map(|c| c[10]).sum();
    let ones: usize = counts.iter().map(|c| c[1]).sum();
    // Weight 50 vs 5: expect roughly ten rank-1 cards per rank-10 card.
    assert!(ones > tens * 7, "ones {ones}, tens {tens}");
}
