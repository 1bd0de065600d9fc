//! Generator integration tests.
//!
//! These exercise the dealer over the standard table: constructed
//! solvability, the zero-target invariant, determinism, and hand
//! composition.

use polarity::{Archetype, Card, CardIdAllocator, Deal, GameRng, LevelTable};

/// Exhaustive subset-sum check; standard hands are at most 9 cards.
fn solvable(hand: &[Card], target: i32) -> bool {
    let n = hand.len();
    (1u32..1 << n).any(|mask| {
        (0..n)
            .filter(|i| mask & (1 << i) != 0)
            .map(|i| hand[i].value())
            .sum::<i32>()
            == target
    })
}

#[test]
fn test_every_level_and_seed_deals_a_solvable_hand() {
    let table = LevelTable::standard();

    for level in 1..=table.max_level() {
        for seed in 0..50 {
            let mut rng = GameRng::new(seed);
            let mut ids = CardIdAllocator::new();
            let deal = Deal::generate(table.spec_for(level), &mut rng, &mut ids);

            assert!(
                solvable(&deal.hand, deal.target),
                "level {level} seed {seed}: no subset of {:?} sums to {}",
                deal.hand.iter().map(|c| c.value()).collect::<Vec<_>>(),
                deal.target
            );
        }
    }
}

#[test]
fn test_zero_archetype_levels_always_target_zero() {
    let table = LevelTable::standard();

    for spec in table.iter() {
        if !spec.archetype.forces_zero_target() {
            continue;
        }
        for seed in 0..100 {
            let mut rng = GameRng::new(seed);
            let mut ids = CardIdAllocator::new();
            let deal = Deal::generate(spec, &mut rng, &mut ids);

            assert_eq!(deal.target, 0, "level {} seed {seed}", spec.level);
        }
    }
}

#[test]
fn test_non_zero_levels_keep_the_path_sum_as_target() {
    let table = LevelTable::standard();

    // Level 1 is PosOnly over [1, 2, 3] with a 2-step path: the target is
    // always the path sum, somewhere in 2..=6.
    for seed in 0..100 {
        let mut rng = GameRng::new(seed);
        let mut ids = CardIdAllocator::new();
        let deal = Deal::generate(table.spec_for(1), &mut rng, &mut ids);

        assert!((2..=6).contains(&deal.target), "seed {seed}: {}", deal.target);
    }
}

#[test]
fn test_hand_sizes_follow_path_plus_distractors() {
    let table = LevelTable::standard();

    for spec in table.iter() {
        for seed in 0..30 {
            let mut rng = GameRng::new(seed);
            let mut ids = CardIdAllocator::new();
            let deal = Deal::generate(spec, &mut rng, &mut ids);

            let base = spec.path_length + spec.distractors;
            if spec.archetype.forces_zero_target() {
                // Plus at most one corrective card.
                assert!(
                    deal.hand.len() == base || deal.hand.len() == base + 1,
                    "level {} seed {seed}: {} cards",
                    spec.level,
                    deal.hand.len()
                );
            } else {
                assert_eq!(deal.hand.len(), base, "level {} seed {seed}", spec.level);
            }
        }
    }
}

#[test]
fn test_equal_seeds_deal_identical_levels() {
    let table = LevelTable::standard();

    for level in 1..=table.max_level() {
        let mut rng1 = GameRng::new(1234);
        let mut ids1 = CardIdAllocator::new();
        let deal1 = Deal::generate(table.spec_for(level), &mut rng1, &mut ids1);

        let mut rng2 = GameRng::new(1234);
        let mut ids2 = CardIdAllocator::new();
        let deal2 = Deal::generate(table.spec_for(level), &mut rng2, &mut ids2);

        assert_eq!(deal1, deal2, "level {level}");
    }
}

#[test]
fn test_out_of_range_level_deals_the_final_spec() {
    let table = LevelTable::standard();

    let mut rng1 = GameRng::new(5);
    let mut ids1 = CardIdAllocator::new();
    let past_the_end = Deal::generate(table.spec_for(42), &mut rng1, &mut ids1);

    let mut rng2 = GameRng::new(5);
    let mut ids2 = CardIdAllocator::new();
    let last = Deal::generate(table.spec_for(10), &mut rng2, &mut ids2);

    assert_eq!(past_the_end, last);
}

#[test]
fn test_distractor_values_stay_within_the_pool() {
    let table = LevelTable::standard();

    // Every card either comes from the pool or is the zero-level
    // corrective card; nothing else can appear.
    for spec in table.iter() {
        for seed in 0..30 {
            let mut rng = GameRng::new(seed);
            let mut ids = CardIdAllocator::new();
            let deal = Deal::generate(spec, &mut rng, &mut ids);

            let from_pool = deal
                .hand
                .iter()
                .filter(|c| spec.pool.contains(&c.value()))
                .count();
            let strays = deal.hand.len() - from_pool;

            if spec.archetype.forces_zero_target() {
                assert!(strays <= 1, "level {} seed {seed}", spec.level);
            } else {
                assert_eq!(strays, 0, "level {} seed {seed}", spec.level);
            }
        }
    }
}

#[test]
fn test_pos_only_archetype_yields_positive_targets() {
    let table = LevelTable::standard();

    for seed in 0..50 {
        let mut rng = GameRng::new(seed);
        let mut ids = CardIdAllocator::new();

        assert!(Deal::generate(table.spec_for(1), &mut rng, &mut ids).target > 0);
        assert!(Deal::generate(table.spec_for(2), &mut rng, &mut ids).target < 0);
    }
}

#[test]
fn test_standard_archetypes_match_the_run() {
    let table = LevelTable::standard();
    let archetypes: Vec<_> = table.iter().map(|s| s.archetype).collect();

    assert_eq!(
        archetypes,
        vec![
            Archetype::PosOnly,
            Archetype::NegOnly,
            Archetype::Zero,
            Archetype::MixedPos,
            Archetype::MixedNeg,
            Archetype::PosMid,
            Archetype::ZeroMid,
            Archetype::MixedStep3,
            Archetype::Chaos,
            Archetype::Boss,
        ]
    );
}
