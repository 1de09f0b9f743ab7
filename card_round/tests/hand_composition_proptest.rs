/// Property-based tests for hand composition using proptest
///
/// These tests verify positional eligibility and pool handling across
/// randomly generated card catalogues.
use card_round::cards::{
    Attribute, Card, CardError, CardPool, HAND_SIZE, HandComposer, POSITION_ELIGIBILITY,
};
use proptest::prelude::*;
use rand::{SeedableRng, rngs::StdRng};

// Strategy to generate an asset name; "Card" prefixed names fall back to Fire
fn name_strategy() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["Fire", "Water", "Grass", "Card"]),
        0u32..=12,
    )
        .prop_map(|(prefix, rank)| format!("{prefix}{rank}"))
}

fn catalogue_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(name_strategy(), 1..40)
}

proptest! {
    #[test]
    fn test_every_slot_respects_eligibility(names in catalogue_strategy(), seed in any::<u64>()) {
        let pool = CardPool::build(&names).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);

        match HandComposer::new().compose_with(&pool, &mut rng) {
            Ok(hand) => {
                prop_assert_eq!(hand.live_count(), HAND_SIZE);
                for (position, card) in hand.cards().enumerate() {
                    prop_assert!(
                        POSITION_ELIGIBILITY[position].contains(&card.attribute()),
                        "{} is not allowed at position {}", card, position
                    );
                    prop_assert!(pool.contains(card.name()));
                }
            }
            Err(CardError::NoEligibleCard { position }) => {
                prop_assert!(pool.eligible(POSITION_ELIGIBILITY[position]).is_empty());
            }
            Err(e) => prop_assert!(false, "unexpected error: {}", e),
        }
    }

    #[test]
    fn test_compose_succeeds_with_all_attributes(names in catalogue_strategy(), seed in any::<u64>()) {
        let mut names = names;
        names.extend(["Fire1", "Water1", "Grass1"].map(String::from));
        let pool = CardPool::build(&names).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);

        prop_assert!(HandComposer::new().compose_with(&pool, &mut rng).is_ok());
    }

    #[test]
    fn test_pool_has_no_duplicates(names in catalogue_strategy()) {
        let pool = CardPool::build(&names).unwrap();
        let mut seen: Vec<&str> = pool.iter().map(Card::name).collect();
        let total = seen.len();
        seen.sort_unstable();
        seen.dedup();
        prop_assert_eq!(seen.len(), total);

        let counted: usize = Attribute::ALL.iter().map(|a| pool.count(*a)).sum();
        prop_assert_eq!(counted, pool.len());
    }

    #[test]
    fn test_classification_is_keyword_driven(rank in 0u32..100) {
        prop_assert_eq!(Card::from_name(&format!("Water{rank}")).attribute(), Attribute::Water);
        prop_assert_eq!(Card::from_name(&format!("Grass{rank}")).attribute(), Attribute::Grass);
        prop_assert_eq!(Card::from_name(&format!("Fire{rank}")).attribute(), Attribute::Fire);
        prop_assert_eq!(Card::from_name(&format!("Stone{rank}")).attribute(), Attribute::Fire);
    }
}
