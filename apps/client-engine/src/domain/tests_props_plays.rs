/// Property-based tests for selection-to-play validation
use proptest::prelude::*;

use crate::domain::plays::{evaluate_selection, PlayDescriptor};
use crate::domain::{test_gens, test_prelude, CardId};

fn class_of(play: &Option<PlayDescriptor>) -> &'static str {
    match play {
        None => "none",
        Some(PlayDescriptor::Single { .. }) => "single",
        Some(PlayDescriptor::ThreesomePotato { .. }) => "potato_trio",
        Some(PlayDescriptor::ThreesomeValue { .. }) => "value_trio",
    }
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: selections resolving to 0, 2, or 4+ cards never play.
    #[test]
    fn prop_only_one_or_three_resolved_cards_play(
        hand in test_gens::hand(8),
        picks in prop::collection::vec(1u32..12, 0..6),
    ) {
        let mut unique = picks.clone();
        unique.sort_unstable();
        unique.dedup();
        let resolved = unique.iter()
            .filter(|id| hand.iter().any(|c| c.id == **id))
            .count();
        if !matches!(resolved, 1 | 3) {
            prop_assert_eq!(evaluate_selection(&hand, &picks), None);
        }
    }

    /// Property: the play classification is invariant under selection order.
    #[test]
    fn prop_classification_ignores_selection_order(hand in test_gens::hand(3)) {
        let ids: Vec<CardId> = hand.iter().map(|c| c.id).collect();
        if ids.len() == 3 {
            let forward = evaluate_selection(&hand, &ids);
            let reversed: Vec<CardId> = ids.iter().rev().copied().collect();
            let backward = evaluate_selection(&hand, &reversed);
            prop_assert_eq!(class_of(&forward), class_of(&backward));
        }
    }

    /// Property: appending ids that are not in the hand never changes the
    /// outcome; stale selections are dropped, not penalized.
    #[test]
    fn prop_stale_ids_do_not_change_outcome(
        hand in test_gens::hand(6),
        picks in prop::collection::vec(1u32..7, 0..4),
    ) {
        let baseline = evaluate_selection(&hand, &picks);
        let mut padded = picks.clone();
        padded.extend([4_001, 4_002]); // never present in generated hands
        prop_assert_eq!(evaluate_selection(&hand, &padded), baseline);
    }
}
