// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::codec::encode;
use crate::domain::{Card, CardKind};

pub fn kind() -> impl Strategy<Value = CardKind> {
    prop_oneof![
        Just(CardKind::Potato),
        Just(CardKind::Wildcard),
        Just(CardKind::Action),
        Just(CardKind::GoldenPotato),
    ]
}

/// A card with an arbitrary but well-formed packed identity.
pub fn card() -> impl Strategy<Value = Card> {
    (1u32..100_000, kind(), 0u32..100, 0u32..=3, any::<bool>()).prop_map(
        |(id, kind, name_index, value, is_alarm)| Card {
            id,
            kind,
            type_arg: encode(name_index, value, is_alarm),
        },
    )
}

/// A hand of distinct-id cards.
pub fn hand(max_len: usize) -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(card(), 0..=max_len).prop_map(|mut cards| {
        // Re-stamp ids so the hand never contains duplicates.
        for (i, c) in cards.iter_mut().enumerate() {
            c.id = (i as u32) + 1;
        }
        cards
    })
}
