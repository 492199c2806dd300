use engine_test_support::payloads::{card_entry, card_fields, num, numstr, payload};
use serde_json::json;

use crate::domain::CardKind;
use crate::protocol::notify::{Notification, StealEffect};

#[test]
fn numeric_text_fields_parse_like_numbers() {
    let from_num = Notification::from_wire("deck_count", &payload(&[("deckCount", num(12))]));
    let from_text = Notification::from_wire("deck_count", &payload(&[("deckCount", numstr(12))]));
    assert_eq!(from_num, Some(Notification::DeckCount { count: 12 }));
    assert_eq!(from_text, from_num);
}

#[test]
fn unknown_notification_names_are_skipped() {
    assert_eq!(Notification::from_wire("confetti", &json!({})), None);
}

#[test]
fn missing_required_field_skips_the_event() {
    // card_played without a card identity has nothing to apply.
    let p = payload(&[("player_id", num(4))]);
    assert_eq!(Notification::from_wire("card_played", &p), None);
}

#[test]
fn unparseable_optional_identity_becomes_absent() {
    let mut pairs = vec![("player_id", num(4)), ("card_id", num(31))];
    pairs.push(("card_type", json!("tomato"))); // not a kind this game has
    pairs.push(("card_type_arg", num(100)));
    let note = Notification::from_wire("card_gained", &payload(&pairs)).unwrap();
    match note {
        Notification::CardGained { card, card_id, .. } => {
            assert_eq!(card_id, 31);
            assert!(card.is_none());
        }
        other => panic!("unexpected decode: {other:?}"),
    }
}

#[test]
fn card_drawn_with_inline_identity() {
    let mut pairs = vec![("player_id", numstr(2)), ("deckCount", num(40))];
    pairs.extend(card_fields(77, "potato", 10100));
    let note = Notification::from_wire("card_drawn", &payload(&pairs)).unwrap();
    match note {
        Notification::CardDrawn {
            player_id,
            card,
            deck_count,
            ..
        } => {
            assert_eq!(player_id, 2);
            assert_eq!(deck_count, Some(40));
            let card = card.unwrap();
            assert_eq!(card.kind, CardKind::Potato);
            assert_eq!(card.decoded().name_index, 1);
        }
        other => panic!("unexpected decode: {other:?}"),
    }
}

#[test]
fn all_four_steal_shapes_decode_to_one_variant() {
    let pairs = vec![
        ("player_id", num(2)),
        ("target_player_id", num(5)),
        ("card_id", num(9)),
    ];
    let p = payload(&pairs);
    for (name, effect) in [
        ("card_raided", StealEffect::Raid),
        ("card_pickpocketed", StealEffect::Pickpocket),
        ("card_traded", StealEffect::Trade),
        ("card_gleaned", StealEffect::Gleaning),
    ] {
        match Notification::from_wire(name, &p) {
            Some(Notification::CardStolen {
                effect: got,
                player_id,
                target_player_id,
                card_id,
                card,
            }) => {
                assert_eq!(got, effect);
                assert_eq!((player_id, target_player_id, card_id), (2, 5, 9));
                assert!(card.is_none());
            }
            other => panic!("unexpected decode for {name}: {other:?}"),
        }
    }
}

#[test]
fn hand_list_drops_malformed_entries() {
    let p = payload(&[(
        "cards",
        json!([
            card_entry(1, "potato", 10100),
            { "id": 2 },                       // no identity
            card_entry(3, "wildcard", 0),
            "garbage",
        ]),
    )]);
    match Notification::from_wire("hand_replaced", &p).unwrap() {
        Notification::HandReplaced { cards } => {
            let ids: Vec<u32> = cards.iter().map(|c| c.id).collect();
            assert_eq!(ids, vec![1, 3]);
        }
        other => panic!("unexpected decode: {other:?}"),
    }
}

#[test]
fn golden_delta_accepts_negative_numbers() {
    let p = payload(&[("player_id", num(3)), ("delta", num(-2))]);
    assert_eq!(
        Notification::from_wire("golden_potatoes", &p),
        Some(Notification::GoldenDelta {
            player_id: 3,
            delta: -2
        })
    );
}
