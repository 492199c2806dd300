use serde_json::json;

use crate::domain::codec::encode;
use crate::domain::{Card, CardKind};

#[test]
fn kind_wire_roundtrip() {
    for kind in [
        CardKind::Potato,
        CardKind::Wildcard,
        CardKind::Action,
        CardKind::GoldenPotato,
    ] {
        assert_eq!(CardKind::from_wire(kind.as_wire()).unwrap(), kind);
    }
    assert!(CardKind::from_wire("tomato").is_err());
}

#[test]
fn card_deserializes_from_wire_object() {
    let card: Card =
        serde_json::from_value(json!({ "id": 17, "type": "potato", "type_arg": 20300 })).unwrap();
    assert_eq!(card.id, 17);
    assert_eq!(card.kind, CardKind::Potato);
    assert_eq!(card.decoded().name_index, 2);
    assert_eq!(card.decoded().value, 3);
    assert!(!card.decoded().is_alarm);
}

#[test]
fn interrupt_is_action_name_one_or_two() {
    let interrupt_a = Card::new(1, CardKind::Action, encode(1, 0, false));
    let interrupt_b = Card::new(2, CardKind::Action, encode(2, 0, false));
    let raid = Card::new(3, CardKind::Action, encode(3, 0, false));
    let potato = Card::new(4, CardKind::Potato, encode(1, 1, false));
    assert!(interrupt_a.is_interrupt());
    assert!(interrupt_b.is_interrupt());
    assert!(!raid.is_interrupt());
    // Same name index, but not an action card.
    assert!(!potato.is_interrupt());
}

#[test]
fn alarm_flag_requires_action_kind() {
    let alarm = Card::new(1, CardKind::Action, encode(7, 0, true));
    let flagged_potato = Card::new(2, CardKind::Potato, encode(1, 1, true));
    assert!(alarm.is_alarm());
    assert!(!flagged_potato.is_alarm());
}
