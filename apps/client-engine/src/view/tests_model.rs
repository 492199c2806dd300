use crate::domain::{codec, Card, CardKind};
use crate::view::model::ViewModel;

fn potato(id: u32) -> Card {
    Card::new(id, CardKind::Potato, codec::encode(1, 1, false))
}

#[test]
fn golden_count_never_goes_negative() {
    let mut view = ViewModel::new(7);
    for delta in [3, -5, 2, -1, -10, 4] {
        view.apply_golden_delta(9, delta);
        let seat = view.seat(9).unwrap();
        assert_eq!(seat.score, seat.golden_potatoes);
    }
    assert_eq!(view.seat(9).unwrap().golden_potatoes, 4);
}

#[test]
fn golden_delta_mirrors_into_score() {
    let mut view = ViewModel::new(7);
    view.apply_golden_delta(7, 2);
    assert_eq!(view.seat(7).unwrap().score, 2);
    view.set_golden_count(7, 5);
    assert_eq!(view.seat(7).unwrap().score, 5);
}

#[test]
fn hand_count_clamps_at_zero() {
    let mut view = ViewModel::new(7);
    view.adjust_hand_count(8, -3);
    assert_eq!(view.seat(8).unwrap().hand_count, 0);
    view.adjust_hand_count(8, 2);
    view.adjust_hand_count(8, -5);
    assert_eq!(view.seat(8).unwrap().hand_count, 0);
}

#[test]
fn deck_decrement_clamps_at_zero() {
    let mut view = ViewModel::new(7);
    view.decrement_deck();
    assert_eq!(view.deck_count, 0);
    view.set_deck_count(2);
    view.decrement_deck();
    view.decrement_deck();
    view.decrement_deck();
    assert_eq!(view.deck_count, 0);
}

#[test]
fn removing_an_absent_card_is_tolerated() {
    let mut view = ViewModel::new(7);
    view.hand = vec![potato(1), potato(2)];
    assert!(view.remove_from_hand(9).is_none());
    assert_eq!(view.hand.len(), 2);
    assert_eq!(view.remove_from_hand(1).map(|c| c.id), Some(1));
}

#[test]
fn resync_matches_local_count_to_hand() {
    let mut view = ViewModel::new(7);
    view.hand = vec![potato(1), potato(2), potato(3)];
    view.set_hand_count(7, 9);
    view.resync_local_count();
    assert_eq!(view.seat(7).unwrap().hand_count, 3);
}
