use crate::domain::{codec, Card, CardKind};
use crate::view::discard::OptimisticDiscard;

fn card(id: u32) -> Card {
    Card::new(id, CardKind::Action, codec::encode(3, 0, false))
}

#[test]
fn cancel_restores_the_exact_prior_top() {
    let mut tracker = OptimisticDiscard::default();
    let mut top = Some(card(1));
    tracker.show(&mut top, card(2));
    assert_eq!(top, Some(card(2)));

    tracker.cancel(&mut top, 2);
    assert_eq!(top, Some(card(1)));
    assert!(!tracker.is_pending());
}

#[test]
fn confirm_makes_the_shown_card_permanent() {
    let mut tracker = OptimisticDiscard::default();
    let mut top = Some(card(1));
    tracker.show(&mut top, card(2));

    assert!(tracker.confirm(2));
    assert_eq!(top, Some(card(2)));
    assert!(!tracker.is_pending());

    // A late cancel for the same id no longer reverts anything.
    tracker.cancel(&mut top, 2);
    assert_eq!(top, Some(card(2)));
}

#[test]
fn both_observers_of_one_play_share_one_pending_record() {
    let mut tracker = OptimisticDiscard::default();
    let mut top = Some(card(1));
    // Local optimistic render, then the broadcast of the same play.
    tracker.show(&mut top, card(2));
    tracker.show(&mut top, card(2));

    tracker.cancel(&mut top, 2);
    // Rollback target is the original card, not the optimistic one.
    assert_eq!(top, Some(card(1)));
}

#[test]
fn second_play_supersedes_the_first_rollback_target() {
    let mut tracker = OptimisticDiscard::default();
    let mut top = Some(card(1));
    tracker.show(&mut top, card(2));
    tracker.show(&mut top, card(3));

    // Cancelling the superseded play does nothing.
    tracker.cancel(&mut top, 2);
    assert_eq!(top, Some(card(3)));

    // Cancelling the live play restores what it saw when shown.
    tracker.cancel(&mut top, 3);
    assert_eq!(top, Some(card(2)));
}

#[test]
fn confirm_of_a_non_pending_card_reports_false() {
    let mut tracker = OptimisticDiscard::default();
    assert!(!tracker.confirm(9));

    let mut top = None;
    tracker.show(&mut top, card(2));
    assert!(!tracker.confirm(9));
    assert!(tracker.is_pending());
}

#[test]
fn reset_clears_pending_without_touching_display() {
    let mut tracker = OptimisticDiscard::default();
    let mut top = Some(card(1));
    tracker.show(&mut top, card(2));
    tracker.reset();
    assert!(!tracker.is_pending());
    assert_eq!(top, Some(card(2)));
}
