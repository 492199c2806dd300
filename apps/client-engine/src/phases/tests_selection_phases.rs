use serde_json::json;

use crate::domain::CardKind;
use crate::phases::buttons::ButtonKind;
use crate::phases::machine::PhaseMachine;
use crate::protocol::actions::ActionRequest;
use crate::test_support::{potato, RecordingSink};
use crate::view::model::ViewModel;

fn active_view() -> ViewModel {
    let mut view = ViewModel::new(1);
    view.local_active = true;
    view.hand = vec![potato(10, 1), potato(11, 2), potato(12, 3)];
    view
}

// ---- target selection ----

#[test]
fn single_target_auto_submits_at_the_cap() {
    let view = active_view();
    let mut machine = PhaseMachine::default();
    let mut sink = RecordingSink::default();
    machine.set_phase(
        &view,
        "targetSelect",
        &json!({ "selectablePlayers": [2, 3, 4], "targetCount": 1 }),
    );

    machine.toggle_seat(&view, 3, &mut sink);
    assert_eq!(
        sink.sent,
        vec![ActionRequest::ChooseTargets { player_ids: vec![3] }]
    );
}

#[test]
fn multi_target_requires_explicit_confirm() {
    let view = active_view();
    let mut machine = PhaseMachine::default();
    let mut sink = RecordingSink::default();
    machine.set_phase(
        &view,
        "targetSelect",
        &json!({
            "selectablePlayers": [2, 3, 4],
            "targetCount": 2,
            "requiresMultipleTargets": true
        }),
    );

    machine.toggle_seat(&view, 2, &mut sink);
    assert!(sink.sent.is_empty());
    assert!(machine.action_bar().find(ButtonKind::ConfirmTargets).is_none());

    machine.toggle_seat(&view, 4, &mut sink);
    assert!(sink.sent.is_empty());
    // The confirm button appears only at the threshold.
    assert!(machine.action_bar().find(ButtonKind::ConfirmTargets).is_some());

    machine.press(&view, ButtonKind::ConfirmTargets, &mut sink).unwrap();
    assert_eq!(
        sink.sent,
        vec![ActionRequest::ChooseTargets {
            player_ids: vec![2, 4]
        }]
    );
}

#[test]
fn toggling_off_removes_from_the_ordered_selection() {
    let view = active_view();
    let mut machine = PhaseMachine::default();
    let mut sink = RecordingSink::default();
    machine.set_phase(
        &view,
        "targetSelect",
        &json!({
            "selectablePlayers": [2, 3, 4],
            "targetCount": 2,
            "requiresMultipleTargets": true
        }),
    );

    machine.toggle_seat(&view, 2, &mut sink);
    machine.toggle_seat(&view, 3, &mut sink);
    machine.toggle_seat(&view, 2, &mut sink);
    assert_eq!(machine.selected_seats(), &[3]);
}

#[test]
fn selection_is_capped_and_limited_to_selectable_seats() {
    let view = active_view();
    let mut machine = PhaseMachine::default();
    let mut sink = RecordingSink::default();
    machine.set_phase(
        &view,
        "targetSelect",
        &json!({
            "selectablePlayers": [2, 3],
            "targetCount": 1,
            "requiresMultipleTargets": true
        }),
    );

    machine.toggle_seat(&view, 9, &mut sink); // not selectable
    machine.toggle_seat(&view, 2, &mut sink);
    machine.toggle_seat(&view, 3, &mut sink); // over the cap
    assert_eq!(machine.selected_seats(), &[2]);
}

// ---- forced discard ----

#[test]
fn confirm_discard_enables_exactly_at_the_required_count() {
    let view = active_view();
    let mut machine = PhaseMachine::default();
    let mut sink = RecordingSink::default();
    machine.set_phase(&view, "discardSelect", &json!({ "cardsToDiscard": 2 }));

    let disabled = machine.action_bar().find(ButtonKind::ConfirmDiscard).unwrap();
    assert!(!disabled.enabled);

    machine.toggle_card(&view, 10, &mut sink);
    machine.toggle_card(&view, 11, &mut sink);
    let enabled = machine.action_bar().find(ButtonKind::ConfirmDiscard).unwrap();
    assert!(enabled.enabled);

    machine.toggle_card(&view, 12, &mut sink);
    let over = machine.action_bar().find(ButtonKind::ConfirmDiscard).unwrap();
    assert!(!over.enabled);
}

#[test]
fn confirm_discard_submits_the_selected_ids() {
    let view = active_view();
    let mut machine = PhaseMachine::default();
    let mut sink = RecordingSink::default();
    machine.set_phase(&view, "discardSelect", &json!({ "cardsToDiscard": 2 }));

    machine.toggle_card(&view, 12, &mut sink);
    machine.toggle_card(&view, 10, &mut sink);
    machine.press(&view, ButtonKind::ConfirmDiscard, &mut sink).unwrap();

    assert_eq!(
        sink.sent,
        vec![ActionRequest::DiscardCards {
            card_ids: vec![12, 10]
        }]
    );
    assert!(machine.selected_cards().is_empty());
}

// ---- card choice ----

#[test]
fn choosing_a_bound_token_sends_once() {
    let view = active_view();
    let mut machine = PhaseMachine::default();
    let mut sink = RecordingSink::default();
    machine.set_phase(
        &view,
        "cardChoice",
        &json!({
            "revealedCards": [
                { "selectToken": "tk-a", "id": 31, "type": "potato", "type_arg": 10100 }
            ],
            "cardBacks": [ { "selectToken": "tk-b" } ]
        }),
    );

    machine.choose_token(&view, "tk-b", &mut sink).unwrap();
    // A second choice is swallowed; the server is already moving on.
    machine.choose_token(&view, "tk-a", &mut sink).unwrap();

    assert_eq!(
        sink.sent,
        vec![ActionRequest::PickToken {
            token: "tk-b".to_string()
        }]
    );
}

#[test]
fn unbound_tokens_are_dropped_silently() {
    let view = active_view();
    let mut machine = PhaseMachine::default();
    let mut sink = RecordingSink::default();
    machine.set_phase(
        &view,
        "cardChoice",
        &json!({ "cardBacks": [ { "selectToken": "tk-b" } ] }),
    );

    machine.choose_token(&view, "tk-stale", &mut sink).unwrap();
    assert!(sink.sent.is_empty());
}

#[test]
fn hand_size_binds_positional_choices() {
    let view = active_view();
    let mut machine = PhaseMachine::default();
    let mut sink = RecordingSink::default();
    machine.set_phase(&view, "cardChoice", &json!({ "handSize": 3 }));

    machine.choose_position(&view, 5, &mut sink).unwrap(); // out of range
    assert!(sink.sent.is_empty());
    machine.choose_position(&view, 2, &mut sink).unwrap();
    assert_eq!(sink.sent, vec![ActionRequest::PickPosition { position: 2 }]);
}

// ---- card naming ----

#[test]
fn confirm_name_needs_both_kind_and_name() {
    let view = active_view();
    let mut machine = PhaseMachine::default();
    let mut sink = RecordingSink::default();
    machine.set_phase(
        &view,
        "cardNameChoice",
        &json!({ "cardNames": { "potato": [1, 2, 3], "action": [3, 4] } }),
    );

    let button = machine.action_bar().find(ButtonKind::ConfirmName).unwrap();
    assert!(!button.enabled);
    assert!(machine.press(&view, ButtonKind::ConfirmName, &mut sink).is_err());

    machine.choose_name(&view, CardKind::Potato, 2);
    let button = machine.action_bar().find(ButtonKind::ConfirmName).unwrap();
    assert!(button.enabled);

    machine.press(&view, ButtonKind::ConfirmName, &mut sink).unwrap();
    assert_eq!(
        sink.sent,
        vec![ActionRequest::NameCard {
            kind: CardKind::Potato,
            name_index: 2
        }]
    );
}

#[test]
fn names_outside_the_catalog_are_ignored() {
    let view = active_view();
    let mut machine = PhaseMachine::default();
    machine.set_phase(
        &view,
        "cardNameChoice",
        &json!({ "cardNames": { "potato": [1, 2] } }),
    );

    machine.choose_name(&view, CardKind::Potato, 9);
    machine.choose_name(&view, CardKind::Action, 1);
    let button = machine.action_bar().find(ButtonKind::ConfirmName).unwrap();
    assert!(!button.enabled);
}
