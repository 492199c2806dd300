use serde_json::json;

use crate::errors::EngineError;
use crate::phases::buttons::ButtonKind;
use crate::phases::machine::{GamePhase, PhaseMachine};
use crate::test_support::{potato, RecordingSink};
use crate::view::model::ViewModel;

fn active_view() -> ViewModel {
    let mut view = ViewModel::new(1);
    view.local_active = true;
    view.hand = vec![potato(10, 1), potato(11, 1)];
    view
}

#[test]
fn phase_names_parse_to_the_closed_enum() {
    assert_eq!(GamePhase::from_server("playerTurn"), Some(GamePhase::PlayerTurn));
    assert_eq!(GamePhase::from_server("reaction"), Some(GamePhase::Reaction));
    assert_eq!(GamePhase::from_server("targetSelect"), Some(GamePhase::TargetSelect));
    assert_eq!(GamePhase::from_server("discardSelect"), Some(GamePhase::DiscardSelect));
    assert_eq!(GamePhase::from_server("cardChoice"), Some(GamePhase::CardChoice));
    assert_eq!(GamePhase::from_server("cardNameChoice"), Some(GamePhase::CardNameChoice));
    assert_eq!(GamePhase::from_server("resolution"), Some(GamePhase::Resolution));
    assert_eq!(GamePhase::from_server("lobby"), None);
}

#[test]
fn unknown_phase_leaves_no_handler_active() {
    let view = active_view();
    let mut machine = PhaseMachine::default();
    machine.set_phase(&view, "somethingNew", &json!({}));
    assert_eq!(machine.current_phase(), None);
    assert!(machine.action_bar().is_empty());
}

#[test]
fn entering_a_phase_clears_the_previous_selection() {
    let view = active_view();
    let mut machine = PhaseMachine::default();
    let mut sink = RecordingSink::default();

    machine.set_phase(&view, "playerTurn", &json!({}));
    machine.toggle_card(&view, 10, &mut sink);
    assert_eq!(machine.selected_cards(), &[10]);

    machine.set_phase(&view, "discardSelect", &json!({ "cardsToDiscard": 1 }));
    assert!(machine.selected_cards().is_empty());
}

#[test]
fn update_actions_reparses_args_without_losing_selection() {
    let view = active_view();
    let mut machine = PhaseMachine::default();
    let mut sink = RecordingSink::default();

    machine.set_phase(&view, "playerTurn", &json!({}));
    machine.toggle_card(&view, 10, &mut sink);
    assert!(machine.action_bar().find(ButtonKind::DiscardAndDraw).is_none());

    machine.update_actions(&view, &json!({ "canDiscardAndDraw": true }));
    assert!(machine.action_bar().find(ButtonKind::DiscardAndDraw).is_some());
    assert_eq!(machine.selected_cards(), &[10]);
}

#[test]
fn press_without_an_active_phase_is_rejected() {
    let view = active_view();
    let mut machine = PhaseMachine::default();
    let mut sink = RecordingSink::default();
    assert_eq!(
        machine.press(&view, ButtonKind::EndTurn, &mut sink),
        Err(EngineError::NoActivePhase)
    );
}

#[test]
fn press_of_a_button_from_another_phase_is_rejected() {
    let view = active_view();
    let mut machine = PhaseMachine::default();
    let mut sink = RecordingSink::default();
    machine.set_phase(&view, "resolution", &json!({}));
    assert_eq!(
        machine.press(&view, ButtonKind::EndTurn, &mut sink),
        Err(EngineError::PhaseMismatch)
    );
}

#[test]
fn press_while_ineligible_is_rejected() {
    let mut view = active_view();
    let mut machine = PhaseMachine::default();
    let mut sink = RecordingSink::default();
    machine.set_phase(&view, "playerTurn", &json!({}));
    view.local_active = false;
    assert_eq!(
        machine.press(&view, ButtonKind::EndTurn, &mut sink),
        Err(EngineError::NotEligible)
    );
    assert!(sink.sent.is_empty());
}
