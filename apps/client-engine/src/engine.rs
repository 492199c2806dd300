//! Composition root: wires reconciliation, phase dispatch, and the timer
//! behind one surface the rendering shell drives.
//!
//! Canonical state is mutated synchronously as each call arrives; the
//! presentation side only sees `UiEffect` values it drains afterwards and
//! may animate at its own pace. Reconciliation never depends on an effect
//! having been presented.

use serde_json::Value;
use tracing::debug;

use crate::domain::{CardId, CardKind};
use crate::errors::EngineError;
use crate::phases::buttons::{ActionBar, ButtonKind};
use crate::phases::machine::{GamePhase, PhaseMachine};
use crate::protocol::actions::{ActionRequest, ActionSink};
use crate::protocol::notify::Notification;
use crate::reconcile::engine::Reconciler;
use crate::timer::TimerTick;
use crate::view::model::{PlayerId, ViewModel};

/// Non-blocking presentation cue. The shell re-reads the view-model for the
/// actual data; the effect only says what is worth redrawing or animating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEffect {
    HandChanged,
    DeckChanged,
    DiscardChanged,
    SeatChanged(PlayerId),
    ActionsChanged,
    PhaseChanged(Option<GamePhase>),
    TimerTick(u32),
}

pub struct GameEngine<S: ActionSink> {
    view: ViewModel,
    machine: PhaseMachine,
    reconciler: Reconciler,
    sink: S,
    effects: Vec<UiEffect>,
}

impl<S: ActionSink> GameEngine<S> {
    pub fn new(local_seat: PlayerId, sink: S) -> Self {
        Self {
            view: ViewModel::new(local_seat),
            machine: PhaseMachine::default(),
            reconciler: Reconciler::default(),
            sink,
            effects: Vec::new(),
        }
    }

    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    pub fn action_bar(&self) -> &ActionBar {
        self.machine.action_bar()
    }

    pub fn current_phase(&self) -> Option<GamePhase> {
        self.machine.current_phase()
    }

    pub fn highlight_interrupts(&self) -> bool {
        self.machine.highlight_interrupts()
    }

    pub fn timer_remaining(&self) -> Option<u32> {
        self.machine.timer_remaining()
    }

    pub fn selected_cards(&self) -> &[CardId] {
        self.machine.selected_cards()
    }

    /// Take the presentation cues accumulated since the last drain.
    pub fn drain_effects(&mut self) -> Vec<UiEffect> {
        std::mem::take(&mut self.effects)
    }

    /// One inbound notification, in server-emission order. Unknown names
    /// and unusable payloads are skipped.
    pub fn handle_notification(&mut self, name: &str, payload: &Value) {
        let Some(note) = Notification::from_wire(name, payload) else {
            return;
        };
        debug!(notification = name, "applying notification");
        self.push_effects_for(&note);
        let applied = self.reconciler.apply(&mut self.view, &note);
        if applied.local_eligibility_lost {
            self.view.local_active = false;
            self.machine.local_eligibility_lost(&self.view);
            self.effects.push(UiEffect::ActionsChanged);
        } else if applied.refresh_actions {
            self.machine.refresh(&self.view);
            self.effects.push(UiEffect::ActionsChanged);
        }
    }

    /// Authoritative phase change from the server.
    pub fn set_current_phase(&mut self, name: &str, args: &Value) {
        self.machine.set_phase(&self.view, name, args);
        self.effects
            .push(UiEffect::PhaseChanged(self.machine.current_phase()));
        self.effects.push(UiEffect::ActionsChanged);
    }

    /// Server-side action recompute without a phase change.
    pub fn update_action_buttons(&mut self, args: &Value) {
        self.machine.update_actions(&self.view, args);
        self.effects.push(UiEffect::ActionsChanged);
    }

    /// The server (de)listed the local seat as able to act.
    pub fn set_local_active(&mut self, active: bool) {
        if self.view.local_active == active {
            return;
        }
        self.view.local_active = active;
        if active {
            self.machine.refresh(&self.view);
        } else {
            self.machine.local_eligibility_lost(&self.view);
        }
        self.effects.push(UiEffect::ActionsChanged);
    }

    /// A card in the hand was tapped.
    pub fn toggle_card(&mut self, card_id: CardId) {
        self.machine.toggle_card(&self.view, card_id, &mut self.sink);
        self.effects.push(UiEffect::ActionsChanged);
    }

    /// A seat toggle in the target-selection phase.
    pub fn toggle_seat(&mut self, player: PlayerId) {
        self.machine.toggle_seat(&self.view, player, &mut self.sink);
        self.effects.push(UiEffect::ActionsChanged);
    }

    /// A tapped choice token in the card-choice phase.
    pub fn choose_token(&mut self, token: &str) -> Result<(), EngineError> {
        self.machine.choose_token(&self.view, token, &mut self.sink)
    }

    /// A tapped face-down position in the card-choice phase.
    pub fn choose_position(&mut self, position: u32) -> Result<(), EngineError> {
        self.machine
            .choose_position(&self.view, position, &mut self.sink)
    }

    /// A (card type, name) pick in the naming phase.
    pub fn choose_name(&mut self, kind: CardKind, name_index: u32) {
        self.machine.choose_name(&self.view, kind, name_index);
        self.effects.push(UiEffect::ActionsChanged);
    }

    /// A bar button press. A confirmed single-card play is rendered
    /// optimistically: the card moves to the discard top at once and is
    /// rolled back if the play is later cancelled.
    pub fn press(&mut self, kind: ButtonKind) -> Result<(), EngineError> {
        let submitted = self.machine.press(&self.view, kind, &mut self.sink)?;
        if let Some(ActionRequest::PlayCard { card_id }) = submitted {
            if kind == ButtonKind::ConfirmPlay {
                self.apply_optimistic_play(card_id);
            }
        }
        self.effects.push(UiEffect::ActionsChanged);
        Ok(())
    }

    /// One-second heartbeat from the shell.
    pub fn tick_second(&mut self) {
        match self.machine.tick_second(&self.view, &mut self.sink) {
            TimerTick::Idle => {}
            TimerTick::Running(left) => self.effects.push(UiEffect::TimerTick(left)),
            TimerTick::Expired => {
                self.effects.push(UiEffect::TimerTick(0));
                self.effects.push(UiEffect::ActionsChanged);
            }
        }
    }

    fn apply_optimistic_play(&mut self, card_id: CardId) {
        let Some(card) = self.view.hand_card(card_id).copied() else {
            return;
        };
        self.reconciler
            .discard
            .show(&mut self.view.discard_top, card);
        self.view.remove_from_hand(card_id);
        self.view.resync_local_count();
        self.machine.refresh(&self.view);
        self.effects.push(UiEffect::DiscardChanged);
        self.effects.push(UiEffect::HandChanged);
    }

    fn push_effects_for(&mut self, note: &Notification) {
        match note {
            Notification::HandReplaced { .. } => self.effects.push(UiEffect::HandChanged),
            Notification::CardDrawn { player_id, .. } => {
                self.effects.push(UiEffect::DeckChanged);
                self.push_hand_effect(*player_id);
            }
            Notification::DeckCount { .. } | Notification::DeckShuffled { .. } => {
                self.effects.push(UiEffect::DeckChanged);
            }
            Notification::CardPlayed { player_id, .. }
            | Notification::ThreesomePlayed { player_id, .. } => {
                self.effects.push(UiEffect::DiscardChanged);
                self.push_hand_effect(*player_id);
            }
            Notification::CardDiscarded { .. } | Notification::PlayCancelled { .. } => {
                self.effects.push(UiEffect::DiscardChanged);
            }
            Notification::CardRemoved { player_id, .. }
            | Notification::CardGained { player_id, .. }
            | Notification::HandCount { player_id, .. } => self.push_hand_effect(*player_id),
            Notification::CardStolen {
                player_id,
                target_player_id,
                ..
            } => {
                self.push_hand_effect(*player_id);
                self.push_hand_effect(*target_player_id);
            }
            Notification::GoldenDelta { player_id, .. }
            | Notification::GoldenCount { player_id, .. } => {
                self.effects.push(UiEffect::SeatChanged(*player_id));
            }
            Notification::PileRecycled { .. } => {
                self.effects.push(UiEffect::DiscardChanged);
                self.effects.push(UiEffect::DeckChanged);
            }
            Notification::CardRevealed { .. }
            | Notification::HandRevealed { .. }
            | Notification::ReactionPassed { .. }
            | Notification::AlarmTriggered { .. }
            | Notification::TurnEnded { .. }
            | Notification::Message { .. } => {}
        }
    }

    fn push_hand_effect(&mut self, player: PlayerId) {
        if self.view.is_local(player) {
            self.effects.push(UiEffect::HandChanged);
        } else {
            self.effects.push(UiEffect::SeatChanged(player));
        }
    }
}
