//! Phase dispatch.
//!
//! Phases are a closed enum so dispatch stays exhaustively checkable; the
//! server's phase strings are parsed once at the boundary and an unknown
//! name simply leaves no handler active (no actions, no error). Transitions
//! run leave-then-enter; a refresh recomputes the action bar in place.

use serde_json::Value;
use tracing::debug;

use crate::domain::plays::PlayDescriptor;
use crate::domain::{Card, CardId, CardKind};
use crate::errors::EngineError;
use crate::phases::args::{
    CardChoiceArgs, CardNameArgs, DiscardArgs, PlayerTurnArgs, ReactionArgs, TargetArgs,
};
use crate::phases::buttons::{ActionBar, ButtonKind};
use crate::phases::{
    card_choice, card_name, discard_pick, player_turn, reaction, resolution, targets,
};
use crate::protocol::actions::{ActionRequest, ActionSink};
use crate::timer::{ReactionTimer, TimerTick, REACTION_FALLBACK_SECS};
use crate::view::model::{PlayerId, ViewModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    PlayerTurn,
    Reaction,
    TargetSelect,
    DiscardSelect,
    CardChoice,
    CardNameChoice,
    Resolution,
}

impl GamePhase {
    pub fn from_server(name: &str) -> Option<Self> {
        match name {
            "playerTurn" => Some(GamePhase::PlayerTurn),
            "reaction" => Some(GamePhase::Reaction),
            "targetSelect" => Some(GamePhase::TargetSelect),
            "discardSelect" => Some(GamePhase::DiscardSelect),
            "cardChoice" => Some(GamePhase::CardChoice),
            "cardNameChoice" => Some(GamePhase::CardNameChoice),
            "resolution" => Some(GamePhase::Resolution),
            _ => None,
        }
    }
}

/// Parsed per-phase args; one variant per handler.
#[derive(Debug, Clone, PartialEq)]
enum PhaseArgs {
    PlayerTurn(PlayerTurnArgs),
    Reaction(ReactionArgs),
    TargetSelect(TargetArgs),
    DiscardSelect(DiscardArgs),
    CardChoice(CardChoiceArgs),
    CardNameChoice(CardNameArgs),
    Resolution,
}

impl PhaseArgs {
    fn parse(phase: GamePhase, raw: &Value) -> Self {
        match phase {
            GamePhase::PlayerTurn => PhaseArgs::PlayerTurn(PlayerTurnArgs::parse(raw)),
            GamePhase::Reaction => PhaseArgs::Reaction(ReactionArgs::parse(raw)),
            GamePhase::TargetSelect => PhaseArgs::TargetSelect(TargetArgs::parse(raw)),
            GamePhase::DiscardSelect => PhaseArgs::DiscardSelect(DiscardArgs::parse(raw)),
            GamePhase::CardChoice => PhaseArgs::CardChoice(CardChoiceArgs::parse(raw)),
            GamePhase::CardNameChoice => PhaseArgs::CardNameChoice(CardNameArgs::parse(raw)),
            GamePhase::Resolution => PhaseArgs::Resolution,
        }
    }
}

#[derive(Debug)]
struct Active {
    phase: GamePhase,
    args: PhaseArgs,
    selected_cards: Vec<CardId>,
    selected_seats: Vec<PlayerId>,
    chosen_kind: Option<CardKind>,
    chosen_name: Option<u32>,
    /// One-shot lock for phases that submit on selection (targets, choices).
    choice_sent: bool,
    /// The play the current selection forms, if any; what ConfirmPlay sends.
    pending_play: Option<PlayDescriptor>,
}

impl Active {
    fn new(phase: GamePhase, args: PhaseArgs) -> Self {
        Self {
            phase,
            args,
            selected_cards: Vec::new(),
            selected_seats: Vec::new(),
            chosen_kind: None,
            chosen_name: None,
            choice_sent: false,
            pending_play: None,
        }
    }
}

#[derive(Debug, Default)]
pub struct PhaseMachine {
    active: Option<Active>,
    bar: ActionBar,
    highlight_interrupts: bool,
    timer: ReactionTimer,
}

impl PhaseMachine {
    pub fn current_phase(&self) -> Option<GamePhase> {
        self.active.as_ref().map(|a| a.phase)
    }

    pub fn action_bar(&self) -> &ActionBar {
        &self.bar
    }

    pub fn highlight_interrupts(&self) -> bool {
        self.highlight_interrupts
    }

    pub fn selected_cards(&self) -> &[CardId] {
        self.active
            .as_ref()
            .map(|a| a.selected_cards.as_slice())
            .unwrap_or(&[])
    }

    pub fn selected_seats(&self) -> &[PlayerId] {
        self.active
            .as_ref()
            .map(|a| a.selected_seats.as_slice())
            .unwrap_or(&[])
    }

    pub fn timer_remaining(&self) -> Option<u32> {
        self.timer.remaining()
    }

    /// Authoritative phase change: leave the old handler, enter the new one.
    pub fn set_phase(&mut self, view: &ViewModel, name: &str, raw_args: &Value) {
        self.leave();
        let Some(phase) = GamePhase::from_server(name) else {
            debug!(phase = name, "no handler for phase");
            self.refresh(view);
            return;
        };
        let args = PhaseArgs::parse(phase, raw_args);
        if let PhaseArgs::Reaction(reaction_args) = &args {
            if view.local_active {
                let secs = reaction_args
                    .duration_secs
                    .unwrap_or(REACTION_FALLBACK_SECS);
                self.timer.start(secs);
            }
        }
        self.active = Some(Active::new(phase, args));
        self.refresh(view);
    }

    /// Server-side recompute of eligible actions without a phase change.
    pub fn update_actions(&mut self, view: &ViewModel, raw_args: &Value) {
        if let Some(active) = &mut self.active {
            active.args = PhaseArgs::parse(active.phase, raw_args);
        }
        self.refresh(view);
    }

    fn leave(&mut self) {
        self.timer.cancel();
        self.highlight_interrupts = false;
        self.active = None;
        self.bar = ActionBar::default();
    }

    /// Recompute the action bar from the view-model. An ineligible local
    /// seat keeps its passive display (highlighting) but gets no actions.
    pub fn refresh(&mut self, view: &ViewModel) {
        let Some(active) = &mut self.active else {
            self.bar = ActionBar::default();
            self.highlight_interrupts = false;
            return;
        };
        self.highlight_interrupts = active.phase == GamePhase::Reaction;
        if !view.local_active {
            active.pending_play = None;
            self.bar = ActionBar::default();
            return;
        }
        self.bar = match &active.args {
            PhaseArgs::PlayerTurn(args) => {
                let (bar, play) = player_turn::buttons(view, args, &active.selected_cards);
                active.pending_play = play;
                bar
            }
            PhaseArgs::Reaction(_) => reaction::buttons(),
            PhaseArgs::TargetSelect(args) => targets::buttons(args, &active.selected_seats),
            PhaseArgs::DiscardSelect(args) => discard_pick::buttons(args, &active.selected_cards),
            PhaseArgs::CardChoice(_) => ActionBar::default(),
            PhaseArgs::CardNameChoice(args) => {
                card_name::buttons(args, active.chosen_kind, active.chosen_name)
            }
            PhaseArgs::Resolution => resolution::buttons(),
        };
    }

    /// A card in the hand was tapped. In selection phases this toggles
    /// membership; in the reaction phase tapping an interrupt plays it.
    pub fn toggle_card(&mut self, view: &ViewModel, card_id: CardId, sink: &mut dyn ActionSink) {
        let Some(active) = &mut self.active else {
            return;
        };
        match active.phase {
            GamePhase::PlayerTurn | GamePhase::DiscardSelect => {
                if let Some(pos) = active.selected_cards.iter().position(|id| *id == card_id) {
                    active.selected_cards.remove(pos);
                } else {
                    active.selected_cards.push(card_id);
                }
                self.refresh(view);
            }
            GamePhase::Reaction => {
                if !view.local_active {
                    return;
                }
                let is_interrupt = view.hand_card(card_id).is_some_and(Card::is_interrupt);
                if is_interrupt && self.timer.try_mark_sent() {
                    self.timer.stop_countdown();
                    sink.submit(ActionRequest::PlayCard { card_id });
                }
            }
            _ => {}
        }
    }

    /// A seat toggle in the target-selection phase. Auto-submits once the
    /// cap is reached unless the server asked for explicit confirmation.
    pub fn toggle_seat(&mut self, view: &ViewModel, player: PlayerId, sink: &mut dyn ActionSink) {
        let Some(active) = &mut self.active else {
            return;
        };
        let PhaseArgs::TargetSelect(args) = &active.args else {
            return;
        };
        if !view.local_active || active.choice_sent {
            return;
        }
        if let Some(pos) = active.selected_seats.iter().position(|id| *id == player) {
            active.selected_seats.remove(pos);
        } else if targets::can_select(args, &active.selected_seats, player) {
            active.selected_seats.push(player);
            if targets::should_auto_submit(args, &active.selected_seats) {
                active.choice_sent = true;
                sink.submit(ActionRequest::ChooseTargets {
                    player_ids: active.selected_seats.clone(),
                });
            }
        }
        self.refresh(view);
    }

    /// A tapped choice token in the card-choice phase. Sends once.
    pub fn choose_token(
        &mut self,
        view: &ViewModel,
        token: &str,
        sink: &mut dyn ActionSink,
    ) -> Result<(), EngineError> {
        self.choose_card(view, sink, |args| card_choice::request_for_token(args, token))
    }

    /// A tapped face-down position in the card-choice phase. Sends once.
    pub fn choose_position(
        &mut self,
        view: &ViewModel,
        position: u32,
        sink: &mut dyn ActionSink,
    ) -> Result<(), EngineError> {
        self.choose_card(view, sink, |args| {
            card_choice::request_for_position(args, position)
        })
    }

    fn choose_card<F>(
        &mut self,
        view: &ViewModel,
        sink: &mut dyn ActionSink,
        resolve: F,
    ) -> Result<(), EngineError>
    where
        F: FnOnce(&CardChoiceArgs) -> Option<ActionRequest>,
    {
        let Some(active) = &mut self.active else {
            return Err(EngineError::NoActivePhase);
        };
        let PhaseArgs::CardChoice(args) = &active.args else {
            return Err(EngineError::PhaseMismatch);
        };
        if !view.local_active {
            return Err(EngineError::NotEligible);
        }
        if active.choice_sent {
            // Already answered; the server will move the phase on.
            return Ok(());
        }
        let Some(request) = resolve(args) else {
            // Stale or unbound choice; dropped, not an error.
            return Ok(());
        };
        active.choice_sent = true;
        sink.submit(request);
        Ok(())
    }

    /// A (card type, name) pick in the naming phase. Choices outside the
    /// server catalog are ignored as stale.
    pub fn choose_name(&mut self, view: &ViewModel, kind: CardKind, name_index: u32) {
        let Some(active) = &mut self.active else {
            return;
        };
        let PhaseArgs::CardNameChoice(args) = &active.args else {
            return;
        };
        if args.contains(kind, name_index) {
            active.chosen_kind = Some(kind);
            active.chosen_name = Some(name_index);
        }
        self.refresh(view);
    }

    /// A bar button press. On success, returns the request that went out
    /// (None when a one-shot guard swallowed the press) so the caller can
    /// apply optimistic display effects.
    pub fn press(
        &mut self,
        view: &ViewModel,
        kind: ButtonKind,
        sink: &mut dyn ActionSink,
    ) -> Result<Option<ActionRequest>, EngineError> {
        if self.active.is_none() {
            return Err(EngineError::NoActivePhase);
        }
        if !view.local_active {
            return Err(EngineError::NotEligible);
        }
        if self.bar.find(kind).is_none() {
            return Err(EngineError::PhaseMismatch);
        }
        match kind {
            ButtonKind::ConfirmPlay => self.press_confirm_play(view, sink),
            ButtonKind::DiscardAndDraw => Ok(Some(submit(sink, ActionRequest::DiscardAndDraw))),
            ButtonKind::EndTurn => Ok(Some(submit(sink, ActionRequest::EndTurn))),
            ButtonKind::SkipReaction => {
                if self.timer.try_mark_sent() {
                    self.timer.stop_countdown();
                    Ok(Some(submit(sink, ActionRequest::SkipReaction)))
                } else {
                    Ok(None)
                }
            }
            ButtonKind::ConfirmTargets => self.press_confirm_targets(sink),
            ButtonKind::ConfirmDiscard => self.press_confirm_discard(view, sink),
            ButtonKind::ConfirmName => self.press_confirm_name(sink),
        }
    }

    fn press_confirm_play(
        &mut self,
        view: &ViewModel,
        sink: &mut dyn ActionSink,
    ) -> Result<Option<ActionRequest>, EngineError> {
        let Some(active) = &mut self.active else {
            return Err(EngineError::NoActivePhase);
        };
        let request = match active.pending_play.take() {
            Some(PlayDescriptor::Single { card_id, .. }) => ActionRequest::PlayCard { card_id },
            Some(
                PlayDescriptor::ThreesomePotato { card_ids, .. }
                | PlayDescriptor::ThreesomeValue { card_ids, .. },
            ) => ActionRequest::PlayThreesome {
                card_ids: card_ids.to_vec(),
            },
            None => return Err(EngineError::NoLegalPlay),
        };
        active.selected_cards.clear();
        let request = submit(sink, request);
        self.refresh(view);
        Ok(Some(request))
    }

    fn press_confirm_targets(
        &mut self,
        sink: &mut dyn ActionSink,
    ) -> Result<Option<ActionRequest>, EngineError> {
        let Some(active) = &mut self.active else {
            return Err(EngineError::NoActivePhase);
        };
        let PhaseArgs::TargetSelect(args) = &active.args else {
            return Err(EngineError::PhaseMismatch);
        };
        if active.selected_seats.len() != args.target_count {
            return Err(EngineError::IncompleteChoice {
                detail: "target selection below the required count",
            });
        }
        if active.choice_sent {
            return Ok(None);
        }
        active.choice_sent = true;
        let request = submit(
            sink,
            ActionRequest::ChooseTargets {
                player_ids: active.selected_seats.clone(),
            },
        );
        Ok(Some(request))
    }

    fn press_confirm_discard(
        &mut self,
        view: &ViewModel,
        sink: &mut dyn ActionSink,
    ) -> Result<Option<ActionRequest>, EngineError> {
        let Some(active) = &mut self.active else {
            return Err(EngineError::NoActivePhase);
        };
        let PhaseArgs::DiscardSelect(args) = &active.args else {
            return Err(EngineError::PhaseMismatch);
        };
        if active.selected_cards.len() != args.cards_to_discard {
            return Err(EngineError::IncompleteChoice {
                detail: "discard selection does not match the required count",
            });
        }
        let card_ids = std::mem::take(&mut active.selected_cards);
        let request = submit(sink, ActionRequest::DiscardCards { card_ids });
        self.refresh(view);
        Ok(Some(request))
    }

    fn press_confirm_name(
        &mut self,
        sink: &mut dyn ActionSink,
    ) -> Result<Option<ActionRequest>, EngineError> {
        let Some(active) = &mut self.active else {
            return Err(EngineError::NoActivePhase);
        };
        match (active.chosen_kind, active.chosen_name) {
            (Some(kind), Some(name_index)) => Ok(Some(submit(
                sink,
                ActionRequest::NameCard { kind, name_index },
            ))),
            _ => Err(EngineError::IncompleteChoice {
                detail: "both a card type and a name must be chosen",
            }),
        }
    }

    /// One-second heartbeat from the shell. The countdown re-checks phase
    /// and eligibility at fire time; a tick after the phase moved on is a
    /// guarded no-op.
    pub fn tick_second(&mut self, view: &ViewModel, sink: &mut dyn ActionSink) -> TimerTick {
        if self.current_phase() != Some(GamePhase::Reaction) {
            return TimerTick::Idle;
        }
        let tick = self.timer.tick();
        if tick == TimerTick::Expired && view.local_active && self.timer.try_mark_sent() {
            sink.submit(ActionRequest::SkipReaction);
        }
        tick
    }

    /// The local seat stopped being eligible mid-phase (e.g. it already
    /// acted in a simultaneous reaction). Kills the countdown and the bar.
    pub fn local_eligibility_lost(&mut self, view: &ViewModel) {
        self.timer.cancel();
        self.refresh(view);
    }
}

/// Submit and hand the request back for optimistic follow-up.
fn submit(sink: &mut dyn ActionSink, request: ActionRequest) -> ActionRequest {
    sink.submit(request.clone());
    request
}
