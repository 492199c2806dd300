//! Phase-reactive action layer.
//!
//! The server names the authoritative phase; every handler here only reacts:
//! enter, leave, refresh. Handlers derive the action bar from the shared
//! view-model and never mutate game state themselves.

pub mod args;
pub mod buttons;
pub mod card_choice;
pub mod card_name;
pub mod discard_pick;
pub mod machine;
pub mod player_turn;
pub mod reaction;
pub mod resolution;
pub mod targets;

#[cfg(test)]
mod tests_machine;
#[cfg(test)]
mod tests_selection_phases;

pub use buttons::{ActionBar, ActionButton, ButtonKind};
pub use machine::{GamePhase, PhaseMachine};
