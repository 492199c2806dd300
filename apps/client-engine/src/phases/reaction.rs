//! Reaction-window handler.
//!
//! Interrupt cards in the hand are highlighted; the only bar action is the
//! explicit skip. Playing an interrupt happens by tapping the card itself
//! and shares the one-shot guard with the skip paths.

use crate::phases::buttons::{ActionBar, ActionButton, ButtonKind};

pub fn buttons() -> ActionBar {
    let mut bar = ActionBar::default();
    bar.push(ActionButton::enabled(ButtonKind::SkipReaction, "Skip"));
    bar
}
