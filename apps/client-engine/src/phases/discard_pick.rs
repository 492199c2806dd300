//! Forced-discard handler: confirm is enabled exactly when the selection
//! matches the server-declared discard count.

use crate::domain::CardId;
use crate::phases::args::DiscardArgs;
use crate::phases::buttons::{ActionBar, ActionButton, ButtonKind};

pub fn buttons(args: &DiscardArgs, selected: &[CardId]) -> ActionBar {
    let mut bar = ActionBar::default();
    let label = format!("Discard {} card(s)", args.cards_to_discard);
    let button = if selected.len() == args.cards_to_discard {
        ActionButton::enabled(ButtonKind::ConfirmDiscard, label)
    } else {
        ActionButton::disabled(ButtonKind::ConfirmDiscard, label)
    };
    bar.push(button);
    bar
}
