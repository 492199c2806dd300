//! Card-naming handler: confirm unlocks only once both a card type and a
//! name within that type have been chosen from the server catalog.

use crate::domain::CardKind;
use crate::phases::args::CardNameArgs;
use crate::phases::buttons::{ActionBar, ActionButton, ButtonKind};

pub fn buttons(
    args: &CardNameArgs,
    chosen_kind: Option<CardKind>,
    chosen_name: Option<u32>,
) -> ActionBar {
    let complete = matches!((chosen_kind, chosen_name), (Some(kind), Some(name))
        if args.contains(kind, name));
    let mut bar = ActionBar::default();
    let button = if complete {
        ActionButton::enabled(ButtonKind::ConfirmName, "Confirm name")
    } else {
        ActionButton::disabled(ButtonKind::ConfirmName, "Confirm name")
    };
    bar.push(button);
    bar
}
