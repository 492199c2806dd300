//! Seat-target selection handler.
//!
//! The selection is an ordered list capped at `target_count`. When the cap
//! is reached the machine auto-submits, unless the server asked for an
//! explicit confirmation, in which case the confirm button appears exactly
//! at the cap.

use crate::phases::args::TargetArgs;
use crate::phases::buttons::{ActionBar, ActionButton, ButtonKind};
use crate::view::model::PlayerId;

pub fn buttons(args: &TargetArgs, selected: &[PlayerId]) -> ActionBar {
    let mut bar = ActionBar::default();
    if args.requires_multiple && selected.len() == args.target_count {
        bar.push(ActionButton::enabled(
            ButtonKind::ConfirmTargets,
            "Confirm targets",
        ));
    }
    bar
}

/// Whether toggling `player` on is allowed right now.
pub fn can_select(args: &TargetArgs, selected: &[PlayerId], player: PlayerId) -> bool {
    args.selectable.contains(&player)
        && !selected.contains(&player)
        && selected.len() < args.target_count
}

/// Whether the current selection should be auto-submitted.
pub fn should_auto_submit(args: &TargetArgs, selected: &[PlayerId]) -> bool {
    !args.requires_multiple && args.target_count > 0 && selected.len() == args.target_count
}
