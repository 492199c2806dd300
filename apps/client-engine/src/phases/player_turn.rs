//! Active-turn handler: derives the play button from the current selection.

use crate::domain::plays::{evaluate_selection, PlayDescriptor};
use crate::domain::CardId;
use crate::phases::args::PlayerTurnArgs;
use crate::phases::buttons::{ActionBar, ActionButton, ButtonKind};
use crate::view::model::ViewModel;

/// Recomputed on every selection change. "End turn" is always the last
/// button in the bar.
pub fn buttons(
    view: &ViewModel,
    args: &PlayerTurnArgs,
    selected: &[CardId],
) -> (ActionBar, Option<PlayDescriptor>) {
    let play = evaluate_selection(&view.hand, selected);
    let mut bar = ActionBar::default();
    if let Some(descriptor) = &play {
        bar.push(ActionButton::enabled(
            ButtonKind::ConfirmPlay,
            descriptor.label(),
        ));
    }
    if args.can_discard_and_draw {
        bar.push(ActionButton::enabled(
            ButtonKind::DiscardAndDraw,
            "Discard and draw",
        ));
    }
    bar.push(ActionButton::enabled(ButtonKind::EndTurn, "End turn"));
    (bar, play)
}
