//! Action-bar descriptors handed to the rendering shell.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    ConfirmPlay,
    DiscardAndDraw,
    EndTurn,
    SkipReaction,
    ConfirmTargets,
    ConfirmDiscard,
    ConfirmName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
    pub kind: ButtonKind,
    pub label: String,
    pub enabled: bool,
}

impl ActionButton {
    pub fn enabled(kind: ButtonKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            enabled: true,
        }
    }

    pub fn disabled(kind: ButtonKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            enabled: false,
        }
    }
}

/// The ordered set of buttons currently offered to the local player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionBar {
    pub buttons: Vec<ActionButton>,
}

impl ActionBar {
    pub fn push(&mut self, button: ActionButton) {
        self.buttons.push(button);
    }

    pub fn find(&self, kind: ButtonKind) -> Option<&ActionButton> {
        self.buttons.iter().find(|b| b.kind == kind)
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }
}
