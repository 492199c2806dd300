//! Phase-entry argument schemas.
//!
//! Each phase recognizes a fixed set of fields inside the opaque args object
//! the server sends along with the phase name. Parsing is defensive
//! throughout: a missing or malformed field falls back to a safe default
//! rather than erroring.

use serde_json::Value;

use crate::domain::{Card, CardKind};
use crate::protocol::fields;
use crate::view::model::PlayerId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerTurnArgs {
    pub can_discard_and_draw: bool,
}

impl PlayerTurnArgs {
    pub fn parse(raw: &Value) -> Self {
        Self {
            can_discard_and_draw: fields::boolean(raw, "canDiscardAndDraw"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReactionArgs {
    /// Countdown length. The server value is canonical; a fallback constant
    /// applies only when absent.
    pub duration_secs: Option<u32>,
}

impl ReactionArgs {
    pub fn parse(raw: &Value) -> Self {
        Self {
            duration_secs: fields::uint(raw, "duration"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetArgs {
    pub selectable: Vec<PlayerId>,
    pub target_count: usize,
    pub requires_multiple: bool,
}

impl TargetArgs {
    pub fn parse(raw: &Value) -> Self {
        Self {
            selectable: fields::id_list(raw, "selectablePlayers"),
            target_count: fields::uint(raw, "targetCount").unwrap_or(1) as usize,
            requires_multiple: fields::boolean(raw, "requiresMultipleTargets"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscardArgs {
    pub cards_to_discard: usize,
}

impl DiscardArgs {
    pub fn parse(raw: &Value) -> Self {
        Self {
            cards_to_discard: fields::uint(raw, "cardsToDiscard").unwrap_or(1) as usize,
        }
    }
}

/// One selectable entry in the card-choice phase: either a server token
/// (blind or revealed) or a bare position into a face-down fan.
#[derive(Debug, Clone, PartialEq)]
pub enum CardChoice {
    Token { token: String, card: Option<Card> },
    Position { position: u32 },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardChoiceArgs {
    pub choices: Vec<CardChoice>,
}

impl CardChoiceArgs {
    pub fn parse(raw: &Value) -> Self {
        let mut choices = Vec::new();
        for entry in raw
            .get("revealedCards")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
        {
            if let Some(token) = fields::string(entry, "selectToken") {
                choices.push(CardChoice::Token {
                    token,
                    card: fields::card_entry(entry),
                });
            }
        }
        for entry in raw
            .get("cardBacks")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
        {
            if let Some(token) = fields::string(entry, "selectToken") {
                choices.push(CardChoice::Token { token, card: None });
            }
        }
        // A bare hand size means "pick a position from a face-down fan".
        if choices.is_empty() {
            if let Some(hand_size) = fields::uint(raw, "handSize") {
                choices.extend((0..hand_size).map(|position| CardChoice::Position { position }));
            }
        }
        Self { choices }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameGroup {
    pub kind: CardKind,
    pub name_indexes: Vec<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardNameArgs {
    pub catalog: Vec<NameGroup>,
}

impl CardNameArgs {
    pub fn parse(raw: &Value) -> Self {
        let mut catalog = Vec::new();
        if let Some(groups) = raw.get("cardNames").and_then(Value::as_object) {
            for (kind_str, indexes) in groups {
                let Ok(kind) = CardKind::from_wire(kind_str) else {
                    continue;
                };
                let name_indexes: Vec<u32> = indexes
                    .as_array()
                    .map(|ns| {
                        ns.iter()
                            .filter_map(|n| n.as_u64().and_then(|n| u32::try_from(n).ok()))
                            .collect()
                    })
                    .unwrap_or_default();
                if !name_indexes.is_empty() {
                    catalog.push(NameGroup { kind, name_indexes });
                }
            }
        }
        Self { catalog }
    }

    pub fn contains(&self, kind: CardKind, name_index: u32) -> bool {
        self.catalog
            .iter()
            .any(|g| g.kind == kind && g.name_indexes.contains(&name_index))
    }
}
