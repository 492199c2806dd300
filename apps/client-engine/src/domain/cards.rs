//! Core card types: Card, CardKind, DecodedCard

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::codec;
use crate::errors::EngineError;

/// Server-issued card identifier. Identity is the id; everything else about a
/// card can be recomputed from `type_arg`.
pub type CardId = u32;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CardKind {
    Potato,
    Wildcard,
    Action,
    GoldenPotato,
}

impl CardKind {
    pub fn as_wire(&self) -> &'static str {
        match self {
            CardKind::Potato => "potato",
            CardKind::Wildcard => "wildcard",
            CardKind::Action => "action",
            CardKind::GoldenPotato => "golden_potato",
        }
    }

    pub fn from_wire(s: &str) -> Result<Self, EngineError> {
        match s {
            "potato" => Ok(CardKind::Potato),
            "wildcard" => Ok(CardKind::Wildcard),
            "action" => Ok(CardKind::Action),
            "golden_potato" => Ok(CardKind::GoldenPotato),
            _ => Err(EngineError::UnknownCardKind(s.to_string())),
        }
    }
}

impl Serialize for CardKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for CardKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CardKind::from_wire(&s).map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}

/// One card as the wire presents it. Immutable once created.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    #[serde(rename = "type")]
    pub kind: CardKind,
    pub type_arg: u32,
}

/// The three sub-fields packed into `type_arg`. Derived on demand, never
/// stored; `value` is 0..=3 by table convention but the codec does not
/// enforce it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DecodedCard {
    pub name_index: u32,
    pub value: u32,
    pub is_alarm: bool,
}

impl Card {
    pub fn new(id: CardId, kind: CardKind, type_arg: u32) -> Self {
        Self { id, kind, type_arg }
    }

    pub fn decoded(&self) -> DecodedCard {
        codec::decode(self.type_arg)
    }

    /// Interrupt cards are the two action identities playable only during
    /// the reaction phase, to cancel another play.
    pub fn is_interrupt(&self) -> bool {
        self.kind == CardKind::Action && matches!(self.decoded().name_index, 1 | 2)
    }

    /// Playing an alarm card also ends the player's turn.
    pub fn is_alarm(&self) -> bool {
        self.kind == CardKind::Action && self.decoded().is_alarm
    }
}
