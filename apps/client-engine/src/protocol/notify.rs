//! Inbound notification schema.
//!
//! The transport delivers `(name, payload)` pairs in server-emission order.
//! Each recognized name decodes to one `Notification`; unknown names and
//! payloads missing a required field decode to `None` and are skipped.
//! Optional fields follow the defensive policy of `protocol::fields`.

use serde_json::Value;
use tracing::warn;

use crate::domain::{Card, CardId};
use crate::protocol::fields;
use crate::view::model::PlayerId;

/// The four steal-type effect cards whose notifications share one shape:
/// a source seat takes one card from a target seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StealEffect {
    Raid,
    Pickpocket,
    Trade,
    Gleaning,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// Full replacement of the local hand.
    HandReplaced { cards: Vec<Card> },
    /// A seat drew from the deck. Identity is present only for the local
    /// seat's own draws.
    CardDrawn {
        player_id: PlayerId,
        card_id: Option<CardId>,
        card: Option<Card>,
        deck_count: Option<u32>,
    },
    DeckCount { count: u32 },
    DeckShuffled { deck_count: Option<u32> },
    /// A single-card play landed on the discard pile.
    CardPlayed { player_id: PlayerId, card: Card },
    ThreesomePlayed {
        player_id: PlayerId,
        card_ids: Vec<CardId>,
    },
    /// A card is now permanently in the discard pile.
    CardDiscarded {
        card_id: CardId,
        card: Option<Card>,
    },
    /// An interrupt nullified an earlier play.
    PlayCancelled { card_id: CardId },
    CardRemoved {
        player_id: PlayerId,
        card_id: CardId,
    },
    CardGained {
        player_id: PlayerId,
        card_id: CardId,
        card: Option<Card>,
    },
    HandCount { player_id: PlayerId, count: u32 },
    CardStolen {
        effect: StealEffect,
        player_id: PlayerId,
        target_player_id: PlayerId,
        card_id: CardId,
        card: Option<Card>,
    },
    /// Reveal-only: populate the identity cache, no other state change.
    CardRevealed { card: Card },
    HandRevealed {
        player_id: PlayerId,
        cards: Vec<Card>,
    },
    GoldenDelta { player_id: PlayerId, delta: i64 },
    GoldenCount { player_id: PlayerId, count: u32 },
    /// The discard pile was shuffled back into the deck.
    PileRecycled { deck_count: Option<u32> },
    /// A seat finished (or forfeited) its reaction window.
    ReactionPassed { player_id: PlayerId },
    AlarmTriggered { player_id: PlayerId },
    TurnEnded { player_id: PlayerId },
    Message { text: String },
}

impl Notification {
    /// Decode one `(name, payload)` pair. `None` means the event carries
    /// nothing this client can apply.
    pub fn from_wire(name: &str, payload: &Value) -> Option<Notification> {
        let note = match name {
            "hand_replaced" => Notification::HandReplaced {
                cards: fields::card_list(payload, "cards"),
            },
            "card_drawn" => Notification::CardDrawn {
                player_id: fields::uint(payload, "player_id")?,
                card_id: fields::uint(payload, "card_id"),
                card: fields::card(payload),
                deck_count: fields::uint(payload, "deckCount"),
            },
            "deck_count" => Notification::DeckCount {
                count: fields::uint(payload, "deckCount")?,
            },
            "deck_shuffled" => Notification::DeckShuffled {
                deck_count: fields::uint(payload, "deckCount"),
            },
            "card_played" => Notification::CardPlayed {
                player_id: fields::uint(payload, "player_id")?,
                card: fields::card(payload)?,
            },
            "threesome_played" => Notification::ThreesomePlayed {
                player_id: fields::uint(payload, "player_id")?,
                card_ids: fields::id_list(payload, "card_ids"),
            },
            "card_discarded" => Notification::CardDiscarded {
                card_id: fields::uint(payload, "card_id")?,
                card: fields::card(payload),
            },
            "play_cancelled" => Notification::PlayCancelled {
                card_id: fields::uint(payload, "card_id")?,
            },
            "card_removed" => Notification::CardRemoved {
                player_id: fields::uint(payload, "player_id")?,
                card_id: fields::uint(payload, "card_id")?,
            },
            "card_gained" => Notification::CardGained {
                player_id: fields::uint(payload, "player_id")?,
                card_id: fields::uint(payload, "card_id")?,
                card: fields::card(payload),
            },
            "hand_count" => Notification::HandCount {
                player_id: fields::uint(payload, "player_id")?,
                count: fields::uint(payload, "handCount")?,
            },
            "card_raided" => steal(StealEffect::Raid, payload)?,
            "card_pickpocketed" => steal(StealEffect::Pickpocket, payload)?,
            "card_traded" => steal(StealEffect::Trade, payload)?,
            "card_gleaned" => steal(StealEffect::Gleaning, payload)?,
            "card_revealed" => Notification::CardRevealed {
                card: fields::card(payload)?,
            },
            "hand_revealed" => Notification::HandRevealed {
                player_id: fields::uint(payload, "player_id")?,
                cards: fields::card_list(payload, "cards"),
            },
            "golden_potatoes" => Notification::GoldenDelta {
                player_id: fields::uint(payload, "player_id")?,
                delta: fields::int(payload, "delta")?,
            },
            "golden_count" => Notification::GoldenCount {
                player_id: fields::uint(payload, "player_id")?,
                count: fields::uint(payload, "count")?,
            },
            "pile_recycled" => Notification::PileRecycled {
                deck_count: fields::uint(payload, "deckCount"),
            },
            "reaction_passed" => Notification::ReactionPassed {
                player_id: fields::uint(payload, "player_id")?,
            },
            "alarm_triggered" => Notification::AlarmTriggered {
                player_id: fields::uint(payload, "player_id")?,
            },
            "turn_ended" => Notification::TurnEnded {
                player_id: fields::uint(payload, "player_id")?,
            },
            "message" => Notification::Message {
                text: fields::string(payload, "text")?,
            },
            _ => {
                warn!(notification = name, "ignoring unknown notification");
                return None;
            }
        };
        Some(note)
    }
}

fn steal(effect: StealEffect, payload: &Value) -> Option<Notification> {
    Some(Notification::CardStolen {
        effect,
        player_id: fields::uint(payload, "player_id")?,
        target_player_id: fields::uint(payload, "target_player_id")?,
        card_id: fields::uint(payload, "card_id")?,
        card: fields::card(payload),
    })
}
