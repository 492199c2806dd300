//! Selection-to-play validation: which play, if any, a free-form card
//! selection forms.
//!
//! `evaluate_selection` is pure and has no memory of prior calls; it is
//! re-run on every selection change. Selected ids no longer present in the
//! hand are dropped, not treated as an error: a selection can go stale
//! while a removal notification is in flight.

use crate::domain::cards::{Card, CardId, CardKind};
use crate::domain::names;

/// A legal play derived from the current selection. Produced fresh per
/// selection change; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayDescriptor {
    Single {
        card_id: CardId,
        label: String,
        /// Alarm cards end the turn as part of the play.
        ends_turn: bool,
    },
    ThreesomePotato {
        card_ids: [CardId; 3],
        label: String,
    },
    ThreesomeValue {
        card_ids: [CardId; 3],
        label: String,
    },
}

impl PlayDescriptor {
    pub fn label(&self) -> &str {
        match self {
            PlayDescriptor::Single { label, .. }
            | PlayDescriptor::ThreesomePotato { label, .. }
            | PlayDescriptor::ThreesomeValue { label, .. } => label,
        }
    }
}

pub fn evaluate_selection(hand: &[Card], selected: &[CardId]) -> Option<PlayDescriptor> {
    // The selection is a set; a repeated id resolves once.
    let mut picked: Vec<Card> = Vec::with_capacity(selected.len().min(4));
    for id in selected {
        if picked.iter().any(|c| c.id == *id) {
            continue;
        }
        if let Some(card) = hand.iter().find(|c| c.id == *id) {
            picked.push(*card);
        }
    }

    match picked.len() {
        1 => evaluate_single(picked[0]),
        3 => evaluate_threesome([picked[0], picked[1], picked[2]]),
        _ => None,
    }
}

fn evaluate_single(card: Card) -> Option<PlayDescriptor> {
    if matches!(card.kind, CardKind::Potato | CardKind::Wildcard) {
        return None;
    }
    // Interrupts are only playable from the reaction phase.
    if card.is_interrupt() {
        return None;
    }
    let ends_turn = card.is_alarm();
    let name = names::card_label(&card);
    let label = if ends_turn {
        format!("Play {name} (ends turn)")
    } else {
        format!("Play {name}")
    };
    Some(PlayDescriptor::Single {
        card_id: card.id,
        label,
        ends_turn,
    })
}

fn evaluate_threesome(cards: [Card; 3]) -> Option<PlayDescriptor> {
    let card_ids = [cards[0].id, cards[1].id, cards[2].id];
    let wildcards = cards.iter().filter(|c| c.kind == CardKind::Wildcard).count();
    let potatoes: Vec<&Card> = cards.iter().filter(|c| c.kind == CardKind::Potato).collect();

    if wildcards == 3 {
        return Some(PlayDescriptor::ThreesomePotato {
            card_ids,
            label: format!("Play {}", names::WILDCARD_TRIO),
        });
    }

    if wildcards + potatoes.len() == 3 && wildcards <= 2 && !potatoes.is_empty() {
        let name_index = potatoes[0].decoded().name_index;
        if potatoes.iter().all(|c| c.decoded().name_index == name_index) {
            return Some(PlayDescriptor::ThreesomePotato {
                card_ids,
                label: format!("Play three {}", names::potato_name(name_index)),
            });
        }
        // Mismatched potato names fall through to the value rule.
    }

    if cards.iter().all(|c| c.decoded().value == 3) {
        return Some(PlayDescriptor::ThreesomeValue {
            card_ids,
            label: format!("Play {}", names::VALUE_TRIO),
        });
    }

    None
}
