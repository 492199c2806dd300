//! Ephemeral card-identity cache fed by reveal events.
//!
//! Transfer events omit card identity so observers other than the seats
//! involved learn nothing; a reveal event addressed to this seat arrives
//! first, and the identity is looked up here when the transfer lands.
//! Entries are read once and are not expired before the session ends.

use std::collections::HashMap;

use crate::domain::{Card, CardId};

#[derive(Debug, Default)]
pub struct RevealedCards {
    by_id: HashMap<CardId, Card>,
}

impl RevealedCards {
    pub fn remember(&mut self, card: Card) {
        self.by_id.insert(card.id, card);
    }

    /// Consume a remembered identity.
    pub fn take(&mut self, card_id: CardId) -> Option<Card> {
        self.by_id.remove(&card_id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
