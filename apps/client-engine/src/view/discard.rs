//! Pending/rollback bookkeeping for the discard pile's visible top card.
//!
//! A single-card play is shown on the pile before the server finalizes it,
//! by the actor's own optimistic render or by reconciling the broadcast,
//! whichever lands first. At most one play is pending at a time; a second
//! play arriving before the first resolves supersedes the earlier rollback
//! target (last writer wins).

use crate::domain::{Card, CardId};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending {
    card_id: CardId,
    previous_top: Option<Card>,
}

#[derive(Debug, Default)]
pub struct OptimisticDiscard {
    pending: Option<Pending>,
}

impl OptimisticDiscard {
    /// Show `card` as the discard top ahead of confirmation. Idempotent per
    /// card id: the second observer of the same play must not capture the
    /// already-shown card as its rollback target.
    pub fn show(&mut self, top: &mut Option<Card>, card: Card) {
        if self
            .pending
            .as_ref()
            .is_some_and(|p| p.card_id == card.id)
        {
            return;
        }
        self.pending = Some(Pending {
            card_id: card.id,
            previous_top: *top,
        });
        *top = Some(card);
    }

    /// The play became permanent. Returns true when it was the pending one;
    /// the shown card stays and the rollback target is dropped.
    pub fn confirm(&mut self, card_id: CardId) -> bool {
        if self.pending.as_ref().is_some_and(|p| p.card_id == card_id) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// An interrupt nullified the play: restore the remembered top card.
    /// A cancel for a card that is not pending is a no-op.
    pub fn cancel(&mut self, top: &mut Option<Card>, card_id: CardId) {
        match self.pending.take() {
            Some(pending) if pending.card_id == card_id => *top = pending.previous_top,
            other => self.pending = other,
        }
    }

    /// Forget any pending play without touching the display. Used when the
    /// pile itself goes away (recycled into the deck).
    pub fn reset(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
