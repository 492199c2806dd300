//! The event-application table.
//!
//! Every notification kind has one fixed effect on the view-model, applied
//! synchronously and to completion before the next event is looked at.
//! Presentation (animation) is the shell's problem; nothing here waits.

use tracing::debug;

use crate::domain::{Card, CardId};
use crate::protocol::notify::Notification;
use crate::view::discard::OptimisticDiscard;
use crate::view::model::{PlayerId, ViewModel};
use crate::view::revealed::RevealedCards;

/// What a handled notification asks of the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Applied {
    /// The hand or another action-relevant input changed; the active phase
    /// handler should recompute its buttons.
    pub refresh_actions: bool,
    /// The local seat was marked as done reacting; any countdown must die.
    pub local_eligibility_lost: bool,
}

#[derive(Debug, Default)]
pub struct Reconciler {
    pub revealed: RevealedCards,
    pub discard: OptimisticDiscard,
}

impl Reconciler {
    pub fn apply(&mut self, view: &mut ViewModel, note: &Notification) -> Applied {
        match note {
            Notification::HandReplaced { cards } => {
                view.hand = cards.clone();
                view.resync_local_count();
                refresh()
            }
            Notification::CardDrawn {
                player_id,
                card_id,
                card,
                deck_count,
            } => {
                // Explicit deck count always wins over a local decrement.
                match deck_count {
                    Some(count) => view.set_deck_count(*count),
                    None => view.decrement_deck(),
                }
                self.add_to_hand(view, *player_id, *card_id, *card)
            }
            Notification::DeckCount { count } => {
                view.set_deck_count(*count);
                Applied::default()
            }
            Notification::DeckShuffled { deck_count } => {
                if let Some(count) = deck_count {
                    view.set_deck_count(*count);
                }
                Applied::default()
            }
            Notification::CardPlayed { player_id, card } => {
                self.discard.show(&mut view.discard_top, *card);
                // Local removal may already have happened optimistically;
                // resyncing instead of decrementing keeps the count honest
                // whichever observer ran first.
                if view.is_local(*player_id) {
                    view.remove_from_hand(card.id);
                    view.resync_local_count();
                } else {
                    view.adjust_hand_count(*player_id, -1);
                }
                refresh()
            }
            Notification::ThreesomePlayed {
                player_id,
                card_ids,
            } => {
                if view.is_local(*player_id) {
                    for id in card_ids {
                        view.remove_from_hand(*id);
                    }
                    view.resync_local_count();
                } else {
                    view.adjust_hand_count(*player_id, -(card_ids.len() as i64));
                }
                refresh()
            }
            Notification::CardDiscarded { card_id, card } => {
                if !self.discard.confirm(*card_id) {
                    // Not the pending play; show it directly when we can.
                    if let Some(card) = card {
                        view.discard_top = Some(*card);
                    }
                }
                Applied::default()
            }
            Notification::PlayCancelled { card_id } => {
                self.discard.cancel(&mut view.discard_top, *card_id);
                refresh()
            }
            Notification::CardRemoved { player_id, card_id } => {
                if view.is_local(*player_id) {
                    view.remove_from_hand(*card_id);
                    view.resync_local_count();
                } else {
                    view.adjust_hand_count(*player_id, -1);
                }
                refresh()
            }
            Notification::CardGained {
                player_id,
                card_id,
                card,
            } => self.add_to_hand(view, *player_id, Some(*card_id), *card),
            Notification::HandCount { player_id, count } => {
                view.set_hand_count(*player_id, *count);
                Applied::default()
            }
            Notification::CardStolen {
                effect,
                player_id,
                target_player_id,
                card_id,
                card,
            } => {
                debug!(?effect, source = player_id, target = target_player_id, "card transfer");
                if view.is_local(*target_player_id) {
                    view.remove_from_hand(*card_id);
                    view.resync_local_count();
                } else {
                    view.adjust_hand_count(*target_player_id, -1);
                }
                self.add_to_hand(view, *player_id, Some(*card_id), *card)
            }
            Notification::CardRevealed { card } => {
                self.revealed.remember(*card);
                Applied::default()
            }
            Notification::HandRevealed { cards, .. } => {
                for card in cards {
                    self.revealed.remember(*card);
                }
                Applied::default()
            }
            Notification::GoldenDelta { player_id, delta } => {
                view.apply_golden_delta(*player_id, *delta);
                Applied::default()
            }
            Notification::GoldenCount { player_id, count } => {
                view.set_golden_count(*player_id, *count);
                Applied::default()
            }
            Notification::PileRecycled { deck_count } => {
                // The pile is gone; any pending rollback target with it.
                view.discard_top = None;
                self.discard.reset();
                if let Some(count) = deck_count {
                    view.set_deck_count(*count);
                }
                Applied::default()
            }
            Notification::ReactionPassed { player_id } => {
                if view.is_local(*player_id) {
                    Applied {
                        refresh_actions: true,
                        local_eligibility_lost: true,
                    }
                } else {
                    Applied::default()
                }
            }
            Notification::AlarmTriggered { player_id } => {
                debug!(player = player_id, "alarm cue");
                Applied::default()
            }
            Notification::TurnEnded { player_id } => {
                debug!(player = player_id, "turn ended cue");
                Applied::default()
            }
            Notification::Message { text } => {
                debug!(message = %text, "table message");
                Applied::default()
            }
        }
    }

    /// Shared add-a-card path: inline identity first, then the reveal
    /// cache. If neither resolves, the card is counted but not shown
    /// (an accepted information gap, not an error).
    fn add_to_hand(
        &mut self,
        view: &mut ViewModel,
        player_id: PlayerId,
        card_id: Option<CardId>,
        inline: Option<Card>,
    ) -> Applied {
        if !view.is_local(player_id) {
            view.adjust_hand_count(player_id, 1);
            return Applied::default();
        }
        let resolved = inline.or_else(|| card_id.and_then(|id| self.revealed.take(id)));
        match resolved {
            Some(card) => {
                view.hand.push(card);
                view.resync_local_count();
            }
            None => {
                // Accepted information gap: the card is counted but cannot
                // be displayed.
                debug!(card_id, "gained card with no resolvable identity");
                view.adjust_hand_count(player_id, 1);
            }
        }
        refresh()
    }
}

fn refresh() -> Applied {
    Applied {
        refresh_actions: true,
        local_eligibility_lost: false,
    }
}
