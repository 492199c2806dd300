//! The shared mutable view-model: one per game session, mutated by
//! reconciliation and read by phase handlers.
//!
//! Only the local seat owns Card objects; every other seat is tracked as
//! counts. That boundary is what keeps hidden information hidden.

use std::collections::BTreeMap;

use crate::domain::{Card, CardId};

pub type PlayerId = u32;

/// What the local client knows about one seat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeatView {
    pub hand_count: u32,
    pub golden_potatoes: u32,
    /// Generic scoreboard mirror of `golden_potatoes`.
    pub score: u32,
}

#[derive(Debug, Clone)]
pub struct ViewModel {
    pub local_seat: PlayerId,
    /// Whether the server currently lists the local seat as able to act.
    pub local_active: bool,
    /// The local hand; ordered as the server last presented it.
    pub hand: Vec<Card>,
    pub deck_count: u32,
    pub discard_top: Option<Card>,
    pub seats: BTreeMap<PlayerId, SeatView>,
}

impl ViewModel {
    pub fn new(local_seat: PlayerId) -> Self {
        let mut seats = BTreeMap::new();
        seats.insert(local_seat, SeatView::default());
        Self {
            local_seat,
            local_active: false,
            hand: Vec::new(),
            deck_count: 0,
            discard_top: None,
            seats,
        }
    }

    pub fn seat(&self, player: PlayerId) -> Option<&SeatView> {
        self.seats.get(&player)
    }

    pub fn seat_mut(&mut self, player: PlayerId) -> &mut SeatView {
        self.seats.entry(player).or_default()
    }

    pub fn is_local(&self, player: PlayerId) -> bool {
        player == self.local_seat
    }

    pub fn hand_card(&self, card_id: CardId) -> Option<&Card> {
        self.hand.iter().find(|c| c.id == card_id)
    }

    /// Drop a card from the local hand by id. Absence is tolerated: the
    /// event may race a local optimistic removal.
    pub fn remove_from_hand(&mut self, card_id: CardId) -> Option<Card> {
        let pos = self.hand.iter().position(|c| c.id == card_id)?;
        Some(self.hand.remove(pos))
    }

    /// Make the local seat's count agree with the hand it owns.
    pub fn resync_local_count(&mut self) {
        let count = self.hand.len() as u32;
        let local = self.local_seat;
        self.seat_mut(local).hand_count = count;
    }

    pub fn adjust_hand_count(&mut self, player: PlayerId, delta: i64) {
        let seat = self.seat_mut(player);
        seat.hand_count = clamped(seat.hand_count, delta);
    }

    pub fn set_hand_count(&mut self, player: PlayerId, count: u32) {
        self.seat_mut(player).hand_count = count;
    }

    /// Apply a golden-potato delta, clamped at zero, and mirror the result
    /// into the generic score field.
    pub fn apply_golden_delta(&mut self, player: PlayerId, delta: i64) {
        let seat = self.seat_mut(player);
        seat.golden_potatoes = clamped(seat.golden_potatoes, delta);
        seat.score = seat.golden_potatoes;
    }

    pub fn set_golden_count(&mut self, player: PlayerId, count: u32) {
        let seat = self.seat_mut(player);
        seat.golden_potatoes = count;
        seat.score = count;
    }

    pub fn set_deck_count(&mut self, count: u32) {
        self.deck_count = count;
    }

    pub fn decrement_deck(&mut self) {
        self.deck_count = self.deck_count.saturating_sub(1);
    }
}

fn clamped(current: u32, delta: i64) -> u32 {
    let next = i64::from(current) + delta;
    next.clamp(0, i64::from(u32::MAX)) as u32
}
