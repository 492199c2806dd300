//! Display-name catalog for card identities.
//!
//! Keys are stable English identifiers; localized text lives in the
//! rendering shell.

use crate::domain::cards::{Card, CardKind};

/// Fixed label for the all-wildcard threesome.
pub const WILDCARD_TRIO: &str = "Wildcard Trio";

/// Fixed label for a threesome of three value-3 cards.
pub const VALUE_TRIO: &str = "Full Cellar";

pub const GOLDEN_POTATO: &str = "Golden Potato";
pub const WILDCARD: &str = "Wildcard";

pub fn potato_name(name_index: u32) -> &'static str {
    match name_index {
        1 => "Russet",
        2 => "Yukon Gold",
        3 => "Fingerling",
        4 => "Maris Piper",
        5 => "Desiree",
        6 => "Kerr's Pink",
        _ => "Potato",
    }
}

pub fn action_name(name_index: u32) -> &'static str {
    match name_index {
        1 => "Not So Fast!",
        2 => "Cellar Door",
        3 => "Raid",
        4 => "Pickpocket",
        5 => "Trade",
        6 => "Gleaning",
        7 => "Second Helping",
        8 => "Compost",
        _ => "Action",
    }
}

pub fn card_label(card: &Card) -> &'static str {
    match card.kind {
        CardKind::Potato => potato_name(card.decoded().name_index),
        CardKind::Wildcard => WILDCARD,
        CardKind::Action => action_name(card.decoded().name_index),
        CardKind::GoldenPotato => GOLDEN_POTATO,
    }
}
