//! Domain layer: card identity and play-legality logic, pure and view-free.

pub mod cards;
pub mod codec;
pub mod names;
pub mod plays;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_cards;
#[cfg(test)]
mod tests_props_plays;

// Re-exports for ergonomics
pub use cards::{Card, CardId, CardKind, DecodedCard};
pub use codec::{decode, encode};
pub use plays::{evaluate_selection, PlayDescriptor};
