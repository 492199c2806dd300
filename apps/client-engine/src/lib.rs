#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod domain;
pub mod engine;
pub mod errors;
pub mod phases;
pub mod protocol;
pub mod reconcile;
pub mod timer;
pub mod view;


// Re-exports for public API
pub use domain::cards::{Card, CardId, CardKind, DecodedCard};
pub use domain::plays::{evaluate_selection, PlayDescriptor};
pub use engine::{GameEngine, UiEffect};
pub use errors::EngineError;
pub use phases::buttons::{ActionBar, ActionButton, ButtonKind};
pub use phases::machine::GamePhase;
pub use protocol::actions::{ActionRequest, ActionSink};
pub use protocol::notify::Notification;
pub use view::model::{PlayerId, SeatView, ViewModel};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::logging::init();
}
