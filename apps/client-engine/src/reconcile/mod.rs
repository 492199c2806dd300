//! Notification-driven reconciliation of the view-model.

pub mod engine;


pub use engine::{Applied, Reconciler};
