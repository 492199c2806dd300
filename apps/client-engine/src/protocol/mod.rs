//! Wire contracts: inbound notifications, outbound action requests, and the
//! defensive field readers both share.

pub mod actions;
pub mod fields;
pub mod notify;

#[cfg(test)]
mod tests_notify;

pub use actions::{ActionRequest, ActionSink};
pub use notify::{Notification, StealEffect};
