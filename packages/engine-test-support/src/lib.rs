//! Engine test support utilities
//!
//! This crate provides utilities shared by the engine's unit and integration
//! tests: unified logging initialization and builders for notification-style
//! JSON payloads.

pub mod logging;
pub mod payloads;
