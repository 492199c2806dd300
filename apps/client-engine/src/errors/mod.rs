//! Error handling for the client engine.

pub mod engine_error;

pub use engine_error::EngineError;
