//! Caller-visible engine errors.
//!
//! Almost everything wire-side is tolerate-and-skip: malformed fields are
//! treated as absent, unknown notifications and phase names are ignored. The
//! variants here cover the few interaction paths where the shell gets a
//! direct answer. All of it is courtesy suppression; the server re-validates
//! every action regardless of what the client believed was legal.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("no phase is active")]
    NoActivePhase,
    #[error("action does not belong to the current phase")]
    PhaseMismatch,
    #[error("local seat is not eligible to act")]
    NotEligible,
    #[error("current selection does not form a legal play")]
    NoLegalPlay,
    #[error("choice is incomplete: {detail}")]
    IncompleteChoice { detail: &'static str },
    #[error("unknown card type: {0}")]
    UnknownCardKind(String),
}
