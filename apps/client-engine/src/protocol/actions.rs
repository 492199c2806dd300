//! Outbound action requests.
//!
//! Submission is fire-and-forget: the transport accepts a request
//! asynchronously, no response is expected, and the server re-validates
//! everything it receives. There is no client-side retry.

use serde::{Deserialize, Serialize};

use crate::domain::{CardId, CardKind};
use crate::view::model::PlayerId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionRequest {
    PlayCard { card_id: CardId },
    PlayThreesome { card_ids: Vec<CardId> },
    EndTurn,
    DiscardAndDraw,
    SkipReaction,
    ChooseTargets { player_ids: Vec<PlayerId> },
    DiscardCards { card_ids: Vec<CardId> },
    PickToken { token: String },
    PickPosition { position: u32 },
    NameCard { kind: CardKind, name_index: u32 },
}

/// The seam to the transport. Implemented by the shell; the engine never
/// waits on a submission.
pub trait ActionSink {
    fn submit(&mut self, request: ActionRequest);
}
