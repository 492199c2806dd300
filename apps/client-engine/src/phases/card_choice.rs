//! Card-choice handler: one bound choice per server-issued entry, selected
//! by tapping; there is no bar button. Choosing sends immediately and locks
//! the phase locally until the server moves on.

use crate::phases::args::{CardChoice, CardChoiceArgs};
use crate::protocol::actions::ActionRequest;

/// Resolve a tapped token to the request it sends, if the token is bound.
pub fn request_for_token(args: &CardChoiceArgs, token: &str) -> Option<ActionRequest> {
    args.choices.iter().find_map(|choice| match choice {
        CardChoice::Token { token: t, .. } if t.as_str() == token => {
            Some(ActionRequest::PickToken { token: t.clone() })
        }
        _ => None,
    })
}

/// Resolve a tapped face-down position, if it is one of the bound choices.
pub fn request_for_position(args: &CardChoiceArgs, position: u32) -> Option<ActionRequest> {
    args.choices.iter().find_map(|choice| match choice {
        CardChoice::Position { position: p } if *p == position => {
            Some(ActionRequest::PickPosition { position })
        }
        _ => None,
    })
}
