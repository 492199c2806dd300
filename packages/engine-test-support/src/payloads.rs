//! Builders for notification-style JSON payloads.
//!
//! Server payloads are loosely typed: numeric fields may arrive as numbers or
//! as numeric text. These helpers make both shapes easy to produce in tests.

use serde_json::{json, Map, Value};

/// Build a JSON object payload from key/value pairs.
pub fn payload(pairs: &[(&str, Value)]) -> Value {
    let mut map = Map::new();
    for (key, value) in pairs {
        map.insert((*key).to_string(), value.clone());
    }
    Value::Object(map)
}

/// A numeric field encoded as a JSON number.
pub fn num(n: i64) -> Value {
    json!(n)
}

/// A numeric field encoded as numeric text, as older table versions send it.
pub fn numstr(n: i64) -> Value {
    Value::String(n.to_string())
}

/// A card identity triple in the flat `card_id`/`card_type`/`card_type_arg`
/// form most notifications use.
pub fn card_fields(id: i64, kind: &str, type_arg: i64) -> Vec<(&'static str, Value)> {
    vec![
        ("card_id", num(id)),
        ("card_type", Value::String(kind.to_string())),
        ("card_type_arg", num(type_arg)),
    ]
}

/// A card entry in the nested `{id, type, type_arg}` form used by lists.
pub fn card_entry(id: i64, kind: &str, type_arg: i64) -> Value {
    json!({ "id": id, "type": kind, "type_arg": type_arg })
}
