//! Defensive readers for loosely-typed payload fields.
//!
//! Numeric fields may arrive as JSON numbers or as numeric text; a field
//! that fails to parse is treated as absent. Nothing in here returns an
//! error; the affected sub-update is simply skipped by the caller.

use serde_json::Value;

use crate::domain::{Card, CardId, CardKind};

pub fn int(payload: &Value, key: &str) -> Option<i64> {
    as_int(payload.get(key)?)
}

pub fn uint(payload: &Value, key: &str) -> Option<u32> {
    int(payload, key).and_then(|n| u32::try_from(n).ok())
}

pub fn string(payload: &Value, key: &str) -> Option<String> {
    payload.get(key)?.as_str().map(str::to_string)
}

pub fn boolean(payload: &Value, key: &str) -> bool {
    payload.get(key).and_then(Value::as_bool).unwrap_or(false)
}

fn as_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn as_uint(value: &Value) -> Option<u32> {
    as_int(value).and_then(|n| u32::try_from(n).ok())
}

/// A card identity from the flat `card_id`/`card_type`/`card_type_arg`
/// triple most notifications use.
pub fn card(payload: &Value) -> Option<Card> {
    let id = uint(payload, "card_id")?;
    let kind = CardKind::from_wire(&string(payload, "card_type")?).ok()?;
    let type_arg = uint(payload, "card_type_arg")?;
    Some(Card::new(id, kind, type_arg))
}

/// A card from a nested `{id, type, type_arg}` object.
pub fn card_entry(value: &Value) -> Option<Card> {
    let id = as_uint(value.get("id")?)?;
    let kind = CardKind::from_wire(value.get("type")?.as_str()?).ok()?;
    let type_arg = as_uint(value.get("type_arg")?)?;
    Some(Card::new(id, kind, type_arg))
}

/// A list of cards; entries that fail to parse are dropped.
pub fn card_list(payload: &Value, key: &str) -> Vec<Card> {
    payload
        .get(key)
        .and_then(Value::as_array)
        .map(|entries| entries.iter().filter_map(card_entry).collect())
        .unwrap_or_default()
}

/// A list of ids; entries that fail to parse are dropped.
pub fn id_list(payload: &Value, key: &str) -> Vec<CardId> {
    payload
        .get(key)
        .and_then(Value::as_array)
        .map(|entries| entries.iter().filter_map(as_uint).collect())
        .unwrap_or_default()
}
