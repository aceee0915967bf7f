//! Decoding helpers for loosely shaped API payloads.
//!
//! The platform omits fields, sends `null` for them, or reports counts as
//! strings. None of that should fail a whole response.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `null` reads as the type's default, the same as a missing key.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Active flags default to true when missing or null.
pub fn flag_or_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

pub fn default_true() -> bool {
    true
}

/// Counts arrive as integers, floats, numeric strings or null; all but the
/// first are coerced, anything unusable reads as zero.
pub fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f > 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse::<f64>().map(|f| f.max(0.0) as u64).unwrap_or(0),
        _ => 0,
    })
}

/// Ids as strings, numbers or `{"$oid": ".."}`.
fn id_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(mut map) => match map.remove("$oid") {
            Some(Value::String(s)) => Some(s),
            _ => None,
        },
        _ => None,
    }
}

/// An id field; anything unusable reads as blank.
pub fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(id_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn object_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(id_text(Value::deserialize(deserializer)?).filter(|id| !id.trim().is_empty()))
}

/// Entities whose id may be reported under `_id` instead of `id`.
pub trait Keyed {
    fn id_slot(&mut self) -> &mut String;
}

/// Decoding envelope for API entities: `_id` is read beside the record and
/// only fills the record's id when `id` itself was blank or absent.
#[derive(Debug, Deserialize)]
pub struct WithObjectId<T> {
    #[serde(rename = "_id", default, deserialize_with = "object_id")]
    object_id: Option<String>,
    #[serde(flatten)]
    record: T,
}

impl<T: Keyed> WithObjectId<T> {
    pub fn into_record(self) -> T {
        let mut record = self.record;
        if let Some(object_id) = self.object_id {
            let slot = record.id_slot();
            if slot.trim().is_empty() {
                *slot = object_id;
            }
        }
        record
    }
}

/// Nested entity: `null` or missing becomes the default record.
pub fn keyed_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Keyed + Default + Deserialize<'de>,
{
    Ok(Option::<WithObjectId<T>>::deserialize(deserializer)?
        .map(WithObjectId::into_record)
        .unwrap_or_default())
}
