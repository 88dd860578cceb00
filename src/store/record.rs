//! Product record representation
//!
//! A record is a JSON object with one store-managed field, `id`. Every other
//! field is opaque payload. Field order is preserved exactly as stored so the
//! products file diffs cleanly between writes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Store-assigned record identifier
pub type RecordId = u64;

/// Caller-supplied fields for create and update
pub type Payload = Map<String, Value>;

/// Name of the store-managed identifier field
pub const ID_FIELD: &str = "id";

/// A single stored product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Builds a new record with `id` as its first field followed by the
    /// payload. A caller-supplied `id` in the payload is discarded.
    pub fn with_id(id: RecordId, payload: Payload) -> Self {
        let mut fields = Map::with_capacity(payload.len() + 1);
        fields.insert(ID_FIELD.to_string(), Value::from(id));
        for (key, value) in payload {
            if key != ID_FIELD {
                fields.insert(key, value);
            }
        }
        Self(fields)
    }

    /// Returns the record id, if the stored `id` is a non-negative integral
    /// number. `2` and `2.0` are the same id.
    pub fn id(&self) -> Option<RecordId> {
        self.0.get(ID_FIELD).and_then(as_record_id)
    }

    /// Returns a single field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Returns all fields in stored order.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Overlays `patch` onto this record.
    ///
    /// Existing fields keep their position, new fields are appended, and the
    /// `id` field is never replaced.
    pub fn apply_patch(&mut self, patch: Payload) {
        for (key, value) in patch {
            if key != ID_FIELD {
                self.0.insert(key, value);
            }
        }
    }
}

/// JSON numbers carry no integer/float distinction, so an integral float
/// within `u64` range is accepted as an id.
fn as_record_id(value: &Value) -> Option<RecordId> {
    if let Some(id) = value.as_u64() {
        return Some(id);
    }
    let n = value.as_f64()?;
    // u64::MAX as f64 rounds up to 2^64, which is itself out of range
    if n.is_finite() && n.fract() == 0.0 && n >= 0.0 && n < u64::MAX as f64 {
        Some(n as RecordId)
    } else {
        None
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Object(record.0)
    }
}
