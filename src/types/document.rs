//! Raw telemetry document as returned by the SimHub game data API

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key under which newer SimHub versions nest the live game data.
pub const ENVELOPE_KEY: &str = "NewData";

/// One decoded response from the telemetry API.
///
/// The document is deliberately untyped: SimHub changes field names and
/// nesting between versions, so every field is looked up by name at build
/// time instead of being deserialized into a fixed struct. Only the top
/// level must be a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TelemetryDocument {
    fields: Map<String, Value>,
}

impl TelemetryDocument {
    /// Wrap an already-decoded JSON object.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Decode a document from a response body.
    ///
    /// Fails when the body is not JSON or its top level is not an object.
    pub fn from_slice(bytes: &[u8]) -> crate::Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Value stored directly at the root under `key`.
    pub fn root(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The nested envelope object, if present and itself an object.
    pub fn envelope(&self) -> Option<&Map<String, Value>> {
        self.fields.get(ENVELOPE_KEY).and_then(Value::as_object)
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Map<String, Value>> for TelemetryDocument {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

impl TryFrom<Value> for TelemetryDocument {
    type Error = crate::BridgeError;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self::new(fields)),
            other => Err(crate::BridgeError::parse(
                "telemetry document",
                format!("expected a JSON object, found {}", json_kind(&other)),
            )),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
