//! Error types for the scoring boundary.
//!
//! Candidate-side noise never raises: the profile extractor substitutes
//! defaults instead (see `profile::extract`). Errors are reserved for a
//! structurally-invalid requirement profile and for assistant replies with
//! no salvageable JSON.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringInputError {
    /// A field that must hold a JSON object held something else.
    #[error("`{field}` is not an object, got {got}")]
    NotAnObject {
        field: &'static str,
        got: &'static str,
    },

    /// A requirement list field was present but not an array.
    #[error("`{0}` is not an array")]
    NotAnArray(&'static str),

    /// A requirement list entry was not an object.
    #[error("entry {1} of `{0}` is not an object")]
    EntryNotAnObject(&'static str, usize),

    /// A numeric field held a non-numeric value.
    #[error("`{0}` is not a number")]
    NotANumber(String),

    /// No `{` ... `}` block could be located in the reply text.
    #[error("no JSON object found in reply text")]
    NoJsonPayload,

    /// A located JSON block failed to parse.
    #[error("malformed JSON payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

/// JSON type label used in error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
