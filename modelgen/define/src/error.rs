//! Error types for schema documents and model groups.

use thiserror::Error;

/// Structural problems found while reading schema documents or group settings.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The schema document itself is not a JSON object.
    #[error("schema document must be a JSON object, found {found}")]
    DocumentNotObject {
        /// JSON kind that was found instead.
        found: &'static str,
    },

    /// A top-level key of the schema document has the wrong shape.
    #[error("invalid '{key}' in schema document: {reason}")]
    InvalidKey {
        /// The offending key (e.g. `properties`, `required`, `$id`).
        key: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// A property fragment is not a JSON object.
    #[error("property schema must be a JSON object, found {found}")]
    PropertyNotObject {
        /// JSON kind that was found instead.
        found: &'static str,
    },

    /// A property fragment is an object but one of its keys has the wrong shape.
    #[error("malformed property schema: {0}")]
    MalformedProperty(#[source] serde_json::Error),

    /// A model group label cannot be used as a module name.
    #[error("invalid model group label '{label}': {reason}")]
    InvalidGroupLabel {
        /// The rejected label.
        label: String,
        /// Why it was rejected.
        reason: &'static str,
    },
}

/// Names the JSON kind of a value for error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
