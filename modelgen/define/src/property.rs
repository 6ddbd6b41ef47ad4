//! Property schema fragments.
//!
//! A [`PropertySchema`] is the parsed form of one entry under a schema
//! document's `properties` key. Only the keys that drive type mapping are
//! read; everything else in the fragment is ignored.

use serde::Deserialize;
use strum::EnumString;

use crate::error::{SchemaError, json_kind};

/// JSON-Schema primitive `type` values.
///
/// Unrecognized type names are kept in [`PrimitiveKind::Other`] rather than
/// rejected, so that callers can fall back to an untyped value.
///
/// ## Examples
///
/// ```
/// use modelgen_define::PrimitiveKind;
///
/// assert_eq!(PrimitiveKind::from("integer".to_string()), PrimitiveKind::Integer);
/// assert_eq!(
///     PrimitiveKind::from("geometry".to_string()),
///     PrimitiveKind::Other("geometry".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, EnumString, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(from = "String")]
pub enum PrimitiveKind {
    #[default]
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
    #[strum(default)]
    Other(String),
}

impl PrimitiveKind {
    /// Returns the JSON-Schema spelling of this kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
            Self::Other(name) => name,
        }
    }

    /// True for `number` and `integer`.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Number | Self::Integer)
    }
}

impl From<String> for PrimitiveKind {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(kind) => kind,
            Err(_) => Self::Other(value),
        }
    }
}

/// JSON-Schema `format` hints that influence type mapping.
#[derive(Debug, Clone, PartialEq, Eq, EnumString, Deserialize)]
#[serde(from = "String")]
pub enum FormatHint {
    #[strum(serialize = "date")]
    Date,
    #[strum(serialize = "time")]
    Time,
    #[strum(serialize = "date-time")]
    DateTime,
    #[strum(serialize = "binary")]
    Binary,
    #[strum(serialize = "float")]
    Float,
    #[strum(default)]
    Other(String),
}

impl From<String> for FormatHint {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(format) => format,
            Err(_) => Self::Other(value),
        }
    }
}

/// One property's schema fragment.
///
/// ## Parsing Rules
///
/// - The fragment must be a JSON object.
/// - `type` defaults to `string` when absent and must be a string when present.
/// - `format` and `sqlType` must be strings, `maxLength` a non-negative integer,
///   `multipleOf` a number.
///
/// ## Examples
///
/// ```
/// use modelgen_define::{FormatHint, PrimitiveKind, PropertySchema};
/// use serde_json::json;
///
/// let prop = PropertySchema::from_value(&json!({
///     "type": "string",
///     "format": "date-time",
///     "sqlType": "TIMESTAMP"
/// }))
/// .unwrap();
///
/// assert_eq!(prop.kind, PrimitiveKind::String);
/// assert_eq!(prop.format, Some(FormatHint::DateTime));
/// assert_eq!(prop.sql_type.as_deref(), Some("TIMESTAMP"));
///
/// assert!(PropertySchema::from_value(&json!("string")).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySchema {
    /// Primitive kind from the `type` key.
    #[serde(rename = "type", default)]
    pub kind: PrimitiveKind,
    /// Format hint from the `format` key.
    #[serde(default)]
    pub format: Option<FormatHint>,
    /// Maximum text length from the `maxLength` key.
    #[serde(default)]
    pub max_length: Option<u64>,
    /// Numeric step from the `multipleOf` key.
    #[serde(default)]
    pub multiple_of: Option<f64>,
    /// Storage column type hint from the `sqlType` key.
    #[serde(default)]
    pub sql_type: Option<String>,
}

impl PropertySchema {
    /// Parses a property fragment.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, SchemaError> {
        if !value.is_object() {
            return Err(SchemaError::PropertyNotObject {
                found: json_kind(value),
            });
        }
        Self::deserialize(value).map_err(SchemaError::MalformedProperty)
    }

    /// Creates a fragment of the given kind with no format or constraints.
    pub fn of_kind(kind: PrimitiveKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_type_defaults_to_string() {
        let prop = PropertySchema::from_value(&json!({ "maxLength": 12 })).unwrap();
        assert_eq!(prop.kind, PrimitiveKind::String);
        assert_eq!(prop.max_length, Some(12));
    }

    #[test]
    fn unknown_type_is_kept_as_other() {
        let prop = PropertySchema::from_value(&json!({ "type": "geometry" })).unwrap();
        assert_eq!(prop.kind, PrimitiveKind::Other("geometry".to_string()));
        assert_eq!(prop.kind.as_str(), "geometry");
    }

    #[test]
    fn type_names_are_case_sensitive() {
        let prop = PropertySchema::from_value(&json!({ "type": "String" })).unwrap();
        assert_eq!(prop.kind, PrimitiveKind::Other("String".to_string()));
    }

    #[test]
    fn parses_all_recognized_formats() {
        let cases = [
            ("date", FormatHint::Date),
            ("time", FormatHint::Time),
            ("date-time", FormatHint::DateTime),
            ("binary", FormatHint::Binary),
            ("float", FormatHint::Float),
            ("uuid", FormatHint::Other("uuid".to_string())),
        ];
        for (raw, expected) in cases {
            let prop = PropertySchema::from_value(&json!({ "format": raw })).unwrap();
            assert_eq!(prop.format, Some(expected), "format {raw}");
        }
    }

    #[test]
    fn parses_numeric_constraints() {
        let prop = PropertySchema::from_value(&json!({
            "type": "number",
            "multipleOf": 0.01,
            "sqlType": "NUMERIC"
        }))
        .unwrap();
        assert_eq!(prop.kind, PrimitiveKind::Number);
        assert_eq!(prop.multiple_of, Some(0.01));
        assert_eq!(prop.sql_type.as_deref(), Some("NUMERIC"));
    }

    #[test]
    fn ignores_unrelated_keys() {
        let prop = PropertySchema::from_value(&json!({
            "type": "boolean",
            "title": "Flag",
            "examples": [true]
        }))
        .unwrap();
        assert_eq!(prop, PropertySchema::of_kind(PrimitiveKind::Boolean));
    }

    #[test]
    fn rejects_non_object_fragment() {
        let err = PropertySchema::from_value(&json!(true)).unwrap_err();
        assert!(matches!(err, SchemaError::PropertyNotObject { found: "a boolean" }));
    }

    #[test]
    fn rejects_type_arrays() {
        let err = PropertySchema::from_value(&json!({ "type": ["string", "null"] })).unwrap_err();
        assert!(matches!(err, SchemaError::MalformedProperty(_)));
    }

    #[test]
    fn rejects_negative_max_length() {
        let err = PropertySchema::from_value(&json!({ "maxLength": -1 })).unwrap_err();
        assert!(matches!(err, SchemaError::MalformedProperty(_)));
    }
}
