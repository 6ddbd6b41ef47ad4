//! Schema documents.
//!
//! A [`SchemaDocument`] describes one relational-table-shaped entity: its
//! name within the load batch, an optional stable `$id`, the ordered property
//! fragments and the set of required property names.
//!
//! Property fragments are kept as raw JSON so that one malformed fragment can
//! be reported and skipped on its own instead of rejecting the whole document.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::error::{SchemaError, json_kind};

/// One entity's schema document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SchemaDocument {
    /// Schema name, unique within a load batch (e.g. `OpenWorksCommonModel.Basin`).
    pub name: String,
    /// Stable schema identifier from the `$id` key.
    pub id: Option<String>,
    /// Property fragments in document order.
    pub properties: Map<String, Value>,
    /// Names of required properties.
    pub required: BTreeSet<String>,
}

impl SchemaDocument {
    /// Parses a schema document.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - the value is not a JSON object
    /// - `properties` is present but not an object
    /// - `required` is present but not an array of strings
    /// - `$id` is present but not a string
    ///
    /// Individual property fragments are not validated here; each one is
    /// parsed with [`PropertySchema::from_value`](crate::PropertySchema::from_value)
    /// when its field is built.
    pub fn from_value(name: impl Into<String>, value: &Value) -> Result<Self, SchemaError> {
        let object = value.as_object().ok_or(SchemaError::DocumentNotObject {
            found: json_kind(value),
        })?;

        let properties = match object.get("properties") {
            None | Some(Value::Null) => Map::new(),
            Some(Value::Object(props)) => props.clone(),
            Some(other) => {
                return Err(SchemaError::InvalidKey {
                    key: "properties",
                    reason: format!("expected an object, found {}", json_kind(other)),
                });
            }
        };

        let required: BTreeSet<String> = match object.get("required") {
            None | Some(Value::Null) => BTreeSet::new(),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    item.as_str()
                        .map(str::to_string)
                        .ok_or_else(|| SchemaError::InvalidKey {
                            key: "required",
                            reason: format!("expected property names, found {}", json_kind(item)),
                        })
                })
                .collect::<Result<_, _>>()?,
            Some(other) => {
                return Err(SchemaError::InvalidKey {
                    key: "required",
                    reason: format!("expected an array, found {}", json_kind(other)),
                });
            }
        };

        let id = match object.get("$id") {
            None | Some(Value::Null) => None,
            Some(Value::String(id)) => Some(id.clone()),
            Some(other) => {
                return Err(SchemaError::InvalidKey {
                    key: "$id",
                    reason: format!("expected a string, found {}", json_kind(other)),
                });
            }
        };

        Ok(Self {
            name: name.into(),
            id,
            properties,
            required,
        })
    }

    /// Returns the document's `title` when it is a string.
    ///
    /// Used by the schema loader to name documents read from individual files.
    pub fn title_of(value: &Value) -> Option<&str> {
        value.get("title").and_then(Value::as_str)
    }

    /// True when `property` is in the required set.
    pub fn is_required(&self, property: &str) -> bool {
        self.required.contains(property)
    }
}
