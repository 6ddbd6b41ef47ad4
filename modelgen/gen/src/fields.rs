//! Field spec building.
//!
//! Combines the identifier normalizer and the type mapper to turn each
//! property of a [`SchemaDocument`] into a [`FieldSpec`], in document order.

use std::collections::HashSet;

use modelgen_define::{PropertySchema, SchemaDocument};
use tracing::{debug, warn};

use crate::errors::FieldError;
use crate::mapping::{
    Constraint, SemanticType, find_description, find_max_length, find_multiple_of, map_type,
};
use crate::naming::{field_name_to_identifier, parse_ident};

/// One generated field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    /// Identifier-safe field name, unique within its entity.
    pub identifier: String,
    /// Original property name, set only when it differs from `identifier`.
    pub alias: Option<String>,
    /// Resolved semantic type.
    pub semantic: SemanticType,
    /// Optional with an absent default.
    pub nullable: bool,
    /// Attached constraints.
    pub constraints: Vec<Constraint>,
}

impl FieldSpec {
    /// Name used on the wire: the alias when present, the identifier otherwise.
    pub fn wire_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.identifier)
    }

    /// Whether the rendered field carries an explicit absent default.
    pub fn has_default(&self) -> bool {
        self.nullable
    }

    /// The `maxLength` bound rendered as a `validate()` check, if any.
    pub fn max_length(&self) -> Option<u64> {
        find_max_length(&self.constraints)
    }

    /// The `multipleOf` step rendered as a `validate()` check, if any.
    pub fn multiple_of(&self) -> Option<f64> {
        find_multiple_of(&self.constraints)
    }

    /// The description rendered as the field's doc comment, if any.
    pub fn description(&self) -> Option<&str> {
        find_description(&self.constraints)
    }
}

/// Builds the spec for a single property.
///
/// ## Errors
///
/// Returns [`FieldError::InvalidIdentifier`] when the property name cannot
/// become a Rust identifier even after the reserved-word suffix.
pub fn build_field_spec(
    field_name: &str,
    property: &PropertySchema,
    is_required: bool,
) -> Result<FieldSpec, FieldError> {
    let identifier = field_name_to_identifier(field_name);
    if parse_ident(&identifier).is_none() {
        return Err(FieldError::InvalidIdentifier { identifier });
    }

    let mapped = map_type(property, is_required);
    Ok(FieldSpec {
        alias: (identifier != field_name).then(|| field_name.to_string()),
        identifier,
        semantic: mapped.semantic,
        nullable: mapped.nullable,
        constraints: mapped.constraints,
    })
}

/// Builds field specs for every property of `document`, in document order.
///
/// Properties that cannot be mapped are skipped with a warning. When two
/// properties resolve to the same identifier, the later one is renamed with
/// the first free numeric suffix (`_2`, `_3`, ...) and keeps its original
/// name as the wire alias.
pub fn build_field_specs(document: &SchemaDocument) -> Vec<FieldSpec> {
    let mut used = HashSet::new();
    let mut fields = Vec::with_capacity(document.properties.len());

    for (field_name, fragment) in &document.properties {
        let property = match PropertySchema::from_value(fragment) {
            Ok(property) => property,
            Err(err) => {
                let err = FieldError::from(err);
                warn!(schema = %document.name, field = %field_name, error = %err, "Skipping malformed property");
                continue;
            }
        };

        let mut field =
            match build_field_spec(field_name, &property, document.is_required(field_name)) {
                Ok(field) => field,
                Err(err) => {
                    warn!(schema = %document.name, field = %field_name, error = %err, "Skipping property");
                    continue;
                }
            };

        if used.contains(&field.identifier) {
            let mut n = 2;
            while used.contains(&format!("{}_{n}", field.identifier)) {
                n += 1;
            }
            field.identifier = format!("{}_{n}", field.identifier);
            field.alias = Some(field_name.clone());
        }

        debug!(
            schema = %document.name,
            field = %field_name,
            identifier = %field.identifier,
            semantic = ?field.semantic,
            nullable = field.nullable,
            "Mapped property"
        );
        used.insert(field.identifier.clone());
        fields.push(field);
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tracing_test::traced_test;

    fn document(value: serde_json::Value) -> SchemaDocument {
        SchemaDocument::from_value("Group.Test", &value).unwrap()
    }

    #[test]
    fn required_field_has_no_default() {
        let doc = document(json!({
            "properties": {
                "a": { "type": "string" },
                "b": { "type": "string" }
            },
            "required": ["a"]
        }));
        let fields = build_field_specs(&doc);

        assert_eq!(fields[0].identifier, "a");
        assert!(!fields[0].nullable);
        assert!(!fields[0].has_default());

        assert_eq!(fields[1].identifier, "b");
        assert!(fields[1].nullable);
        assert!(fields[1].has_default());
    }

    #[test]
    fn reserved_word_gets_suffix_and_alias() {
        let doc = document(json!({ "properties": { "type": { "type": "string" } } }));
        let fields = build_field_specs(&doc);

        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].identifier, "type_field");
        assert_eq!(fields[0].alias.as_deref(), Some("type"));
        assert_eq!(fields[0].wire_name(), "type");
    }

    #[test]
    fn plain_names_have_no_alias() {
        let doc = document(json!({ "properties": { "basin_name": { "type": "string" } } }));
        let fields = build_field_specs(&doc);
        assert_eq!(fields[0].alias, None);
        assert_eq!(fields[0].wire_name(), "basin_name");
    }

    #[test]
    fn keeps_document_order() {
        let doc = document(json!({
            "properties": {
                "zeta": { "type": "integer" },
                "alpha": { "type": "boolean" },
                "mid": { "type": "number" }
            }
        }));
        let names: Vec<_> = build_field_specs(&doc)
            .into_iter()
            .map(|f| f.identifier)
            .collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    #[traced_test]
    fn malformed_property_is_skipped_with_warning() {
        let doc = document(json!({
            "properties": {
                "good": { "type": "integer" },
                "broken": "not an object",
                "also_good": { "type": "string" }
            }
        }));
        let fields = build_field_specs(&doc);

        let names: Vec<_> = fields.iter().map(|f| f.identifier.as_str()).collect();
        assert_eq!(names, ["good", "also_good"]);
        assert!(logs_contain("Skipping malformed property"));
        assert!(logs_contain("broken"));
    }

    #[test]
    #[traced_test]
    fn type_array_is_malformed() {
        let doc = document(json!({
            "properties": { "nullable_text": { "type": ["string", "null"] } }
        }));
        assert!(build_field_specs(&doc).is_empty());
        assert!(logs_contain("nullable_text"));
    }

    #[test]
    #[traced_test]
    fn invalid_identifier_is_skipped_with_warning() {
        let doc = document(json!({
            "properties": {
                "has space": { "type": "string" },
                "1st": { "type": "string" },
                "ok": { "type": "string" }
            }
        }));
        let fields = build_field_specs(&doc);

        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].identifier, "ok");
        assert!(logs_contain("is not a valid Rust identifier"));
    }

    #[test]
    fn colliding_identifiers_get_numeric_suffix() {
        let doc = document(json!({
            "properties": {
                "type": { "type": "string" },
                "type_field": { "type": "integer" }
            }
        }));
        let fields = build_field_specs(&doc);

        assert_eq!(fields[0].identifier, "type_field");
        assert_eq!(fields[0].alias.as_deref(), Some("type"));
        assert_eq!(fields[1].identifier, "type_field_2");
        assert_eq!(fields[1].alias.as_deref(), Some("type_field"));
    }

    #[test]
    fn collision_suffix_skips_taken_names() {
        let doc = document(json!({
            "properties": {
                "type_field_2": {},
                "type": {},
                "type_field": {}
            }
        }));
        let identifiers: Vec<_> = build_field_specs(&doc)
            .into_iter()
            .map(|f| f.identifier)
            .collect();
        assert_eq!(identifiers, ["type_field_2", "type_field", "type_field_3"]);
    }

    #[test]
    fn missing_type_defaults_to_text() {
        let doc = document(json!({ "properties": { "remark": { "maxLength": 255 } } }));
        let fields = build_field_specs(&doc);
        assert_eq!(fields[0].semantic, SemanticType::Text);
        assert_eq!(fields[0].max_length(), Some(255));
    }

    #[test]
    fn carries_description_and_step() {
        let doc = document(json!({
            "properties": {
                "depth": { "type": "number", "multipleOf": 0.5, "sqlType": "NUMBER" }
            },
            "required": ["depth"]
        }));
        let field = &build_field_specs(&doc)[0];
        assert_eq!(field.semantic, SemanticType::Decimal);
        assert_eq!(field.multiple_of(), Some(0.5));
        assert_eq!(field.description(), Some("SQL Type: NUMBER"));
        assert!(!field.nullable);
    }

    #[test]
    fn build_field_spec_rejects_non_identifiers() {
        let property = PropertySchema::default();
        let err = build_field_spec("bad-name", &property, false).unwrap_err();
        assert!(matches!(err, FieldError::InvalidIdentifier { ref identifier } if identifier == "bad-name"));
    }
}
