//! Type and constraint mapping.
//!
//! Turns a [`PropertySchema`] into the semantic type of the generated field,
//! its nullability and the validation constraints attached to it. The
//! decision table is evaluated top to bottom:
//!
//! | `type`    | `format`            | semantic type             |
//! |-----------|---------------------|---------------------------|
//! | `string`  | `date`              | [`SemanticType::Date`]      |
//! | `string`  | `time`, `date-time` | [`SemanticType::Timestamp`] |
//! | `string`  | `binary`            | [`SemanticType::Bytes`]     |
//! | `string`  | other / none        | [`SemanticType::Text`]      |
//! | `number`  | `float`             | [`SemanticType::Float`]     |
//! | `number`  | other / none        | [`SemanticType::Decimal`]   |
//! | `integer` | any                 | [`SemanticType::Integer`]   |
//! | `boolean` | any                 | [`SemanticType::Boolean`]   |
//! | `array`   | any                 | [`SemanticType::Sequence`]  |
//! | `object`  | any                 | [`SemanticType::Mapping`]   |
//! | other     | any                 | [`SemanticType::Any`]       |

use modelgen_define::{FormatHint, PrimitiveKind, PropertySchema};

/// Label placed in front of the storage type hint in field descriptions.
pub const ORIGIN_KIND: &str = "SQL Type";

/// Target-independent type of a generated field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticType {
    /// Calendar date.
    Date,
    /// Date and time of day.
    Timestamp,
    /// Raw byte sequence.
    Bytes,
    /// Text.
    Text,
    /// Binary floating point.
    Float,
    /// Exact decimal number.
    Decimal,
    /// Signed integer.
    Integer,
    /// Boolean.
    Boolean,
    /// Ordered sequence of untyped values.
    Sequence,
    /// Key/value mapping of untyped values.
    Mapping,
    /// Untyped value.
    Any,
}

impl SemanticType {
    /// True for types that can carry a step constraint.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Float | Self::Decimal | Self::Integer)
    }
}

/// A validation constraint attached to a field.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// Maximum text length in characters.
    MaxLength(u64),
    /// Value must be a multiple of this step.
    MultipleOf(f64),
    /// Human-readable description, e.g. `SQL Type: VARCHAR`.
    Description(String),
}

/// The mapped type of one property.
#[derive(Debug, Clone, PartialEq)]
pub struct MappedType {
    /// Resolved semantic type.
    pub semantic: SemanticType,
    /// Nullable with an absent default (the property is not required).
    pub nullable: bool,
    /// Constraints in rendering order: description, max length, step.
    pub constraints: Vec<Constraint>,
}

impl MappedType {
    /// The `maxLength` bound, if attached.
    pub fn max_length(&self) -> Option<u64> {
        find_max_length(&self.constraints)
    }

    /// The `multipleOf` step, if attached.
    pub fn multiple_of(&self) -> Option<f64> {
        find_multiple_of(&self.constraints)
    }

    /// The description, if attached.
    pub fn description(&self) -> Option<&str> {
        find_description(&self.constraints)
    }
}

/// First `MaxLength` bound in `constraints`.
pub fn find_max_length(constraints: &[Constraint]) -> Option<u64> {
    constraints.iter().find_map(|c| match c {
        Constraint::MaxLength(max) => Some(*max),
        _ => None,
    })
}

/// First `MultipleOf` step in `constraints`.
pub fn find_multiple_of(constraints: &[Constraint]) -> Option<f64> {
    constraints.iter().find_map(|c| match c {
        Constraint::MultipleOf(step) => Some(*step),
        _ => None,
    })
}

/// First description in `constraints`.
pub fn find_description(constraints: &[Constraint]) -> Option<&str> {
    constraints.iter().find_map(|c| match c {
        Constraint::Description(text) => Some(text.as_str()),
        _ => None,
    })
}

/// Maps a property to its semantic type, nullability and constraints.
///
/// ## Examples
///
/// ```
/// use modelgen_define::{PrimitiveKind, PropertySchema};
/// use modelgen_gen::mapping::{map_type, Constraint, SemanticType};
///
/// let mut name = PropertySchema::of_kind(PrimitiveKind::String);
/// name.max_length = Some(10);
///
/// let mapped = map_type(&name, true);
/// assert_eq!(mapped.semantic, SemanticType::Text);
/// assert!(!mapped.nullable);
/// assert_eq!(mapped.constraints, vec![Constraint::MaxLength(10)]);
///
/// let count = map_type(&PropertySchema::of_kind(PrimitiveKind::Integer), false);
/// assert_eq!(count.semantic, SemanticType::Integer);
/// assert!(count.nullable);
/// ```
pub fn map_type(property: &PropertySchema, is_required: bool) -> MappedType {
    let semantic = resolve_semantic_type(property);
    MappedType {
        semantic,
        nullable: !is_required,
        constraints: derive_constraints(property, semantic),
    }
}

/// Applies the decision table.
pub fn resolve_semantic_type(property: &PropertySchema) -> SemanticType {
    match (&property.kind, property.format.as_ref()) {
        (PrimitiveKind::String, Some(FormatHint::Date)) => SemanticType::Date,
        (PrimitiveKind::String, Some(FormatHint::Time | FormatHint::DateTime)) => {
            SemanticType::Timestamp
        }
        (PrimitiveKind::String, Some(FormatHint::Binary)) => SemanticType::Bytes,
        (PrimitiveKind::String, _) => SemanticType::Text,
        (PrimitiveKind::Number, Some(FormatHint::Float)) => SemanticType::Float,
        (PrimitiveKind::Number, _) => SemanticType::Decimal,
        (PrimitiveKind::Integer, _) => SemanticType::Integer,
        (PrimitiveKind::Boolean, _) => SemanticType::Boolean,
        (PrimitiveKind::Array, _) => SemanticType::Sequence,
        (PrimitiveKind::Object, _) => SemanticType::Mapping,
        (PrimitiveKind::Other(_), _) => SemanticType::Any,
    }
}

/// Derives constraints for a property already resolved to `semantic`.
///
/// Zero or empty values attach nothing.
pub fn derive_constraints(property: &PropertySchema, semantic: SemanticType) -> Vec<Constraint> {
    let mut constraints = Vec::new();

    if let Some(hint) = property.sql_type.as_deref().filter(|hint| !hint.is_empty()) {
        constraints.push(Constraint::Description(format!("{ORIGIN_KIND}: {hint}")));
    }

    // Temporal and binary strings resolve to non-text types, so this also
    // excludes date/time formats.
    if semantic == SemanticType::Text
        && let Some(max) = property.max_length.filter(|max| *max > 0)
    {
        constraints.push(Constraint::MaxLength(max));
    }

    if property.kind.is_numeric()
        && let Some(step) = property.multiple_of.filter(|step| *step != 0.0)
    {
        constraints.push(Constraint::MultipleOf(step));
    }

    constraints
}
