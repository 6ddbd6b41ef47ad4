//! Modelgen Definition Library
//!
//! This crate provides the input-side types for model generation: the schema
//! documents that describe one table-shaped entity each, the per-property
//! schema fragments inside them, and the model groups that bundle related
//! schemas into one generated package. These definitions are consumed by the
//! `modelgen-gen` crate to produce strongly-typed Rust models.
//!
//! ## Core Types
//!
//! - [`SchemaDocument`] - One entity's schema: name, optional `$id`, ordered properties, required set
//! - [`PropertySchema`] - One property fragment: primitive kind, format hint and constraints
//! - [`PrimitiveKind`] - JSON-Schema `type` values, with a fallback for unrecognized ones
//! - [`FormatHint`] - JSON-Schema `format` values relevant to type mapping
//! - [`ModelGroup`] - A named model family with its default schema directory and name prefixes
//!
//! ## Examples
//!
//! ```
//! use modelgen_define::{PrimitiveKind, PropertySchema, SchemaDocument};
//! use serde_json::json;
//!
//! let doc = SchemaDocument::from_value(
//!     "Group.WidgetHeader",
//!     &json!({
//!         "$id": "#/definitions/Group_WidgetHeader",
//!         "properties": {
//!             "name": { "type": "string", "maxLength": 10 },
//!             "count": { "type": "integer" }
//!         },
//!         "required": ["name"]
//!     }),
//! )
//! .unwrap();
//!
//! assert_eq!(doc.name, "Group.WidgetHeader");
//! assert!(doc.is_required("name"));
//! assert!(!doc.is_required("count"));
//!
//! let names: Vec<_> = doc.properties.keys().map(String::as_str).collect();
//! assert_eq!(names, ["name", "count"]);
//!
//! let count = PropertySchema::from_value(&doc.properties["count"]).unwrap();
//! assert_eq!(count.kind, PrimitiveKind::Integer);
//! ```

pub mod error;
pub mod group;
pub mod prelude;
pub mod property;
pub mod schema;

// Re-export main types at crate root
pub use error::SchemaError;
pub use group::ModelGroup;
pub use property::{FormatHint, PrimitiveKind, PropertySchema};
pub use schema::SchemaDocument;
