//! Model generator library.
//!
//! This crate turns table-shaped JSON schema documents (parsed with
//! `modelgen-define`) into strongly-typed Rust models. For each model group
//! it produces:
//!
//! - One module per schema holding a `serde` struct and its `BaseModel` impl
//! - A shared `base.rs` with the `BaseModel` trait and validation helpers
//! - A group `mod.rs` re-exporting every model
//! - A top-level `models/mod.rs` declaring every group
//!
//! ## Modules
//!
//! - [`naming`] - Identifier normalization (schema, class, file and field names)
//! - [`mapping`] - Schema type/format to semantic type and constraints
//! - [`fields`] - Per-property field specs
//! - [`entity`] - Entity descriptors
//! - [`codegen`] - Token generation for entities, the base module and indexes
//! - [`manifest`] - Group and top-level export manifests
//! - [`batch`] - Batch generation with per-schema failure isolation
//! - [`loader`] - Schema directory loading
//! - [`config`] - Generator configuration
//! - [`output`] - Validation, formatting and file writing
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```
//! use modelgen_define::ModelGroup;
//! use modelgen_gen::batch::generate_batch;
//! use serde_json::json;
//!
//! let schemas = vec![(
//!     "Group.WidgetHeader".to_string(),
//!     json!({
//!         "properties": {
//!             "name": { "type": "string", "maxLength": 10 },
//!             "count": { "type": "integer" }
//!         },
//!         "required": ["name"]
//!     }),
//! )];
//!
//! let result = generate_batch(&schemas, &ModelGroup::common());
//! let source = &result.entities[0].source;
//! assert!(source.contains("pub struct WidgetHeader"));
//! assert!(source.contains("pub count: Option<i64>"));
//! ```
//!
//! ## Generated Code Structure
//!
//! ```text
//! #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
//! pub struct WidgetHeader {
//!     pub name: String,
//!     #[serde(default, skip_serializing_if = "Option::is_none")]
//!     pub count: Option<i64>,
//! }
//!
//! impl super::base::BaseModel for WidgetHeader {
//!     const SCHEMA_TITLE: &'static str = "Group.WidgetHeader";
//!     const SCHEMA_ID: Option<&'static str> = None;
//!     const TABLE_NAME: &'static str = "Group_WidgetHeader";
//!
//!     fn validate(&self) -> Result<(), super::base::ValidationError> { ... }
//! }
//! ```

pub mod batch;
pub mod codegen;
pub mod config;
pub mod entity;
pub mod errors;
pub mod fields;
pub mod loader;
pub mod manifest;
pub mod mapping;
pub mod naming;
pub mod output;
