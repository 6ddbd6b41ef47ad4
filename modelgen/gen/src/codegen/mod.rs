//! Code generation modules.
//!
//! Each submodule turns part of the in-memory model into a `TokenStream`:
//!
//! - [`types`] - semantic types to Rust types
//! - [`model_struct`] - entity modules (struct + `BaseModel` impl)
//! - [`base_model`] - the shared per-group `base.rs`
//! - [`index`] - group `mod.rs` and the top-level manifest

pub mod base_model;
pub mod index;
pub mod model_struct;
pub mod types;

pub use base_model::generate_base_module;
pub use index::{generate_group_index, generate_top_level_manifest};
pub use model_struct::{generate_base_model_impl, generate_entity_module, generate_model_struct};
pub use types::{field_type, rust_type};
