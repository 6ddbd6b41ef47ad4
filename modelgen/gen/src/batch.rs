//! Batch generation.
//!
//! Runs the per-schema pipeline (parse, describe, render) over a loaded batch.
//! A failure in one schema is logged and recorded; the batch continues.

use std::collections::HashSet;

use modelgen_define::{ModelGroup, SchemaDocument};
use serde_json::Value;
use tracing::{info, warn};

use crate::codegen::generate_entity_module;
use crate::entity::{EntityDescriptor, build_entity_descriptor};
use crate::errors::GeneratorError;
use crate::manifest::GroupManifest;
use crate::output::render_source;

/// A successfully generated entity.
#[derive(Debug, Clone)]
pub struct GeneratedEntity {
    pub descriptor: EntityDescriptor,
    /// Formatted Rust source for the entity module.
    pub source: String,
}

/// A schema that was skipped.
#[derive(Debug)]
pub struct SkippedSchema {
    pub schema: String,
    pub error: GeneratorError,
}

/// Outcome of one batch.
#[derive(Debug, Default)]
pub struct BatchResult {
    /// Generated entities, in load order.
    pub entities: Vec<GeneratedEntity>,
    /// Skipped schemas, in load order.
    pub failures: Vec<SkippedSchema>,
}

impl BatchResult {
    /// Number of schemas processed.
    pub fn attempted(&self) -> usize {
        self.entities.len() + self.failures.len()
    }

    /// Number of entities generated.
    pub fn succeeded(&self) -> usize {
        self.entities.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &EntityDescriptor> {
        self.entities.iter().map(|e| &e.descriptor)
    }

    /// Manifest over the generated entities.
    pub fn manifest<'a>(&'a self, label: &'a str) -> GroupManifest<'a> {
        GroupManifest::new(label, self.descriptors())
    }
}

/// Generates every schema in `schemas`, in order.
///
/// ## Examples
///
/// ```
/// use modelgen_define::ModelGroup;
/// use modelgen_gen::batch::generate_batch;
/// use serde_json::json;
///
/// let schemas = vec![
///     ("Group.Basin".to_string(), json!({ "properties": { "name": { "type": "string" } } })),
///     ("Group.Broken".to_string(), json!("not a schema")),
/// ];
///
/// let result = generate_batch(&schemas, &ModelGroup::common());
/// assert_eq!(result.attempted(), 2);
/// assert_eq!(result.succeeded(), 1);
/// assert_eq!(result.failures[0].schema, "Group.Broken");
/// ```
pub fn generate_batch(schemas: &[(String, Value)], group: &ModelGroup) -> BatchResult {
    let mut result = BatchResult::default();
    let mut class_names = HashSet::new();
    let mut file_names = HashSet::new();

    for (name, value) in schemas {
        let generated = generate_entity(name, value, group).and_then(|entity| {
            let descriptor = &entity.descriptor;
            for (seen, taken) in [
                (&class_names, &descriptor.class_name),
                (&file_names, &descriptor.file_name),
            ] {
                if seen.contains(taken) {
                    return Err(GeneratorError::DuplicateEntity {
                        schema: name.clone(),
                        name: taken.clone(),
                    });
                }
            }
            Ok(entity)
        });

        match generated {
            Ok(entity) => {
                info!(
                    schema = %name,
                    class = %entity.descriptor.class_name,
                    "Generated model"
                );
                class_names.insert(entity.descriptor.class_name.clone());
                file_names.insert(entity.descriptor.file_name.clone());
                result.entities.push(entity);
            }
            Err(error) => {
                warn!(schema = %name, error = %error, "Skipping schema");
                result.failures.push(SkippedSchema {
                    schema: name.clone(),
                    error,
                });
            }
        }
    }

    result
}

/// Parses, describes and renders one schema.
///
/// ## Errors
///
/// Returns an error if the document is malformed, its name is unusable, or
/// the rendered code does not parse.
pub fn generate_entity(
    name: &str,
    value: &Value,
    group: &ModelGroup,
) -> Result<GeneratedEntity, GeneratorError> {
    let document =
        SchemaDocument::from_value(name, value).map_err(|source| GeneratorError::InvalidSchema {
            schema: name.to_string(),
            source,
        })?;
    let descriptor = build_entity_descriptor(&document, group)?;
    let source = render_source(&generate_entity_module(&descriptor)?)?;
    Ok(GeneratedEntity { descriptor, source })
}
