//! Error types for the model generator.

use modelgen_define::SchemaError;
use thiserror::Error;

/// Errors that can occur during model generation.
///
/// Per-schema variants (`InvalidSchema`, `InvalidEntityName`, `DuplicateEntity`,
/// `CodeGenError`) are absorbed by the batch and reported as skipped entities.
/// The I/O and configuration variants abort a run.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Schema source directory does not exist
    #[error("Schema directory does not exist: {0}")]
    SchemaDirNotFound(String),

    /// Failed to read a schema file
    #[error("Failed to read schema file '{path}': {source}")]
    SchemaRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a schema file as JSON
    #[error("Failed to parse schema file '{path}': {source}")]
    SchemaParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Schema document has the wrong structure
    #[error("Invalid schema '{schema}': {source}")]
    InvalidSchema {
        schema: String,
        #[source]
        source: SchemaError,
    },

    /// Schema name does not normalize to a usable entity name
    #[error("Schema '{schema}' produces unusable entity name '{name}': {reason}")]
    InvalidEntityName {
        schema: String,
        name: String,
        reason: String,
    },

    /// Two schemas in one group produce the same entity or module name.
    #[error("Schema '{schema}' produces entity '{name}', which was already generated in this group")]
    DuplicateEntity {
        /// The schema that was rejected.
        schema: String,
        /// The class-style or file-style name that collided.
        name: String,
    },

    /// Failed to generate code
    #[error("Code generation failed: {0}")]
    CodeGenError(String),

    /// Failed to write output file
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

/// Reasons a single property cannot become a field.
///
/// These never leave the field builder; the property is skipped with a warning.
#[derive(Debug, Error)]
pub enum FieldError {
    /// The property fragment could not be parsed.
    #[error(transparent)]
    Malformed(#[from] SchemaError),

    /// The property name cannot be turned into a Rust identifier.
    #[error("'{identifier}' is not a valid Rust identifier")]
    InvalidIdentifier { identifier: String },
}
