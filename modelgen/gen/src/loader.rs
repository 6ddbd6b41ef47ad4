//! Schema source loading.
//!
//! A schema directory either holds one combined `all_schemas.json` object
//! mapping schema names to documents, or one `*.json` file per schema. Raw
//! documents are returned unparsed; structural problems are reported per
//! schema by the batch.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, info};

use modelgen_define::SchemaDocument;

use crate::errors::GeneratorError;

/// File name of the combined schema document.
pub const COMBINED_SCHEMA_FILE: &str = "all_schemas.json";

/// Loads `(schema name, document)` pairs from `dir`.
///
/// The combined file wins when present and keeps its key order. Otherwise
/// individual files are read in file-name order and named by their `title`,
/// falling back to the file stem.
///
/// ## Errors
///
/// Returns an error if the directory is missing, a file cannot be read, or a
/// file is not valid JSON (the combined file must also be a JSON object).
pub fn load_schemas(dir: &Path) -> Result<Vec<(String, Value)>, GeneratorError> {
    if !dir.is_dir() {
        return Err(GeneratorError::SchemaDirNotFound(dir.display().to_string()));
    }

    let combined = dir.join(COMBINED_SCHEMA_FILE);
    if combined.is_file() {
        let schemas = load_combined(&combined)?;
        info!(path = %combined.display(), count = schemas.len(), "Loaded combined schema file");
        return Ok(schemas);
    }

    let schemas = schema_files(dir)?
        .iter()
        .map(|path| load_individual(path))
        .collect::<Result<Vec<_>, _>>()?;
    info!(dir = %dir.display(), count = schemas.len(), "Loaded schema files");
    Ok(schemas)
}

fn read(path: &Path) -> Result<String, GeneratorError> {
    fs::read_to_string(path).map_err(|source| GeneratorError::SchemaRead {
        path: path.display().to_string(),
        source,
    })
}

fn parse_error(path: &Path) -> impl FnOnce(serde_json::Error) -> GeneratorError + '_ {
    move |source| GeneratorError::SchemaParse {
        path: path.display().to_string(),
        source,
    }
}

fn load_combined(path: &Path) -> Result<Vec<(String, Value)>, GeneratorError> {
    let schemas: Map<String, Value> = serde_json::from_str(&read(path)?).map_err(parse_error(path))?;
    Ok(schemas.into_iter().collect())
}

/// Lists `*.json` files in `dir` other than the combined file, sorted by name.
fn schema_files(dir: &Path) -> Result<Vec<PathBuf>, GeneratorError> {
    let read_error = |source| GeneratorError::SchemaRead {
        path: dir.display().to_string(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        let is_json = path.extension().is_some_and(|ext| ext == "json");
        let is_combined = path.file_name().is_some_and(|name| name == COMBINED_SCHEMA_FILE);
        if path.is_file() && is_json && !is_combined {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn load_individual(path: &Path) -> Result<(String, Value), GeneratorError> {
    let value: Value = serde_json::from_str(&read(path)?).map_err(parse_error(path))?;
    let name = match SchemaDocument::title_of(&value) {
        Some(title) => title.to_string(),
        None => path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };
    debug!(path = %path.display(), schema = %name, "Loaded schema file");
    Ok((name, value))
}
