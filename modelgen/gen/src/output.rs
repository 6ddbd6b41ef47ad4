//! Output assembly and file writing for generated models.
//!
//! This module handles the final phase of generation: validating and
//! formatting token streams, and laying the results out on disk.
//!
//! ## Output Structure
//!
//! ```text
//! <output>/models/
//! ├── mod.rs            # Top-level manifest: one module per group
//! └── common/
//!     ├── mod.rs        # Group index and export list
//!     ├── base.rs       # Shared BaseModel trait (written once)
//!     └── basin.rs      # One module per entity
//! ```
//!
//! ## Safety Guarantees
//!
//! - **Validation**: All generated code is validated with `syn` before writing
//! - **Formatting**: Output is formatted with `prettyplease` for consistent style
//! - **Atomic writes**: Uses temp file + rename pattern to prevent partial writes
//! - **Stable output**: No timestamps, so regenerating unchanged schemas
//!   produces identical files

use std::fs;
use std::path::{Path, PathBuf};

use proc_macro2::TokenStream;
use tracing::{debug, info, warn};

use crate::batch::{BatchResult, generate_batch};
use crate::codegen::generate_base_module;
use crate::config::GeneratorConfig;
use crate::errors::GeneratorError;
use crate::loader::load_schemas;
use crate::manifest::TopLevelManifest;
use crate::naming::module_ident;

/// Banner placed at the top of every generated file.
pub const GENERATED_BANNER: &str =
    "// This code was automatically generated by modelgen-gen. Do not edit manually.";

/// Validates generated code by parsing it with syn.
///
/// ## Errors
///
/// Returns `GeneratorError::CodeGenError` if the tokens don't form valid Rust syntax.
pub fn validate_code(tokens: &TokenStream) -> Result<syn::File, GeneratorError> {
    syn::parse2(tokens.clone())
        .map_err(|e| GeneratorError::CodeGenError(format!("Generated code is invalid: {}", e)))
}

/// Formats a parsed file with prettyplease and prepends the banner.
pub fn format_code(file: &syn::File) -> String {
    let formatted = prettyplease::unparse(file);
    format!("{GENERATED_BANNER}\n\n{formatted}")
}

/// Validates and formats a token stream in one step.
///
/// ## Errors
///
/// See [`validate_code`].
pub fn render_source(tokens: &TokenStream) -> Result<String, GeneratorError> {
    Ok(format_code(&validate_code(tokens)?))
}

/// Writes content to a file atomically using a temp file + rename pattern.
///
/// Creates parent directories if they don't exist.
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` if any filesystem step fails.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::WriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| GeneratorError::WriteError {
        path: temp_path.display().to_string(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| GeneratorError::WriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// Writes `content` only if `path` does not exist yet.
///
/// Returns whether the file was written.
pub fn write_if_missing(path: &Path, content: &str) -> Result<bool, GeneratorError> {
    if path.exists() {
        debug!(path = %path.display(), "Keeping existing file");
        return Ok(false);
    }
    write_atomic(path, content)?;
    Ok(true)
}

/// Lists group directories under `models_dir`.
///
/// Hidden (`.`) and private (`__`) directories are ignored, as are names
/// that cannot be module names. A missing directory yields no groups.
///
/// ## Errors
///
/// Returns `GeneratorError::SchemaRead` if the directory cannot be listed.
pub fn discover_groups(models_dir: &Path) -> Result<Vec<String>, GeneratorError> {
    if !models_dir.is_dir() {
        return Ok(Vec::new());
    }

    let read_error = |source| GeneratorError::SchemaRead {
        path: models_dir.display().to_string(),
        source,
    };

    let mut groups = Vec::new();
    for entry in fs::read_dir(models_dir).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        if !path.is_dir() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with('.') || name.starts_with("__") {
            continue;
        }
        if module_ident(name).is_none() {
            warn!(dir = %path.display(), "Ignoring directory that is not a valid module name");
            continue;
        }
        groups.push(name.to_string());
    }
    groups.sort();
    Ok(groups)
}

/// Outcome of generating one group.
#[derive(Debug)]
pub struct GroupReport {
    pub group: String,
    pub batch: BatchResult,
    /// Files written, in write order. Empty for dry runs.
    pub written: Vec<PathBuf>,
}

impl GroupReport {
    pub fn attempted(&self) -> usize {
        self.batch.attempted()
    }

    pub fn succeeded(&self) -> usize {
        self.batch.succeeded()
    }
}

/// Sink for generated files: either the filesystem or stdout.
struct Emitter {
    dry_run: bool,
    written: Vec<PathBuf>,
}

impl Emitter {
    fn emit(&mut self, path: &Path, content: &str) -> Result<(), GeneratorError> {
        if self.dry_run {
            println!("=== {} ===\n{}\n", path.display(), content);
            return Ok(());
        }
        write_atomic(path, content)?;
        info!(path = %path.display(), "Wrote file");
        self.written.push(path.to_path_buf());
        Ok(())
    }

    fn emit_if_missing(&mut self, path: &Path, content: &str) -> Result<(), GeneratorError> {
        if self.dry_run {
            if !path.exists() {
                println!("=== {} ===\n{}\n", path.display(), content);
            }
            return Ok(());
        }
        if write_if_missing(path, content)? {
            info!(path = %path.display(), "Wrote file");
            self.written.push(path.to_path_buf());
        }
        Ok(())
    }
}

/// Generates one group end to end.
///
/// 1. Writes `base.rs` into the group directory when missing
/// 2. Loads the group's schemas
/// 3. Generates every entity, skipping failures
/// 4. Writes entity modules, the group index and the top-level manifest
///
/// In dry-run mode every file is printed to stdout under a `=== <path> ===`
/// header instead of being written.
///
/// ## Errors
///
/// Returns an error if schemas cannot be loaded, a file cannot be written,
/// or an index does not render. Per-schema failures are reported in the
/// returned [`GroupReport`] instead.
///
/// ## Examples
///
/// ```no_run
/// use modelgen_define::ModelGroup;
/// use modelgen_gen::config::GeneratorConfig;
/// use modelgen_gen::output::generate_group;
///
/// let config = GeneratorConfig::new(ModelGroup::common(), "generated");
/// let report = generate_group(&config).unwrap();
/// println!("{}/{}", report.succeeded(), report.attempted());
/// ```
pub fn generate_group(config: &GeneratorConfig) -> Result<GroupReport, GeneratorError> {
    let label = config.group.label.as_str();
    let group_dir = config.group_dir();
    let models_dir = config.models_dir();
    let mut emitter = Emitter {
        dry_run: config.dry_run,
        written: Vec::new(),
    };

    info!(group = label, schemas = %config.schemas_dir.display(), "Generating group");

    let base = render_source(&generate_base_module())?;
    emitter.emit_if_missing(&group_dir.join("base.rs"), &base)?;

    let schemas = load_schemas(&config.schemas_dir)?;
    let batch = generate_batch(&schemas, &config.group);

    for entity in &batch.entities {
        let path = group_dir.join(format!("{}.rs", entity.descriptor.file_name));
        emitter.emit(&path, &entity.source)?;
    }

    let index = render_source(&batch.manifest(label).to_tokens()?)?;
    emitter.emit(&group_dir.join("mod.rs"), &index)?;

    let mut top_level = TopLevelManifest::new(discover_groups(&models_dir)?);
    top_level.insert(label);
    let manifest = render_source(&top_level.to_tokens()?)?;
    emitter.emit(&models_dir.join("mod.rs"), &manifest)?;

    if batch.is_complete() {
        info!(group = label, generated = batch.succeeded(), "Group complete");
    } else {
        warn!(
            group = label,
            generated = batch.succeeded(),
            attempted = batch.attempted(),
            "Group generated with skipped schemas"
        );
    }

    Ok(GroupReport {
        group: label.to_string(),
        batch,
        written: emitter.written,
    })
}
