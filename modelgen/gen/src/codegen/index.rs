//! Group index and top-level manifest generation.

use proc_macro2::TokenStream;
use quote::quote;

use crate::entity::{BASE_EXPORTS, EntityDescriptor};
use crate::errors::GeneratorError;
use crate::naming::{module_ident, parse_ident};

/// Generates a group's `mod.rs`.
///
/// Declares `base` and one module per entity, re-exports the shared base
/// types and every entity type, and lists the exported names in
/// `MODEL_NAMES` (`BaseModel` first, then entities in the given order).
///
/// ## Errors
///
/// Returns [`GeneratorError::CodeGenError`] if an entity's class or file name
/// is not a valid identifier.
pub fn generate_group_index(
    label: &str,
    entities: &[&EntityDescriptor],
) -> Result<TokenStream, GeneratorError> {
    let mut modules = Vec::with_capacity(entities.len());
    let mut exports = Vec::with_capacity(entities.len());

    for entity in entities {
        let module = module_ident(&entity.file_name).ok_or_else(|| {
            GeneratorError::CodeGenError(format!("'{}' is not a valid module name", entity.file_name))
        })?;
        let class = parse_ident(&entity.class_name).ok_or_else(|| {
            GeneratorError::CodeGenError(format!("'{}' is not a valid type name", entity.class_name))
        })?;
        exports.push(quote! { pub use self::#module::#class; });
        modules.push(module);
    }

    let base_exports = BASE_EXPORTS
        .iter()
        .filter_map(|name| parse_ident(name));
    let names = std::iter::once("BaseModel")
        .chain(entities.iter().map(|e| e.class_name.as_str()));
    let doc = format!(" Generated `{label}` models.");

    Ok(quote! {
        #![doc = #doc]

        pub mod base;
        #(pub mod #modules;)*

        pub use self::base::{#(#base_exports),*};
        #(#exports)*

        /// Names exported by this group.
        pub const MODEL_NAMES: &[&str] = &[#(#names),*];
    })
}

/// Generates the top-level `models/mod.rs` declaring every group.
///
/// Labels are emitted in the order given; callers pass them sorted.
///
/// ## Errors
///
/// Returns [`GeneratorError::CodeGenError`] if a label is not a valid
/// module name.
pub fn generate_top_level_manifest<'a>(
    labels: impl IntoIterator<Item = &'a str>,
) -> Result<TokenStream, GeneratorError> {
    let labels: Vec<&str> = labels.into_iter().collect();
    let modules = labels
        .iter()
        .map(|label| {
            module_ident(label).ok_or_else(|| {
                GeneratorError::CodeGenError(format!("'{label}' is not a valid module name"))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(quote! {
        //! Generated model groups.

        #(pub mod #modules;)*

        /// Labels of the generated model groups.
        pub const MODEL_GROUPS: &[&str] = &[#(#labels),*];
    })
}
