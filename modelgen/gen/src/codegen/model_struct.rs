//! Entity module generation.
//!
//! Renders one [`EntityDescriptor`] into a module holding the model struct
//! and its `BaseModel` implementation. Rendering is a pure function of the
//! descriptor.

use std::collections::HashSet;

use proc_macro2::{Ident, Literal, TokenStream};
use quote::quote;

use super::types::field_type;
use crate::entity::EntityDescriptor;
use crate::errors::GeneratorError;
use crate::fields::FieldSpec;
use crate::naming::parse_ident;

fn ident(name: &str) -> Result<Ident, GeneratorError> {
    parse_ident(name)
        .ok_or_else(|| GeneratorError::CodeGenError(format!("'{name}' is not a valid identifier")))
}

/// Generates the attributes placed on one field.
///
/// `wire_names` holds the wire names of every field in the entity; the
/// identifier is only accepted as an input alias when no other field uses
/// it on the wire.
fn field_attributes(field: &FieldSpec, wire_names: &HashSet<&str>) -> TokenStream {
    let doc = field.description().map(|text| {
        let text = format!(" {text}");
        quote! { #[doc = #text] }
    });

    let rename = field.alias.as_deref().map(|wire| {
        let identifier = field.identifier.as_str();
        if wire_names.contains(identifier) {
            quote! { #[serde(rename = #wire)] }
        } else {
            quote! { #[serde(rename = #wire, alias = #identifier)] }
        }
    });

    let default = field.nullable.then(|| {
        quote! { #[serde(default, skip_serializing_if = "Option::is_none")] }
    });

    quote! {
        #doc
        #rename
        #default
    }
}

/// Generates the model struct for an entity.
///
/// ## Errors
///
/// Returns [`GeneratorError::CodeGenError`] if a name in the descriptor is
/// not a valid identifier.
pub fn generate_model_struct(entity: &EntityDescriptor) -> Result<TokenStream, GeneratorError> {
    let struct_name = ident(&entity.class_name)?;
    let wire_names: HashSet<&str> = entity.fields.iter().map(FieldSpec::wire_name).collect();

    let fields = entity
        .fields
        .iter()
        .map(|field| {
            let name = ident(&field.identifier)?;
            let ty = field_type(field);
            let attrs = field_attributes(field, &wire_names);
            Ok(quote! {
                #attrs
                pub #name: #ty,
            })
        })
        .collect::<Result<Vec<_>, GeneratorError>>()?;

    let doc = format!(" Model for the `{}` schema.", entity.schema_name);
    let allow = entity
        .has_non_snake_case_fields()
        .then(|| quote! { #[allow(non_snake_case)] });

    Ok(quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #allow
        pub struct #struct_name {
            #(#fields)*
        }
    })
}

/// Generates the constraint checks for one field, or nothing.
fn field_checks(field: &FieldSpec) -> Result<TokenStream, GeneratorError> {
    let name = ident(&field.identifier)?;
    let wire = field.wire_name();
    let mut checks = Vec::new();

    if let Some(max) = field.max_length() {
        let max = Literal::u64_unsuffixed(max);
        checks.push(quote! { super::base::check_max_length(#wire, value, #max)?; });
    }
    if let Some(step) = field.multiple_of().filter(|_| field.semantic.is_numeric()) {
        if !step.is_finite() {
            return Err(GeneratorError::CodeGenError(format!(
                "multipleOf for '{wire}' is not a finite number"
            )));
        }
        let step = Literal::f64_unsuffixed(step);
        checks.push(quote! { super::base::check_multiple_of(#wire, value, #step)?; });
    }

    if checks.is_empty() {
        return Ok(TokenStream::new());
    }

    Ok(if field.nullable {
        quote! {
            if let Some(value) = &self.#name {
                #(#checks)*
            }
        }
    } else {
        quote! {
            let value = &self.#name;
            #(#checks)*
        }
    })
}

/// Generates the `BaseModel` implementation for an entity.
///
/// ## Errors
///
/// Returns [`GeneratorError::CodeGenError`] if a name in the descriptor is
/// not a valid identifier or a step constraint is not finite.
pub fn generate_base_model_impl(entity: &EntityDescriptor) -> Result<TokenStream, GeneratorError> {
    let struct_name = ident(&entity.class_name)?;
    let title = entity.schema_name.as_str();
    let table = entity.table_name.as_str();
    let schema_id = match &entity.schema_id {
        Some(id) => quote! { Some(#id) },
        None => quote! { None },
    };

    let checks = entity
        .fields
        .iter()
        .map(field_checks)
        .filter(|checks| !matches!(checks, Ok(tokens) if tokens.is_empty()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(quote! {
        impl super::base::BaseModel for #struct_name {
            const SCHEMA_TITLE: &'static str = #title;
            const SCHEMA_ID: Option<&'static str> = #schema_id;
            const TABLE_NAME: &'static str = #table;

            fn validate(&self) -> Result<(), super::base::ValidationError> {
                #({ #checks })*
                Ok(())
            }
        }
    })
}

/// Generates the complete module for one entity.
///
/// ## Errors
///
/// See [`generate_model_struct`] and [`generate_base_model_impl`].
pub fn generate_entity_module(entity: &EntityDescriptor) -> Result<TokenStream, GeneratorError> {
    let doc = format!(
        " `{}` model generated from the `{}` schema.",
        entity.class_name, entity.schema_name
    );
    let model = generate_model_struct(entity)?;
    let base_impl = generate_base_model_impl(entity)?;

    Ok(quote! {
        #![doc = #doc]

        #model

        #base_impl
    })
}
