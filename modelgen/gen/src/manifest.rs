//! Export manifests.
//!
//! A [`GroupManifest`] references the entities generated for one group and
//! renders the group's `mod.rs`. A [`TopLevelManifest`] collects group labels
//! and renders `models/mod.rs`.

use std::collections::BTreeSet;

use proc_macro2::TokenStream;

use crate::codegen::{generate_group_index, generate_top_level_manifest};
use crate::entity::EntityDescriptor;
use crate::errors::GeneratorError;

/// Entities generated for one group, in generation order.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupManifest<'a> {
    pub label: &'a str,
    pub entities: Vec<&'a EntityDescriptor>,
}

impl<'a> GroupManifest<'a> {
    pub fn new(label: &'a str, entities: impl IntoIterator<Item = &'a EntityDescriptor>) -> Self {
        Self {
            label,
            entities: entities.into_iter().collect(),
        }
    }

    /// Exported names: `BaseModel`, then every entity class name.
    pub fn export_names(&self) -> Vec<&str> {
        std::iter::once("BaseModel")
            .chain(self.entities.iter().map(|e| e.class_name.as_str()))
            .collect()
    }

    /// Renders the group `mod.rs`.
    pub fn to_tokens(&self) -> Result<TokenStream, GeneratorError> {
        generate_group_index(self.label, &self.entities)
    }
}

/// All known groups, kept sorted by label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopLevelManifest {
    groups: BTreeSet<String>,
}

impl TopLevelManifest {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            groups: labels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn insert(&mut self, label: impl Into<String>) {
        self.groups.insert(label.into());
    }

    /// Group labels in sorted order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(String::as_str)
    }

    /// Renders `models/mod.rs`.
    pub fn to_tokens(&self) -> Result<TokenStream, GeneratorError> {
        generate_top_level_manifest(self.labels())
    }
}
