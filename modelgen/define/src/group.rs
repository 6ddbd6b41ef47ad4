//! Model groups.
//!
//! A model group is a named family of schema documents that are generated
//! together into one package directory and share one export manifest.
//! Each group knows where its schemas live by default and which name
//! prefixes mark its schema names.

use std::path::PathBuf;

use crate::error::SchemaError;

/// A named model family.
///
/// ## Examples
///
/// ```
/// use modelgen_define::ModelGroup;
///
/// let native = ModelGroup::native();
/// assert_eq!(native.strip_prefixes("NativeModel_Native_Well"), "Well");
///
/// let custom = ModelGroup::new("reference", "ref-schemas", ["Ref_"]).unwrap();
/// assert_eq!(custom.strip_prefixes("Ref_Currency"), "Currency");
///
/// assert!(ModelGroup::new("Not A Module", "x", Vec::<String>::new()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelGroup {
    /// Group label; also the generated package directory and module name.
    pub label: String,
    /// Directory the group's schema documents are read from by default.
    pub default_schemas_dir: PathBuf,
    /// Name prefixes removed, in order, from undotted schema names.
    pub prefixes: Vec<String>,
}

impl ModelGroup {
    /// Label of the OpenWorks common model family.
    pub const COMMON: &'static str = "common";
    /// Label of the native model family.
    pub const NATIVE: &'static str = "native";

    /// Creates a group after checking that the label is a usable module name.
    ///
    /// ## Errors
    ///
    /// Returns [`SchemaError::InvalidGroupLabel`] unless the label is
    /// non-empty, starts with a lowercase ASCII letter and contains only
    /// lowercase ASCII letters, digits and underscores.
    pub fn new<I, S>(
        label: impl Into<String>,
        default_schemas_dir: impl Into<PathBuf>,
        prefixes: I,
    ) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let label = label.into();
        validate_label(&label)?;
        Ok(Self {
            label,
            default_schemas_dir: default_schemas_dir.into(),
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        })
    }

    /// The OpenWorks common model family.
    pub fn common() -> Self {
        Self {
            label: Self::COMMON.to_string(),
            default_schemas_dir: PathBuf::from("common-model-json-schemas"),
            prefixes: vec!["OpenWorksCommonModel_".to_string()],
        }
    }

    /// The native model family.
    pub fn native() -> Self {
        Self {
            label: Self::NATIVE.to_string(),
            default_schemas_dir: PathBuf::from("native-model-json-schemas"),
            prefixes: vec!["NativeModel_".to_string(), "Native_".to_string()],
        }
    }

    /// All built-in groups, in generation order.
    pub fn presets() -> Vec<Self> {
        vec![Self::common(), Self::native()]
    }

    /// Removes this group's prefixes from the start of `name`, in order.
    pub fn strip_prefixes<'a>(&self, name: &'a str) -> &'a str {
        self.prefixes
            .iter()
            .fold(name, |rest, prefix| rest.strip_prefix(prefix.as_str()).unwrap_or(rest))
    }
}

fn validate_label(label: &str) -> Result<(), SchemaError> {
    let invalid = |reason| SchemaError::InvalidGroupLabel {
        label: label.to_string(),
        reason,
    };

    let mut chars = label.chars();
    match chars.next() {
        None => return Err(invalid("label is empty")),
        Some(first) if !first.is_ascii_lowercase() => {
            return Err(invalid("label must start with a lowercase ASCII letter"));
        }
        Some(_) => {}
    }
    if !chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_') {
        return Err(invalid(
            "label may only contain lowercase ASCII letters, digits and underscores",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_strips_openworks_prefix() {
        let group = ModelGroup::common();
        assert_eq!(group.strip_prefixes("OpenWorksCommonModel_Basin"), "Basin");
        assert_eq!(group.strip_prefixes("Basin"), "Basin");
    }

    #[test]
    fn native_strips_both_prefixes_in_order() {
        let group = ModelGroup::native();
        assert_eq!(group.strip_prefixes("NativeModel_Project"), "Project");
        assert_eq!(group.strip_prefixes("Native_Project"), "Project");
        assert_eq!(group.strip_prefixes("NativeModel_Native_Project"), "Project");
    }

    #[test]
    fn prefixes_only_match_at_start() {
        let group = ModelGroup::native();
        assert_eq!(group.strip_prefixes("Well_Native_Data"), "Well_Native_Data");
    }

    #[test]
    fn presets_have_valid_labels() {
        for group in ModelGroup::presets() {
            assert!(validate_label(&group.label).is_ok(), "{}", group.label);
        }
    }

    #[test]
    fn rejects_bad_labels() {
        for label in ["", "Common", "9lives", "has-dash", "has space"] {
            let result = ModelGroup::new(label, "dir", Vec::<String>::new());
            assert!(
                matches!(result, Err(SchemaError::InvalidGroupLabel { .. })),
                "label {label:?} should be rejected"
            );
        }
    }

    #[test]
    fn accepts_snake_case_labels() {
        let group = ModelGroup::new("well_logs2", "logs", ["Log_"]).unwrap();
        assert_eq!(group.prefixes, ["Log_"]);
    }
}
