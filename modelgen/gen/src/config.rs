//! Generator configuration.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use modelgen_define::ModelGroup;

use crate::errors::GeneratorError;

/// Which built-in groups to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum GroupSelector {
    /// OpenWorks common models
    #[default]
    Common,
    /// Native models
    Native,
    /// Every built-in group
    All,
}

impl GroupSelector {
    /// The groups this selector covers, in generation order.
    pub fn groups(self) -> Vec<ModelGroup> {
        match self {
            Self::Common => vec![ModelGroup::common()],
            Self::Native => vec![ModelGroup::native()],
            Self::All => ModelGroup::presets(),
        }
    }
}

/// Settings for generating one group.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub group: ModelGroup,
    /// Directory schemas are loaded from.
    pub schemas_dir: PathBuf,
    /// Root of the generated tree; models go under `<output_dir>/models`.
    pub output_dir: PathBuf,
    /// Print generated text instead of writing it.
    pub dry_run: bool,
}

impl GeneratorConfig {
    /// Creates a config reading from the group's default schema directory.
    pub fn new(group: ModelGroup, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            schemas_dir: group.default_schemas_dir.clone(),
            group,
            output_dir: output_dir.into(),
            dry_run: false,
        }
    }

    pub fn with_schemas_dir(mut self, schemas_dir: impl Into<PathBuf>) -> Self {
        self.schemas_dir = schemas_dir.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Builds one config per selected group.
    ///
    /// ## Errors
    ///
    /// Returns [`GeneratorError::ConfigError`] when a schema directory override
    /// is combined with more than one group.
    pub fn for_selection(
        selector: GroupSelector,
        schemas_dir: Option<&Path>,
        output_dir: &Path,
        dry_run: bool,
    ) -> Result<Vec<Self>, GeneratorError> {
        let groups = selector.groups();
        if schemas_dir.is_some() && groups.len() > 1 {
            return Err(GeneratorError::ConfigError(
                "--schemas-dir can only be used with a single group".to_string(),
            ));
        }

        Ok(groups
            .into_iter()
            .map(|group| {
                let config = Self::new(group, output_dir).with_dry_run(dry_run);
                match schemas_dir {
                    Some(dir) => config.with_schemas_dir(dir),
                    None => config,
                }
            })
            .collect())
    }

    /// `<output_dir>/models`.
    pub fn models_dir(&self) -> PathBuf {
        self.output_dir.join("models")
    }

    /// `<output_dir>/models/<group>`.
    pub fn group_dir(&self) -> PathBuf {
        self.models_dir().join(&self.group.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_groups() {
        assert_eq!(GroupSelector::Common.groups(), [ModelGroup::common()]);
        assert_eq!(GroupSelector::Native.groups(), [ModelGroup::native()]);
        assert_eq!(GroupSelector::All.groups(), ModelGroup::presets());
    }

    #[test]
    fn default_schema_dir_comes_from_group() {
        let config = GeneratorConfig::new(ModelGroup::native(), "out");
        assert_eq!(config.schemas_dir, PathBuf::from("native-model-json-schemas"));
        assert_eq!(config.group_dir(), PathBuf::from("out/models/native"));
        assert!(!config.dry_run);
    }

    #[test]
    fn schema_dir_override_for_single_group() {
        let configs = GeneratorConfig::for_selection(
            GroupSelector::Common,
            Some(Path::new("schemas")),
            Path::new("generated"),
            true,
        )
        .unwrap();
        assert_eq!(configs.len(), 1);
        assert_eq!(configs[0].schemas_dir, PathBuf::from("schemas"));
        assert!(configs[0].dry_run);
    }

    #[test]
    fn schema_dir_override_rejected_for_all() {
        let err = GeneratorConfig::for_selection(
            GroupSelector::All,
            Some(Path::new("schemas")),
            Path::new("generated"),
            false,
        )
        .unwrap_err();
        assert!(matches!(err, GeneratorError::ConfigError(_)));
    }

    #[test]
    fn all_without_override_uses_defaults() {
        let configs =
            GeneratorConfig::for_selection(GroupSelector::All, None, Path::new("generated"), false)
                .unwrap();
        let dirs: Vec<_> = configs.iter().map(|c| c.schemas_dir.clone()).collect();
        assert_eq!(
            dirs,
            [
                PathBuf::from("common-model-json-schemas"),
                PathBuf::from("native-model-json-schemas")
            ]
        );
    }

    #[test]
    fn default_selector_is_common() {
        assert_eq!(GroupSelector::default(), GroupSelector::Common);
    }
}
