//! Target directory, file and namespace computation

use crate::config::{ConfigCategory, ConfigError, ConfigField, ConfigResolver};
use crate::core::utils::join_namespace;
use crate::generation::{ArtifactKind, EntityReference, SOURCE_EXTENSION};
use std::path::PathBuf;

/// Configuration values a target is planned from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSettings {
    pub kind: ArtifactKind,
    pub base_path: PathBuf,
    pub base_namespace: String,
    /// Category directory below `base_path`, e.g. `Repositories/Contracts`
    pub path_config: String,
    /// Category namespace below `base_namespace`, e.g. `Repositories\Contracts`
    pub namespace_config: String,
}

impl TargetSettings {
    /// Gather the four required values of `kind`, failing on the first bad one
    pub fn resolve(kind: ArtifactKind, config: &ConfigResolver) -> Result<Self, ConfigError> {
        let category = kind.config_category();
        Ok(Self {
            kind,
            base_path: config.path(ConfigCategory::Base)?,
            base_namespace: config.namespace(ConfigCategory::Base)?,
            path_config: config
                .get(category, ConfigField::Path)?
                .trim()
                .to_string(),
            namespace_config: config.namespace(category)?,
        })
    }
}

/// Where and under which name a class is generated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationTarget {
    pub kind: ArtifactKind,
    pub class_name: String,
    pub subdirectory: Option<String>,
    pub directory: PathBuf,
    pub file_path: PathBuf,
    /// Namespace of the class, without the class name
    pub namespace: String,
}

impl GenerationTarget {
    pub fn fully_qualified_name(&self) -> String {
        join_namespace(&[self.namespace.as_str(), self.class_name.as_str()])
    }
}

pub struct PathPlanner;

impl PathPlanner {
    pub fn plan(settings: &TargetSettings, reference: &EntityReference) -> GenerationTarget {
        let class_name = format!(
            "{}{}",
            reference.entity_name,
            settings.kind.class_name_suffix()
        );

        let mut directory = settings.base_path.join(&settings.path_config);
        if let Some(subdirectory) = &reference.subdirectory {
            directory.push(subdirectory);
        }

        let file_path = directory.join(format!("{class_name}.{SOURCE_EXTENSION}"));

        let namespace = match &reference.subdirectory {
            Some(subdirectory) => join_namespace(&[
                settings.base_namespace.as_str(),
                settings.namespace_config.as_str(),
                subdirectory.as_str(),
            ]),
            None => join_namespace(&[
                settings.base_namespace.as_str(),
                settings.namespace_config.as_str(),
            ]),
        };

        GenerationTarget {
            kind: settings.kind,
            class_name,
            subdirectory: reference.subdirectory.clone(),
            directory,
            file_path,
            namespace,
        }
    }
}
