//! Validated access to configuration values

use crate::config::{
    ConfigCategory, ConfigError, ConfigField, ConfigKey, DEFAULT_CONFIG_FILE, RawConfig,
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolves required configuration values.
///
/// Lookups never mutate the configuration. Relative paths are resolved
/// against the project root the resolver was created with.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    raw: RawConfig,
    root: PathBuf,
}

impl ConfigResolver {
    pub fn new(raw: RawConfig, root: impl Into<PathBuf>) -> Self {
        Self {
            raw,
            root: root.into(),
        }
    }

    /// Load the configuration of the project at `root`.
    ///
    /// An explicit `config_path` must exist. Without one, `repository.toml`
    /// in the root is used when present, otherwise the built-in defaults.
    pub fn load(root: &Path, config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let candidate = match config_path {
            Some(path) if path.is_relative() => Some(root.join(path)),
            Some(path) => Some(path.to_path_buf()),
            None => {
                let default = root.join(DEFAULT_CONFIG_FILE);
                default.exists().then_some(default)
            }
        };

        let raw = match candidate {
            Some(path) => {
                debug!(path = %path.display(), "Loading configuration file");
                let content =
                    std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
                        path: path.clone(),
                        source,
                    })?;
                RawConfig::from_toml_str(&content)?
            }
            None => {
                debug!("No configuration file found, using built-in defaults");
                RawConfig::builtin()
            }
        };

        Ok(Self::new(raw, root))
    }

    /// Look up `<category>.<field>`, failing when it is absent or empty
    pub fn get(&self, category: ConfigCategory, field: ConfigField) -> Result<&str, ConfigError> {
        let key = ConfigKey::new(category, field);
        match self.raw.value(key) {
            None => Err(ConfigError::MissingConfigurationValue(key)),
            Some(value) if value.trim().is_empty() => {
                Err(ConfigError::InvalidConfigurationValue(key))
            }
            Some(value) => Ok(value),
        }
    }

    /// Filesystem path of a category, anchored at the project root when relative
    pub fn path(&self, category: ConfigCategory) -> Result<PathBuf, ConfigError> {
        let value = PathBuf::from(self.get(category, ConfigField::Path)?.trim());
        if value.is_relative() {
            Ok(self.root.join(value))
        } else {
            Ok(value)
        }
    }

    /// Namespace of a category, exactly as configured
    pub fn namespace(&self, category: ConfigCategory) -> Result<String, ConfigError> {
        Ok(self.get(category, ConfigField::Namespace)?.trim().to_string())
    }

    /// Directory names that are never treated as a model subdirectory
    pub fn reserved_segments(&self) -> Option<&[String]> {
        self.raw.naming.reserved.as_deref()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Check every value the generators need, reporting the first problem
    pub fn validate(&self, categories: &[ConfigCategory]) -> Result<(), ConfigError> {
        for category in categories {
            self.get(*category, ConfigField::Path)?;
            self.get(*category, ConfigField::Namespace)?;
        }
        Ok(())
    }
}
