//! Configuration keys and the raw file representation

use serde::Deserialize;
use std::fmt;

/// Group of configuration values; every category carries a path and a namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigCategory {
    /// Root of the application sources
    Base,
    /// Root under which the `Providers` directory lives
    Providers,
    Contracts,
    Implementations,
    /// Declared for completeness; nothing generates criteria yet
    Criteria,
}

impl ConfigCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigCategory::Base => "base",
            ConfigCategory::Providers => "providers",
            ConfigCategory::Contracts => "contracts",
            ConfigCategory::Implementations => "implementations",
            ConfigCategory::Criteria => "criteria",
        }
    }
}

/// Which value of a category is requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigField {
    Path,
    Namespace,
}

impl ConfigField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigField::Path => "path",
            ConfigField::Namespace => "namespace",
        }
    }
}

/// Identifies one required configuration value.
///
/// Its display form is used as the subject of configuration error
/// messages, e.g. `contracts path`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConfigKey {
    pub category: ConfigCategory,
    pub field: ConfigField,
}

impl ConfigKey {
    pub fn new(category: ConfigCategory, field: ConfigField) -> Self {
        Self { category, field }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.category.as_str(), self.field.as_str())
    }
}

/// Raw contents of `repository.toml`.
///
/// Every value is optional here; [`crate::config::ConfigResolver`] decides
/// whether an absent value is an error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    pub base: BaseSection,
    pub namespaces: CategorySection,
    pub paths: CategorySection,
    pub naming: NamingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BaseSection {
    pub path: Option<String>,
    pub namespace: Option<String>,
    pub providers: ProvidersSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProvidersSection {
    pub path: Option<String>,
    pub namespace: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CategorySection {
    pub contracts: Option<String>,
    pub implementations: Option<String>,
    pub criteria: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NamingSection {
    /// Directory names that never count as a subdirectory of the model
    pub reserved: Option<Vec<String>>,
}

impl RawConfig {
    /// Configuration used when the project has no `repository.toml`
    pub fn builtin() -> Self {
        Self {
            base: BaseSection {
                path: Some("app".to_string()),
                namespace: Some("App\\".to_string()),
                providers: ProvidersSection {
                    path: Some("app".to_string()),
                    namespace: Some("App\\".to_string()),
                },
            },
            namespaces: CategorySection {
                contracts: Some("Repositories\\Contracts".to_string()),
                implementations: Some("Repositories\\Implementations".to_string()),
                criteria: Some("Repositories\\Criteria".to_string()),
            },
            paths: CategorySection {
                contracts: Some("Repositories/Contracts".to_string()),
                implementations: Some("Repositories/Implementations".to_string()),
                criteria: Some("Repositories/Criteria".to_string()),
            },
            naming: NamingSection::default(),
        }
    }

    /// Parse TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, crate::config::ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Raw value for a key, without validation
    pub fn value(&self, key: ConfigKey) -> Option<&str> {
        let value = match (key.category, key.field) {
            (ConfigCategory::Base, ConfigField::Path) => &self.base.path,
            (ConfigCategory::Base, ConfigField::Namespace) => &self.base.namespace,
            (ConfigCategory::Providers, ConfigField::Path) => &self.base.providers.path,
            (ConfigCategory::Providers, ConfigField::Namespace) => &self.base.providers.namespace,
            (ConfigCategory::Contracts, ConfigField::Path) => &self.paths.contracts,
            (ConfigCategory::Contracts, ConfigField::Namespace) => &self.namespaces.contracts,
            (ConfigCategory::Implementations, ConfigField::Path) => &self.paths.implementations,
            (ConfigCategory::Implementations, ConfigField::Namespace) => {
                &self.namespaces.implementations
            }
            (ConfigCategory::Criteria, ConfigField::Path) => &self.paths.criteria,
            (ConfigCategory::Criteria, ConfigField::Namespace) => &self.namespaces.criteria,
        };
        value.as_deref()
    }
}
