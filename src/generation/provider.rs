//! Registration of repository bindings in the service provider
//!
//! The provider keeps its bindings in an array literal:
//!
//! ```php
//! protected $classes = [
//!         'App\Repositories\Contracts\PostRepositoryInterface' => 'App\Repositories\Implementations\PostRepository',
//! ];
//! ```
//!
//! New entries are spliced in directly after the first `[` that ends a line.
//! A provider without such a line is rejected rather than edited blindly.

use crate::config::{ConfigCategory, ConfigResolver};
use crate::core::utils::join_namespace;
use crate::generation::{
    Filesystem, GenerationError, ReplacementMap, SOURCE_EXTENSION, Stub, TemplateEngine,
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Class name of the generated provider
pub const DEFAULT_PROVIDER_NAME: &str = "RepositoryServiceProvider";

/// Directory (and namespace segment) holding service providers
pub const PROVIDERS_DIRECTORY: &str = "Providers";

/// Indentation of an inserted binding line
const ENTRY_INDENT: &str = "        ";

static ARRAY_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(\r?\n)").unwrap());

/// Format one binding line, without its line break
pub fn binding_entry(interface: &str, implementation: &str) -> String {
    format!("{ENTRY_INDENT}'{interface}' => '{implementation}',")
}

/// Insert a binding after the first array opening of `content`.
///
/// Returns `None` when no `[` ends a line. The inserted line reuses the
/// marker's line ending.
pub fn insert_entry(content: &str, interface: &str, implementation: &str) -> Option<String> {
    let caps = ARRAY_MARKER.captures(content)?;
    let marker = caps.get(0)?;
    let line_break = caps.get(1)?.as_str();
    let position = marker.end();

    let mut updated = String::with_capacity(content.len() + interface.len() * 2);
    updated.push_str(&content[..position]);
    updated.push_str(&binding_entry(interface, implementation));
    updated.push_str(line_break);
    updated.push_str(&content[position..]);
    Some(updated)
}

/// Reads and edits the provider file
pub struct ProviderRegistrar {
    name: String,
    directory: PathBuf,
    namespace: String,
    fs: Arc<dyn Filesystem>,
}

impl ProviderRegistrar {
    pub fn new(
        name: impl Into<String>,
        config: &ConfigResolver,
        fs: Arc<dyn Filesystem>,
    ) -> Result<Self, GenerationError> {
        let directory = config.path(ConfigCategory::Providers)?.join(PROVIDERS_DIRECTORY);
        let namespace = join_namespace(&[
            config.namespace(ConfigCategory::Providers)?.as_str(),
            PROVIDERS_DIRECTORY,
        ]);

        Ok(Self {
            name: name.into(),
            directory,
            namespace,
            fs,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn file_path(&self) -> PathBuf {
        self.directory
            .join(format!("{}.{SOURCE_EXTENSION}", self.name))
    }

    pub fn fully_qualified_name(&self) -> String {
        join_namespace(&[self.namespace.as_str(), self.name.as_str()])
    }

    pub fn exists(&self) -> bool {
        self.fs.exists(&self.file_path())
    }

    /// Whether the quoted interface name appears anywhere in the provider.
    ///
    /// This is a plain text search: a commented-out binding still counts.
    pub fn is_bound(&self, interface: &str) -> Result<bool, GenerationError> {
        let content = self.read()?;
        Ok(content.contains(&format!("'{interface}'")))
    }

    /// Replace the whole provider with a freshly rendered stub
    pub fn replace_content(&self, templates: &TemplateEngine) -> Result<(), GenerationError> {
        let replacements = ReplacementMap::new()
            .with("%providersNamespace%", self.namespace.as_str())
            .with("%providerName%", self.name.as_str());
        let content = templates.render(Some(Stub::Provider), &replacements)?;

        if !self.fs.exists(&self.directory) {
            self.fs.create_dir_all(&self.directory).map_err(|source| {
                GenerationError::DirectoryCreationFailed {
                    path: self.directory.clone(),
                    source,
                }
            })?;
        }

        self.write(&self.file_path(), &content)?;
        info!(path = %self.file_path().display(), "Generated provider {}", self.name);
        Ok(())
    }

    /// Add an `interface => implementation` line to the bindings array
    pub fn add_entry(&self, interface: &str, implementation: &str) -> Result<(), GenerationError> {
        let path = self.file_path();
        let content = self.read()?;

        let updated = insert_entry(&content, interface, implementation)
            .ok_or_else(|| GenerationError::ArrayMarkerNotFound(path.clone()))?;

        self.write(&path, &updated)?;
        debug!(interface, implementation, "Added binding");
        Ok(())
    }

    fn read(&self) -> Result<String, GenerationError> {
        let path = self.file_path();
        self.fs
            .read_to_string(&path)
            .map_err(|source| GenerationError::FileReadFailed { path, source })
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), GenerationError> {
        self.fs
            .write(path, content)
            .map_err(|source| GenerationError::FileWriteFailed {
                path: path.to_path_buf(),
                source,
            })
    }
}
