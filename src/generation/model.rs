//! Model class lookup and generation
//!
//! Unlike the repository classes, the model keeps every directory of the
//! argument: `Models/Blog/Post` lives in `<base>/Models/Blog/Post.php` under
//! `App\Models\Blog`.

use crate::config::{ConfigCategory, ConfigResolver};
use crate::core::utils::join_namespace;
use crate::generation::naming::split_segments;
use crate::generation::{
    Creation, Filesystem, GenerationError, ReplacementMap, SOURCE_EXTENSION, Stub, TemplateEngine,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Location and namespace of a model class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelTarget {
    pub name: String,
    /// Namespace of the model, without the class name
    pub namespace: String,
    pub directory: PathBuf,
    pub file_path: PathBuf,
}

impl ModelTarget {
    /// Derive the model location from the raw argument.
    ///
    /// A leading segment repeating the root namespace in any casing
    /// (`App/Models/Post`, `app/Post`) is dropped so the namespace is not
    /// doubled.
    pub fn resolve(input: &str, config: &ConfigResolver) -> Result<Self, GenerationError> {
        let base_path = config.path(ConfigCategory::Base)?;
        let base_namespace = config.namespace(ConfigCategory::Base)?;
        let root_namespace = base_namespace
            .split('\\')
            .find(|part| !part.is_empty())
            .unwrap_or_default()
            .to_string();

        let mut segments = split_segments(input)?;
        let name = match segments.pop() {
            Some(name) => name.to_string(),
            None => return Err(GenerationError::InvalidReference(input.to_string())),
        };
        if segments
            .first()
            .is_some_and(|first| first.eq_ignore_ascii_case(&root_namespace))
        {
            segments.remove(0);
        }

        let mut directory = base_path;
        for segment in &segments {
            directory.push(segment);
        }
        let file_path = directory.join(format!("{name}.{SOURCE_EXTENSION}"));

        let mut parts = vec![base_namespace.as_str()];
        parts.extend(segments.iter().copied());
        let namespace = join_namespace(&parts);

        Ok(Self {
            name,
            namespace,
            directory,
            file_path,
        })
    }

    pub fn fully_qualified_name(&self) -> String {
        join_namespace(&[self.namespace.as_str(), self.name.as_str()])
    }
}

/// Checks for and generates the model a repository is built for
pub struct ModelAssistor {
    target: ModelTarget,
    templates: TemplateEngine,
    fs: Arc<dyn Filesystem>,
}

impl ModelAssistor {
    pub fn new(
        input: &str,
        config: &ConfigResolver,
        templates: TemplateEngine,
        fs: Arc<dyn Filesystem>,
    ) -> Result<Self, GenerationError> {
        Ok(Self {
            target: ModelTarget::resolve(input, config)?,
            templates,
            fs,
        })
    }

    pub fn target(&self) -> &ModelTarget {
        &self.target
    }

    pub fn model_exists(&self) -> bool {
        self.fs.exists(&self.target.file_path)
    }

    /// Fully qualified model name, as imported by the implementation
    pub fn model_full_namespace(&self) -> String {
        self.target.fully_qualified_name()
    }

    /// Generate the model from the model stub, never replacing an existing file
    pub fn create_model(&self) -> Result<Creation<()>, GenerationError> {
        if self.model_exists() {
            return Ok(Creation::AlreadyExists(self.target.file_path.clone()));
        }

        let replacements = ReplacementMap::new()
            .with("%namespace%", self.target.namespace.as_str())
            .with("%modelName%", self.target.name.as_str());
        let content = self.templates.render(Some(Stub::Model), &replacements)?;

        if !self.fs.exists(&self.target.directory) {
            self.fs
                .create_dir_all(&self.target.directory)
                .map_err(|source| GenerationError::DirectoryCreationFailed {
                    path: self.target.directory.clone(),
                    source,
                })?;
        }

        self.fs
            .write(&self.target.file_path, &content)
            .map_err(|source| GenerationError::FileWriteFailed {
                path: self.target.file_path.clone(),
                source,
            })?;

        info!(path = %self.target.file_path.display(), "Created model {}", self.target.name);
        Ok(Creation::Created(()))
    }
}
