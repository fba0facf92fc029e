//! Contract and implementation creators
//!
//! Both kinds share the same workflow, implemented once by [`Creator`]:
//!
//! 1. render the stub with the kind's replacements
//! 2. create the target directory when missing
//! 3. write the file only when it does not exist yet
//!
//! When the file exists the creator stops with [`Creation::AlreadyExists`]
//! and keeps the rendered content, so the caller can confirm and call
//! `complete()` to overwrite.

use crate::config::ConfigResolver;
use crate::generation::{
    ArtifactCreator, ArtifactKind, ContractIdentity, Creation, EntityReference, Filesystem,
    GenerationError, GenerationTarget, PathPlanner, ReplacementMap, TargetSettings,
    TemplateEngine,
};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CreatorState {
    Pending,
    Written,
    /// The file existed; `content` is ready for `complete()`
    AwaitingConfirmation,
}

/// Workflow shared by every creator
pub struct Creator {
    target: GenerationTarget,
    templates: TemplateEngine,
    fs: Arc<dyn Filesystem>,
    content: Option<String>,
    state: CreatorState,
}

impl Creator {
    /// Plan the target of `kind` for `reference`.
    ///
    /// Configuration problems surface here, before anything is written.
    pub fn new(
        kind: ArtifactKind,
        reference: &EntityReference,
        config: &ConfigResolver,
        templates: TemplateEngine,
        fs: Arc<dyn Filesystem>,
    ) -> Result<Self, GenerationError> {
        let settings = TargetSettings::resolve(kind, config)?;
        let target = PathPlanner::plan(&settings, reference);
        debug!(
            kind = %kind,
            class = %target.class_name,
            path = %target.file_path.display(),
            "Planned generation target"
        );

        Ok(Self {
            target,
            templates,
            fs,
            content: None,
            state: CreatorState::Pending,
        })
    }

    pub fn target(&self) -> &GenerationTarget {
        &self.target
    }

    /// Rendered content, available once `create` ran
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Render, ensure the directory, then write unless the file exists
    pub fn create(&mut self, replacements: &ReplacementMap) -> Result<Creation<()>, GenerationError> {
        let content = self
            .templates
            .render(Some(self.target.kind.stub()), replacements)?;
        self.content = Some(content);

        self.ensure_directory()?;

        if self.fs.exists(&self.target.file_path) {
            debug!(path = %self.target.file_path.display(), "Target file already exists");
            self.state = CreatorState::AwaitingConfirmation;
            return Ok(Creation::AlreadyExists(self.target.file_path.clone()));
        }

        self.write()?;
        info!(path = %self.target.file_path.display(), "Created {}", self.target.class_name);
        Ok(Creation::Created(()))
    }

    /// Overwrite the existing file with the content prepared by `create`
    pub fn complete(&mut self) -> Result<(), GenerationError> {
        if self.state != CreatorState::AwaitingConfirmation {
            return Err(GenerationError::NothingToComplete(
                self.target.file_path.clone(),
            ));
        }

        self.write()?;
        info!(path = %self.target.file_path.display(), "Overwrote {}", self.target.class_name);
        Ok(())
    }

    fn ensure_directory(&self) -> Result<(), GenerationError> {
        let directory = &self.target.directory;
        if self.fs.exists(directory) {
            return Ok(());
        }

        debug!(path = %directory.display(), "Creating directory");
        self.fs
            .create_dir_all(directory)
            .map_err(|source| GenerationError::DirectoryCreationFailed {
                path: directory.clone(),
                source,
            })
    }

    fn write(&mut self) -> Result<(), GenerationError> {
        let content = self.content.as_deref().unwrap_or_default();
        self.fs
            .write(&self.target.file_path, content)
            .map_err(|source| GenerationError::FileWriteFailed {
                path: self.target.file_path.clone(),
                source,
            })?;
        self.state = CreatorState::Written;
        Ok(())
    }
}

/// Generates the repository interface of a model
pub struct ContractCreator {
    creator: Creator,
}

impl ContractCreator {
    pub fn new(
        reference: &EntityReference,
        config: &ConfigResolver,
        templates: TemplateEngine,
        fs: Arc<dyn Filesystem>,
    ) -> Result<Self, GenerationError> {
        Ok(Self {
            creator: Creator::new(ArtifactKind::Contract, reference, config, templates, fs)?,
        })
    }

    pub fn replacements(&self) -> ReplacementMap {
        let target = self.creator.target();
        ReplacementMap::new()
            .with("%contractsNamespace%", target.namespace.as_str())
            .with("%contractName%", target.class_name.as_str())
    }

    pub fn identity(&self) -> ContractIdentity {
        let target = self.creator.target();
        ContractIdentity {
            fully_qualified_name: target.fully_qualified_name(),
            class_name: target.class_name.clone(),
        }
    }

    pub fn content(&self) -> Option<&str> {
        self.creator.content()
    }
}

impl ArtifactCreator for ContractCreator {
    type Output = ContractIdentity;

    fn target(&self) -> &GenerationTarget {
        self.creator.target()
    }

    fn create(&mut self) -> Result<Creation<ContractIdentity>, GenerationError> {
        let replacements = self.replacements();
        Ok(match self.creator.create(&replacements)? {
            Creation::Created(()) => Creation::Created(self.identity()),
            Creation::AlreadyExists(path) => Creation::AlreadyExists(path),
        })
    }

    fn complete(&mut self) -> Result<ContractIdentity, GenerationError> {
        self.creator.complete()?;
        Ok(self.identity())
    }
}

/// Generates the repository class implementing a contract
pub struct RepositoryCreator {
    creator: Creator,
    model_name: String,
    replacements: Option<ReplacementMap>,
}

impl RepositoryCreator {
    pub fn new(
        reference: &EntityReference,
        config: &ConfigResolver,
        templates: TemplateEngine,
        fs: Arc<dyn Filesystem>,
    ) -> Result<Self, GenerationError> {
        Ok(Self {
            creator: Creator::new(
                ArtifactKind::Implementation,
                reference,
                config,
                templates,
                fs,
            )?,
            model_name: reference.entity_name.clone(),
            replacements: None,
        })
    }

    /// Provide the contract and model the implementation refers to.
    ///
    /// `contract_namespace` is the fully qualified contract name, as it is
    /// imported with a `use` statement.
    pub fn initialize_replacements(
        &mut self,
        contract_namespace: &str,
        contract_name: &str,
        model_namespace: &str,
    ) {
        let replacements = ReplacementMap::new()
            .with("%contractNamespace%", contract_namespace)
            .with("%contractName%", contract_name)
            .with("%modelNamespace%", model_namespace)
            .with("%modelName%", self.model_name.as_str())
            .with("%repositoriesNamespaces%", self.creator.target().namespace.as_str());
        self.replacements = Some(replacements);
    }

    pub fn replacements(&self) -> Option<&ReplacementMap> {
        self.replacements.as_ref()
    }

    pub fn content(&self) -> Option<&str> {
        self.creator.content()
    }
}

impl ArtifactCreator for RepositoryCreator {
    type Output = ();

    fn target(&self) -> &GenerationTarget {
        self.creator.target()
    }

    fn create(&mut self) -> Result<Creation<()>, GenerationError> {
        let replacements = self.replacements.clone().ok_or_else(|| {
            GenerationError::ReplacementsNotInitialized(self.creator.target().class_name.clone())
        })?;
        self.creator.create(&replacements)
    }

    fn complete(&mut self) -> Result<(), GenerationError> {
        self.creator.complete()
    }
}
