//! Use case for binding a repository in the service provider

use crate::application::{
    ApplicationError, BindRepositoryRequest, BindRepositoryResponse, BindingStatus, Interaction,
};
use crate::config::{ConfigCategory, ConfigResolver};
use crate::generation::{
    ArtifactKind, DEFAULT_PROVIDER_NAME, Filesystem, NameResolver, PathPlanner, ProviderRegistrar,
    TargetSettings, TemplateEngine,
};
use std::sync::Arc;
use tracing::debug;

pub const ALREADY_BOUND_MESSAGE: &str = "Model's repository already bound in the service provider";
pub const BOUND_MESSAGE: &str = "Repository bound successfully";

/// Everything needed to bind one model, resolved before any file is touched
pub struct BindingPlan {
    registrar: ProviderRegistrar,
    interface: String,
    implementation: String,
}

impl BindingPlan {
    pub fn interface(&self) -> &str {
        &self.interface
    }

    pub fn implementation(&self) -> &str {
        &self.implementation
    }
}

/// Use case for registering a contract/implementation pair
pub struct BindRepositoryUseCase {
    config: Arc<ConfigResolver>,
    templates: TemplateEngine,
    fs: Arc<dyn Filesystem>,
    interaction: Arc<dyn Interaction>,
}

impl BindRepositoryUseCase {
    pub fn new(
        config: Arc<ConfigResolver>,
        templates: TemplateEngine,
        fs: Arc<dyn Filesystem>,
        interaction: Arc<dyn Interaction>,
    ) -> Self {
        Self {
            config,
            templates,
            fs,
            interaction,
        }
    }

    pub fn execute(
        &self,
        request: BindRepositoryRequest,
    ) -> Result<BindRepositoryResponse, ApplicationError> {
        request.validate()?;
        let plan = self.plan(&request.model)?;
        self.bind(&plan)
    }

    /// Resolve the class names and provider for `model`
    pub fn plan(&self, model: &str) -> Result<BindingPlan, ApplicationError> {
        self.config.validate(&[
            ConfigCategory::Base,
            ConfigCategory::Providers,
            ConfigCategory::Contracts,
            ConfigCategory::Implementations,
        ])?;
        let reference = NameResolver::from_config(&self.config)?.resolve(model.trim())?;
        let contract = PathPlanner::plan(
            &TargetSettings::resolve(ArtifactKind::Contract, &self.config)?,
            &reference,
        );
        let implementation = PathPlanner::plan(
            &TargetSettings::resolve(ArtifactKind::Implementation, &self.config)?,
            &reference,
        );
        let registrar =
            ProviderRegistrar::new(DEFAULT_PROVIDER_NAME, &self.config, self.fs.clone())?;

        Ok(BindingPlan {
            registrar,
            interface: contract.fully_qualified_name(),
            implementation: implementation.fully_qualified_name(),
        })
    }

    /// Generate the provider if needed, then add the binding unless present
    pub fn bind(&self, plan: &BindingPlan) -> Result<BindRepositoryResponse, ApplicationError> {
        let registrar = &plan.registrar;
        let provider_created = !registrar.exists();

        if provider_created {
            registrar.replace_content(&self.templates)?;
            self.interaction
                .info(&format!("{} created successfully", registrar.name()));
        } else if registrar.is_bound(&plan.interface)? {
            self.interaction.warn(ALREADY_BOUND_MESSAGE);
            return Ok(self.response(plan, BindingStatus::AlreadyBound, false));
        }

        registrar.add_entry(&plan.interface, &plan.implementation)?;
        debug!(provider = %registrar.fully_qualified_name(), "Binding registered");
        self.interaction.info(BOUND_MESSAGE);

        Ok(self.response(plan, BindingStatus::Bound, provider_created))
    }

    fn response(
        &self,
        plan: &BindingPlan,
        status: BindingStatus,
        provider_created: bool,
    ) -> BindRepositoryResponse {
        BindRepositoryResponse {
            status,
            provider_path: plan.registrar.file_path(),
            provider_created,
            interface: plan.interface.clone(),
            implementation: plan.implementation.clone(),
        }
    }
}
