//! Use case for generating a model's repository contract and implementation

use crate::application::{
    ApplicationError, BindRepositoryUseCase, DeclinedStep, Interaction,
    MakeRepositoryRequest, MakeRepositoryResponse,
};
use crate::config::{ConfigCategory, ConfigResolver};
use crate::generation::{
    ArtifactCreator, ContractCreator, ContractIdentity, Creation, Filesystem, ModelAssistor,
    NameResolver, RepositoryCreator, TemplateEngine,
};
use std::sync::Arc;
use tracing::debug;

pub const CONTRACT_EXISTS_QUESTION: &str =
    "Contract file already exists. Do you want to overwrite it?";
pub const IMPLEMENTATION_EXISTS_QUESTION: &str =
    "Implementation file already exists. Do you want to overwrite it?";
pub const MODEL_DECLINED_MESSAGE: &str = "Model wasn't created, aborting command.";
pub const CONTRACT_DECLINED_MESSAGE: &str = "Contract wasn't created";
pub const IMPLEMENTATION_DECLINED_MESSAGE: &str = "Implementation class wasn't created";

pub fn missing_model_question(model: &str) -> String {
    format!("Model [{model}] does not exist. Would you like to create it?")
}

/// Use case for `make:repository`
pub struct MakeRepositoryUseCase {
    config: Arc<ConfigResolver>,
    templates: TemplateEngine,
    fs: Arc<dyn Filesystem>,
    interaction: Arc<dyn Interaction>,
    binder: BindRepositoryUseCase,
}

impl MakeRepositoryUseCase {
    pub fn new(
        config: Arc<ConfigResolver>,
        templates: TemplateEngine,
        fs: Arc<dyn Filesystem>,
        interaction: Arc<dyn Interaction>,
    ) -> Self {
        let binder = BindRepositoryUseCase::new(
            config.clone(),
            templates.clone(),
            fs.clone(),
            interaction.clone(),
        );
        Self {
            config,
            templates,
            fs,
            interaction,
            binder,
        }
    }

    pub fn execute(
        &self,
        request: MakeRepositoryRequest,
    ) -> Result<MakeRepositoryResponse, ApplicationError> {
        // 1. Validate request
        request.validate()?;
        let model = request.model.trim();

        // 2. Resolve everything up front so configuration errors abort before any write
        self.config.validate(&[
            ConfigCategory::Base,
            ConfigCategory::Contracts,
            ConfigCategory::Implementations,
        ])?;
        let reference = NameResolver::from_config(&self.config)?.resolve(model)?;
        let assistor =
            ModelAssistor::new(model, &self.config, self.templates.clone(), self.fs.clone())?;
        let mut contract = ContractCreator::new(
            &reference,
            &self.config,
            self.templates.clone(),
            self.fs.clone(),
        )?;
        let mut repository = RepositoryCreator::new(
            &reference,
            &self.config,
            self.templates.clone(),
            self.fs.clone(),
        )?;
        let binding_plan = if request.bind {
            Some(self.binder.plan(model)?)
        } else {
            None
        };

        let mut response = MakeRepositoryResponse {
            model_created: false,
            written: Vec::new(),
            declined: None,
            binding: None,
        };

        // 3. Model
        if !assistor.model_exists() {
            if !self.interaction.confirm(&missing_model_question(model))? {
                self.interaction.warn(MODEL_DECLINED_MESSAGE);
                return Ok(declined(response, DeclinedStep::Model));
            }
            assistor.create_model()?;
            response.model_created = true;
            response.written.push(assistor.target().file_path.clone());
            self.interaction
                .info(&format!("Model {model} created successfully"));
        }

        // 4. Contract
        let identity = match self.create_contract(&mut contract)? {
            Some(identity) => identity,
            None => {
                self.interaction.warn(CONTRACT_DECLINED_MESSAGE);
                return Ok(declined(response, DeclinedStep::Contract));
            }
        };
        response.written.push(contract.target().file_path.clone());
        self.interaction
            .info(&format!("{} created successfully", identity.class_name));

        // 5. Implementation
        repository.initialize_replacements(
            &identity.fully_qualified_name,
            &identity.class_name,
            &assistor.model_full_namespace(),
        );
        if !self.create_repository(&mut repository)? {
            self.interaction.warn(IMPLEMENTATION_DECLINED_MESSAGE);
            return Ok(declined(response, DeclinedStep::Implementation));
        }
        response.written.push(repository.target().file_path.clone());
        self.interaction.info(&format!(
            "{} created successfully",
            repository.target().class_name
        ));

        // 6. Binding
        if let Some(plan) = binding_plan {
            response.binding = Some(self.binder.bind(&plan)?);
        } else {
            debug!("Binding skipped");
        }

        Ok(response)
    }

    /// `None` when the contract exists and the developer keeps it
    fn create_contract(
        &self,
        contract: &mut ContractCreator,
    ) -> Result<Option<ContractIdentity>, ApplicationError> {
        match contract.create()? {
            Creation::Created(identity) => Ok(Some(identity)),
            Creation::AlreadyExists(_) => {
                if !self.interaction.confirm(CONTRACT_EXISTS_QUESTION)? {
                    return Ok(None);
                }
                Ok(Some(contract.complete()?))
            }
        }
    }

    fn create_repository(&self, repository: &mut RepositoryCreator) -> Result<bool, ApplicationError> {
        match repository.create()? {
            Creation::Created(()) => Ok(true),
            Creation::AlreadyExists(_) => {
                if !self.interaction.confirm(IMPLEMENTATION_EXISTS_QUESTION)? {
                    return Ok(false);
                }
                repository.complete()?;
                Ok(true)
            }
        }
    }
}

fn declined(mut response: MakeRepositoryResponse, step: DeclinedStep) -> MakeRepositoryResponse {
    response.declined = Some(step);
    response
}
