//! repokit CLI entrypoint
//! Parses command-line arguments and dispatches to the application use cases.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use repokit::application::{
    BindRepositoryRequest, BindRepositoryUseCase, Interaction, MakeRepositoryRequest,
    MakeRepositoryUseCase,
};
use repokit::config::ConfigResolver;
use repokit::generation::{Filesystem, StubSource, TemplateEngine};
use repokit::infrastructure::{
    DirectoryStubs, EmbeddedStubs, LocalFilesystem, TerminalInteraction,
};
use std::path::PathBuf;
use std::sync::Arc;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "repokit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Root directory of the project to generate into
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Configuration file, relative to the project root (defaults to repository.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory with stub overrides, relative to the project root
    #[arg(long, global = true)]
    stubs: Option<PathBuf>,

    /// Answer yes to every question
    #[arg(short = 'y', long, global = true)]
    yes: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Create a new repository contract and implementation for a model
    #[command(name = "make:repository")]
    MakeRepository {
        /// Model name, optionally prefixed by directories (e.g. Blog/Post)
        model: Option<String>,
        /// Do not register the repository in the service provider
        #[arg(long)]
        no_bind: bool,
    },
    /// Add the repository binding of a model to the service provider
    #[command(name = "bind:repository", alias = "make:binding")]
    BindRepository {
        /// Model name, optionally prefixed by directories (e.g. Blog/Post)
        model: Option<String>,
    },
}

/// Services shared by every command
struct Services {
    config: Arc<ConfigResolver>,
    templates: TemplateEngine,
    fs: Arc<dyn Filesystem>,
    interaction: Arc<dyn Interaction>,
}

impl Services {
    fn from_cli(cli: &Cli) -> anyhow::Result<Self> {
        let config = ConfigResolver::load(&cli.root, cli.config.as_deref())
            .context("Failed to load configuration")?;

        let stubs: Arc<dyn StubSource> = match &cli.stubs {
            Some(dir) => {
                // relative like --config: against the project root
                let dir = cli.root.join(dir);
                debug!(path = %dir.display(), "Using stub overrides");
                Arc::new(DirectoryStubs::new(dir).context("Failed to load stub overrides")?)
            }
            None => Arc::new(EmbeddedStubs::new()),
        };

        let interaction: Arc<dyn Interaction> = if cli.yes {
            Arc::new(TerminalInteraction::assume_yes())
        } else {
            Arc::new(TerminalInteraction::new())
        };

        Ok(Self {
            config: Arc::new(config),
            templates: TemplateEngine::new(stubs),
            fs: Arc::new(LocalFilesystem::new()),
            interaction,
        })
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging on stderr, WARN unless RUST_LOG says otherwise
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    info!(root = %cli.root.display(), "Starting repokit");
    let services = Services::from_cli(&cli)?;

    match cli.command {
        Commands::MakeRepository { model, no_bind } => {
            make_repository(&services, model.unwrap_or_default(), no_bind)?
        }
        Commands::BindRepository { model } => {
            bind_repository(&services, model.unwrap_or_default())?
        }
    }

    Ok(())
}

fn make_repository(services: &Services, model: String, no_bind: bool) -> anyhow::Result<()> {
    let use_case = MakeRepositoryUseCase::new(
        services.config.clone(),
        services.templates.clone(),
        services.fs.clone(),
        services.interaction.clone(),
    );

    let mut request = MakeRepositoryRequest::new(model);
    if no_bind {
        request = request.without_binding();
    }

    let response = use_case
        .execute(request)
        .context("Failed to create repository")?;
    info!(
        written = response.written.len(),
        complete = response.is_complete(),
        "make:repository finished"
    );
    Ok(())
}

fn bind_repository(services: &Services, model: String) -> anyhow::Result<()> {
    let use_case = BindRepositoryUseCase::new(
        services.config.clone(),
        services.templates.clone(),
        services.fs.clone(),
        services.interaction.clone(),
    );

    let response = use_case
        .execute(BindRepositoryRequest::new(model))
        .context("Failed to bind repository")?;
    info!(
        provider = %response.provider_path.display(),
        status = ?response.status,
        "bind:repository finished"
    );
    Ok(())
}
