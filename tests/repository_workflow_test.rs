//! Integration tests driving the use cases against a temporary project

mod common;

use common::{CUSTOM_CONFIG, ScriptedInteraction, read_file, write_file};
use repokit::application::{
    BindRepositoryRequest, BindRepositoryUseCase, BindingStatus, DeclinedStep,
    MakeRepositoryRequest, MakeRepositoryUseCase,
};
use repokit::config::ConfigResolver;
use repokit::generation::TemplateEngine;
use repokit::infrastructure::{DirectoryStubs, EmbeddedStubs, LocalFilesystem};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

fn make_use_case(
    root: &Path,
    interaction: Arc<ScriptedInteraction>,
) -> MakeRepositoryUseCase {
    let config = ConfigResolver::load(root, None).expect("Failed to load configuration");
    MakeRepositoryUseCase::new(
        Arc::new(config),
        TemplateEngine::new(Arc::new(EmbeddedStubs::new())),
        Arc::new(LocalFilesystem::new()),
        interaction,
    )
}

fn bind_use_case(root: &Path, interaction: Arc<ScriptedInteraction>) -> BindRepositoryUseCase {
    let config = ConfigResolver::load(root, None).expect("Failed to load configuration");
    BindRepositoryUseCase::new(
        Arc::new(config),
        TemplateEngine::new(Arc::new(EmbeddedStubs::new())),
        Arc::new(LocalFilesystem::new()),
        interaction,
    )
}

#[test]
fn test_make_repository_for_new_model() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();
    let interaction = Arc::new(ScriptedInteraction::answering(&["yes"]));

    let response = make_use_case(root, interaction.clone())
        .execute(MakeRepositoryRequest::new("Models/Blog/Post"))
        .expect("make:repository failed");

    assert!(response.is_complete());
    assert!(response.model_created);
    assert_eq!(
        interaction.questions(),
        vec!["Model [Models/Blog/Post] does not exist. Would you like to create it?"]
    );

    let model = read_file(&root.join("app/Models/Blog/Post.php"));
    assert!(model.contains("namespace App\\Models\\Blog;"));

    let contract = read_file(&root.join("app/Repositories/Contracts/Blog/PostRepositoryInterface.php"));
    assert!(contract.contains("namespace App\\Repositories\\Contracts\\Blog;"));

    let implementation =
        read_file(&root.join("app/Repositories/Implementations/Blog/PostRepository.php"));
    assert!(implementation.contains("namespace App\\Repositories\\Implementations\\Blog;"));
    assert!(implementation.contains("use App\\Repositories\\Contracts\\Blog\\PostRepositoryInterface;"));
    assert!(implementation.contains("use App\\Models\\Blog\\Post;"));

    let provider = read_file(&root.join("app/Providers/RepositoryServiceProvider.php"));
    assert!(provider.contains(
        "'App\\Repositories\\Contracts\\Blog\\PostRepositoryInterface' => 'App\\Repositories\\Implementations\\Blog\\PostRepository',"
    ));
}

#[test]
fn test_second_run_keeps_files_on_no() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();
    write_file(&root.join("app/Post.php"), "<?php\n");

    make_use_case(root, Arc::new(ScriptedInteraction::default()))
        .execute(MakeRepositoryRequest::new("Post"))
        .expect("first run failed");
    let contract_path = root.join("app/Repositories/Contracts/PostRepositoryInterface.php");
    write_file(&contract_path, "<?php // edited\n");

    let interaction = Arc::new(ScriptedInteraction::answering(&["no"]));
    let response = make_use_case(root, interaction.clone())
        .execute(MakeRepositoryRequest::new("Post"))
        .expect("second run failed");

    assert_eq!(response.declined, Some(DeclinedStep::Contract));
    assert_eq!(interaction.warnings(), vec!["Contract wasn't created"]);
    assert_eq!(read_file(&contract_path), "<?php // edited\n");
}

#[test]
fn test_second_run_overwrites_and_skips_duplicate_binding() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();
    write_file(&root.join("app/Post.php"), "<?php\n");

    make_use_case(root, Arc::new(ScriptedInteraction::default()))
        .execute(MakeRepositoryRequest::new("Post"))
        .expect("first run failed");
    let provider_path = root.join("app/Providers/RepositoryServiceProvider.php");
    let provider_before = read_file(&provider_path);

    let interaction = Arc::new(ScriptedInteraction::answering(&["y", "Y"]));
    let response = make_use_case(root, interaction.clone())
        .execute(MakeRepositoryRequest::new("Post"))
        .expect("second run failed");

    assert!(response.is_complete());
    assert_eq!(interaction.questions().len(), 2);
    assert_eq!(
        response.binding.map(|b| b.status),
        Some(BindingStatus::AlreadyBound)
    );
    assert_eq!(
        interaction.warnings(),
        vec!["Model's repository already bound in the service provider"]
    );
    assert_eq!(read_file(&provider_path), provider_before);
}

#[test]
fn test_custom_configuration_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();
    write_file(&root.join("repository.toml"), CUSTOM_CONFIG);
    write_file(&root.join("src/Invoice.php"), "<?php\n");

    let response = make_use_case(root, Arc::new(ScriptedInteraction::default()))
        .execute(MakeRepositoryRequest::new("Invoice"))
        .expect("make:repository failed");

    let binding = response.binding.expect("binding ran");
    assert_eq!(binding.interface, "Acme\\Data\\Contracts\\InvoiceRepositoryInterface");
    assert_eq!(binding.implementation, "Acme\\Data\\Eloquent\\InvoiceRepository");
    assert_eq!(binding.provider_path, root.join("src/Providers/RepositoryServiceProvider.php"));

    let implementation = read_file(&root.join("src/Data/Eloquent/InvoiceRepository.php"));
    assert!(implementation.contains("namespace Acme\\Data\\Eloquent;"));
    assert!(implementation.contains("use Acme\\Invoice;"));
}

#[test]
fn test_incomplete_configuration_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();
    let config = CUSTOM_CONFIG.replace("contracts = \"Data/Contracts\"\n", "");
    write_file(&root.join("repository.toml"), &config);

    let interaction = Arc::new(ScriptedInteraction::default());
    let error = make_use_case(root, interaction.clone())
        .execute(MakeRepositoryRequest::new("Invoice"))
        .expect_err("missing key must fail");

    assert!(
        error
            .to_string()
            .contains("contracts path is missing in configuration file.")
    );
    assert!(interaction.questions().is_empty());
    assert!(!root.join("src").exists());
}

#[test]
fn test_bind_alone() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();

    let interaction = Arc::new(ScriptedInteraction::default());
    let response = bind_use_case(root, interaction.clone())
        .execute(BindRepositoryRequest::new("Comment"))
        .expect("bind failed");

    assert!(response.provider_created);
    assert_eq!(response.status, BindingStatus::Bound);
    assert!(interaction.infos().contains(&"Repository bound successfully".to_string()));
    // bind never generates classes
    assert!(!root.join("app/Repositories").exists());
}

#[test]
fn test_stub_override_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();
    let stubs_dir = root.join("stubs");
    write_file(
        &stubs_dir.join("contract.stub"),
        "<?php\n\nnamespace %contractsNamespace%;\n\n// custom\ninterface %contractName%\n{\n}\n",
    );
    write_file(&root.join("app/Post.php"), "<?php\n");

    let config = ConfigResolver::load(root, None).expect("Failed to load configuration");
    MakeRepositoryUseCase::new(
        Arc::new(config),
        TemplateEngine::new(Arc::new(
            DirectoryStubs::new(&stubs_dir).expect("Failed to open stub directory"),
        )),
        Arc::new(LocalFilesystem::new()),
        Arc::new(ScriptedInteraction::default()),
    )
    .execute(MakeRepositoryRequest::new("Post").without_binding())
    .expect("make:repository failed");

    let contract = read_file(&root.join("app/Repositories/Contracts/PostRepositoryInterface.php"));
    assert!(contract.contains("// custom"));
    assert!(contract.contains("interface PostRepositoryInterface"));

    // the implementation still comes from the embedded stub
    let implementation =
        read_file(&root.join("app/Repositories/Implementations/PostRepository.php"));
    assert!(implementation.contains("class PostRepository implements PostRepositoryInterface"));
}
