//! Generation domain module - turns a model argument into source files
//!
//! The pipeline runs name resolution, target planning, stub rendering and
//! existence-checked writes, then registers the new pair in the service
//! provider. Filesystem and stub access go through the ports in [`traits`]
//! so every step can be exercised without touching a real project.

pub mod creator;
pub mod errors;
pub mod model;
pub mod naming;
pub mod planner;
pub mod provider;
pub mod templates;
pub mod traits;
pub mod types;

pub use creator::*;
pub use errors::*;
pub use model::*;
pub use naming::*;
pub use planner::*;
pub use provider::*;
pub use templates::*;
pub use traits::*;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigResolver, RawConfig};
    use crate::infrastructure::filesystem::LocalFilesystem;
    use crate::infrastructure::stubs::EmbeddedStubs;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[test]
    fn test_contract_and_implementation_pipeline() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = ConfigResolver::new(RawConfig::builtin(), temp_dir.path());
        let templates = TemplateEngine::new(Arc::new(EmbeddedStubs::new()));
        let fs: Arc<dyn Filesystem> = Arc::new(LocalFilesystem::new());
        let reference = NameResolver::new("App\\").resolve("Post").unwrap();

        let mut contract =
            ContractCreator::new(&reference, &config, templates.clone(), fs.clone()).unwrap();
        let identity = match contract.create().unwrap() {
            Creation::Created(identity) => identity,
            Creation::AlreadyExists(path) => panic!("{} should not exist", path.display()),
        };
        assert_eq!(
            identity.fully_qualified_name,
            "App\\Repositories\\Contracts\\PostRepositoryInterface"
        );

        let mut repository =
            RepositoryCreator::new(&reference, &config, templates.clone(), fs.clone()).unwrap();
        repository.initialize_replacements(
            &identity.fully_qualified_name,
            &identity.class_name,
            "App\\Post",
        );
        assert!(repository.create().unwrap().is_created());

        let contract_file = std::fs::read_to_string(
            temp_dir
                .path()
                .join("app/Repositories/Contracts/PostRepositoryInterface.php"),
        )
        .unwrap();
        assert!(contract_file.contains("namespace App\\Repositories\\Contracts;"));
        assert!(contract_file.contains("interface PostRepositoryInterface"));
        assert!(!contract_file.contains('%'));

        let implementation_file = std::fs::read_to_string(
            temp_dir
                .path()
                .join("app/Repositories/Implementations/PostRepository.php"),
        )
        .unwrap();
        assert!(implementation_file.contains("namespace App\\Repositories\\Implementations;"));
        assert!(
            implementation_file
                .contains("use App\\Repositories\\Contracts\\PostRepositoryInterface;")
        );
        assert!(implementation_file.contains("use App\\Post;"));
        assert!(
            implementation_file.contains("class PostRepository implements PostRepositoryInterface")
        );
        assert!(!implementation_file.contains('%'));
    }
}
