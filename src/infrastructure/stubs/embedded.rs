//! Stubs embedded at compile time

use crate::generation::{GenerationError, Stub, StubSource};
use rust_embed::RustEmbed;
use tracing::debug;

/// Container for all stubs embedded at compile time
#[derive(RustEmbed)]
#[folder = "stubs/"]
struct EmbeddedStubFiles;

/// Stub source backed by the embedded stub files
pub struct EmbeddedStubs;

impl EmbeddedStubs {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EmbeddedStubs {
    fn default() -> Self {
        Self::new()
    }
}

impl StubSource for EmbeddedStubs {
    fn load(&self, stub: Stub) -> Result<String, GenerationError> {
        let name = stub.file_name();
        let file = EmbeddedStubFiles::get(name)
            .ok_or_else(|| GenerationError::StubNotFound(name.to_string()))?;

        debug!(stub = name, "Loaded embedded stub");
        String::from_utf8(file.data.into_owned()).map_err(|e| GenerationError::StubReadFailed {
            name: name.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_stub_is_embedded() {
        let stubs = EmbeddedStubs::new();
        for stub in Stub::all() {
            let content = stubs.load(stub).unwrap();
            assert!(content.starts_with("<?php"), "{} is not a PHP file", stub.file_name());
        }
    }

    #[test]
    fn test_stub_tokens() {
        let stubs = EmbeddedStubs::new();

        let contract = stubs.load(Stub::Contract).unwrap();
        assert!(contract.contains("%contractsNamespace%"));
        assert!(contract.contains("%contractName%"));

        let implementation = stubs.load(Stub::Implementation).unwrap();
        for token in [
            "%repositoriesNamespaces%",
            "%contractNamespace%",
            "%modelNamespace%",
            "%modelName%",
            "%contractName%",
        ] {
            assert!(implementation.contains(token), "missing {token}");
        }

        let provider = stubs.load(Stub::Provider).unwrap();
        assert!(provider.contains("protected $classes = [\n"));
    }
}
