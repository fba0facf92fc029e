//! Shared helpers for integration tests

#![allow(dead_code)]

use repokit::application::{ApplicationError, Interaction};
use std::collections::VecDeque;
use std::path::Path;
use std::sync::Mutex;

/// Interaction replaying scripted answers and recording everything shown
#[derive(Default)]
pub struct ScriptedInteraction {
    answers: Mutex<VecDeque<String>>,
    pub questions: Mutex<Vec<String>>,
    pub infos: Mutex<Vec<String>>,
    pub warnings: Mutex<Vec<String>>,
}

impl ScriptedInteraction {
    pub fn answering(answers: &[&str]) -> Self {
        let interaction = Self::default();
        interaction
            .answers
            .lock()
            .unwrap()
            .extend(answers.iter().map(|a| a.to_string()));
        interaction
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }

    pub fn infos(&self) -> Vec<String> {
        self.infos.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }
}

impl Interaction for ScriptedInteraction {
    fn ask(&self, question: &str, default: &str) -> Result<String, ApplicationError> {
        self.questions.lock().unwrap().push(question.to_string());
        Ok(self
            .answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| default.to_string()))
    }

    fn info(&self, message: &str) {
        self.infos.lock().unwrap().push(message.to_string());
    }

    fn warn(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }
}

/// Complete configuration file using `src` as the application directory
pub const CUSTOM_CONFIG: &str = r#"
[base]
path = "src"
namespace = "Acme\\"

[base.providers]
path = "src"
namespace = "Acme\\"

[namespaces]
contracts = "Data\\Contracts"
implementations = "Data\\Eloquent"
criteria = "Data\\Criteria"

[paths]
contracts = "Data/Contracts"
implementations = "Data/Eloquent"
criteria = "Data/Criteria"
"#;

pub fn write_file(path: &Path, content: &str) {
    std::fs::create_dir_all(path.parent().expect("path has a parent"))
        .expect("Failed to create directory");
    std::fs::write(path, content).expect("Failed to write file");
}

pub fn read_file(path: &Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()))
}
