//! Terminal implementation of the interaction port

use crate::application::{ApplicationError, Interaction};
use console::style;
use dialoguer::Input;
use tracing::debug;

/// Asks questions on the terminal, or answers them itself with `--yes`
pub struct TerminalInteraction {
    assume_yes: bool,
}

impl TerminalInteraction {
    pub fn new() -> Self {
        Self { assume_yes: false }
    }

    /// Interaction answering `yes` to every question without prompting
    pub fn assume_yes() -> Self {
        Self { assume_yes: true }
    }

    pub fn is_interactive(&self) -> bool {
        !self.assume_yes
    }
}

impl Default for TerminalInteraction {
    fn default() -> Self {
        Self::new()
    }
}

impl Interaction for TerminalInteraction {
    fn ask(&self, question: &str, default: &str) -> Result<String, ApplicationError> {
        if self.assume_yes {
            debug!(question, "Answered yes automatically");
            println!("{} {}", style(question).bold(), style("yes").dim());
            return Ok("yes".to_string());
        }

        Input::<String>::new()
            .with_prompt(question)
            .default(default.to_string())
            .interact_text()
            .map_err(|e| ApplicationError::PromptError(e.to_string()))
    }

    fn info(&self, message: &str) {
        println!("{}", style(message).green());
    }

    fn warn(&self, message: &str) {
        println!("{}", style(message).yellow());
    }
}
