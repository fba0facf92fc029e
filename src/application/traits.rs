//! Port interfaces for the application layer

use crate::application::ApplicationError;
use crate::core::utils::is_response_positive;

/// Default answer offered by every yes/no question
pub const DEFAULT_ANSWER: &str = "Yes";

/// Conversation with the developer running a command
pub trait Interaction: Send + Sync {
    /// Ask a free-form question, returning `default` on an empty answer
    fn ask(&self, question: &str, default: &str) -> Result<String, ApplicationError>;

    fn info(&self, message: &str);

    fn warn(&self, message: &str);

    /// Ask a yes/no question; only `y` and `yes` count as agreement
    fn confirm(&self, question: &str) -> Result<bool, ApplicationError> {
        let response = self.ask(question, DEFAULT_ANSWER)?;
        Ok(is_response_positive(&response))
    }
}
