//! Test doubles for the application ports

use crate::application::{ApplicationError, Interaction};
use std::collections::VecDeque;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Info(String),
    Warn(String),
}

/// Interaction answering questions from a script.
///
/// Once the script runs out every question gets its default answer.
#[derive(Default)]
pub struct ScriptedInteraction {
    answers: Mutex<VecDeque<String>>,
    questions: Mutex<Vec<String>>,
    messages: Mutex<Vec<Message>>,
}

impl ScriptedInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answering(answers: &[&str]) -> Self {
        let interaction = Self::new();
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

    pub fn messages(&self) -> Vec<Message> {
        self.messages.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter_map(|m| match m {
                Message::Warn(text) => Some(text),
                Message::Info(_) => None,
            })
            .collect()
    }

    pub fn infos(&self) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter_map(|m| match m {
                Message::Info(text) => Some(text),
                Message::Warn(_) => None,
            })
            .collect()
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
        self.messages
            .lock()
            .unwrap()
            .push(Message::Info(message.to_string()));
    }

    fn warn(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(Message::Warn(message.to_string()));
    }
}
