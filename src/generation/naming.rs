//! Model name parsing
//!
//! Turns the model argument typed by the developer (`Post`, `Blog/Post`,
//! `Models\Blog\Post`) into an [`EntityReference`].

use crate::config::{ConfigCategory, ConfigError, ConfigResolver};
use crate::core::utils::join_namespace;
use crate::generation::GenerationError;

/// Directory names that never become a subdirectory of the generated classes
pub const DEFAULT_RESERVED_SEGMENTS: [&str; 5] = ["Models", "models", "model", "App", "app"];

/// Parsed model argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityReference {
    pub raw_input: String,
    pub entity_name: String,
    /// Single directory level placed between the category directory and the file
    pub subdirectory: Option<String>,
    pub fully_qualified_name: String,
}

/// Splits model arguments into name and subdirectory
#[derive(Debug, Clone)]
pub struct NameResolver {
    base_namespace: String,
    reserved: Vec<String>,
}

impl NameResolver {
    pub fn new(base_namespace: impl Into<String>) -> Self {
        Self {
            base_namespace: base_namespace.into(),
            reserved: DEFAULT_RESERVED_SEGMENTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Resolver for the base namespace and reserved segments of a project
    pub fn from_config(config: &ConfigResolver) -> Result<Self, ConfigError> {
        let resolver = Self::new(config.namespace(ConfigCategory::Base)?);
        Ok(match config.reserved_segments() {
            Some(reserved) => resolver.with_reserved(reserved.iter().cloned()),
            None => resolver,
        })
    }

    /// Replace the reserved segment list
    pub fn with_reserved<I, S>(mut self, reserved: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved = reserved.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_reserved(&self, segment: &str) -> bool {
        self.reserved.iter().any(|r| r == segment)
    }

    /// Resolve a model argument.
    ///
    /// Only the segment directly before the name can become the
    /// subdirectory; anything further up is dropped.
    pub fn resolve(&self, input: &str) -> Result<EntityReference, GenerationError> {
        let mut segments: Vec<&str> = split_segments(input)?;

        let entity_name = match segments.pop() {
            Some(name) => name.to_string(),
            None => return Err(GenerationError::InvalidReference(input.to_string())),
        };

        let subdirectory = segments
            .pop()
            .filter(|segment| !self.is_reserved(segment))
            .map(str::to_string);

        let fully_qualified_name = match &subdirectory {
            Some(dir) => join_namespace(&[
                self.base_namespace.as_str(),
                dir.as_str(),
                entity_name.as_str(),
            ]),
            None => join_namespace(&[self.base_namespace.as_str(), entity_name.as_str()]),
        };

        Ok(EntityReference {
            raw_input: input.to_string(),
            entity_name,
            subdirectory,
            fully_qualified_name,
        })
    }
}

/// Split on both separators, dropping blank segments.
///
/// Every remaining segment must be a valid class or namespace name.
pub(crate) fn split_segments(input: &str) -> Result<Vec<&str>, GenerationError> {
    let segments: Vec<&str> = input
        .split(['/', '\\'])
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect();

    if segments.iter().any(|segment| !is_valid_segment(segment)) {
        return Err(GenerationError::InvalidReference(input.to_string()));
    }
    Ok(segments)
}

/// Whether `segment` can be used as a class name and namespace part
pub fn is_valid_segment(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
