//! Stub loading and `%token%` substitution

use crate::generation::{GenerationError, Stub, StubSource};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Placeholder token to replacement value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementMap {
    entries: BTreeMap<String, String>,
}

impl ReplacementMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a replacement; `token` is used literally, `%` delimiters included
    pub fn insert(&mut self, token: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.entries.insert(token.into(), value.into());
        self
    }

    pub fn with(mut self, token: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(token, value);
        self
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for ReplacementMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Replace every literal occurrence of each token in one left-to-right pass.
///
/// Inserted values are never scanned again, so a value that happens to
/// contain another token is kept verbatim. At any position the longest
/// matching token wins.
pub fn substitute(text: &str, replacements: &ReplacementMap) -> String {
    if replacements.is_empty() {
        return text.to_string();
    }

    let mut tokens: Vec<&str> = replacements.tokens().filter(|t| !t.is_empty()).collect();
    if tokens.is_empty() {
        return text.to_string();
    }
    tokens.sort_by(|a, b| b.len().cmp(&a.len()));

    let pattern = tokens
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    // An alternation of escaped literals always compiles
    let re = Regex::new(&pattern).unwrap();

    re.replace_all(text, |caps: &regex::Captures| {
        replacements.get(&caps[0]).unwrap_or(&caps[0]).to_string()
    })
    .into_owned()
}

/// Loads stubs from a [`StubSource`] and fills in their tokens
#[derive(Clone)]
pub struct TemplateEngine {
    source: Arc<dyn StubSource>,
}

impl TemplateEngine {
    pub fn new(source: Arc<dyn StubSource>) -> Self {
        Self { source }
    }

    /// Load a stub; no stub configured means no content and no read
    pub fn load(&self, stub: Option<Stub>) -> Result<Option<String>, GenerationError> {
        match stub {
            Some(stub) => self.source.load(stub).map(Some),
            None => Ok(None),
        }
    }

    /// Load a stub and substitute its tokens
    pub fn render(
        &self,
        stub: Option<Stub>,
        replacements: &ReplacementMap,
    ) -> Result<String, GenerationError> {
        Ok(self
            .load(stub)?
            .map(|text| substitute(&text, replacements))
            .unwrap_or_default())
    }
}
