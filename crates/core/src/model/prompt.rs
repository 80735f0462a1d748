use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::model::bank::geography_keys;

/// Opaque reference to the text of a question.
///
/// A prompt is usually a resource key such as `question_australia`, which a
/// [`PromptCatalog`] turns into display text. Prompts that are not known to
/// the catalog are shown verbatim, so a bank may also carry literal text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Prompt(String);

impl Prompt {
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Prompt {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Lookup table from prompt keys to display text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptCatalog {
    entries: HashMap<String, String>,
}

impl PromptCatalog {
    /// A catalog with no entries; every prompt resolves to itself.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The English strings for the built-in geography bank.
    #[must_use]
    pub fn geography() -> Self {
        let mut catalog = Self::empty();
        catalog.insert(
            geography_keys::AUSTRALIA,
            "Canberra is the capital of Australia.",
        );
        catalog.insert(
            geography_keys::OCEANS,
            "The Pacific Ocean is larger than the Atlantic Ocean.",
        );
        catalog.insert(
            geography_keys::MIDEAST,
            "The Suez Canal connects the Red Sea and the Indian Ocean.",
        );
        catalog.insert(
            geography_keys::AFRICA,
            "The source of the Nile River is in Egypt.",
        );
        catalog.insert(
            geography_keys::AMERICAS,
            "The Amazon River is the longest river in the Americas.",
        );
        catalog.insert(
            geography_keys::ASIA,
            "Lake Baikal is the world's oldest and deepest freshwater lake.",
        );
        catalog
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display text for `prompt`, falling back to the raw reference.
    #[must_use]
    pub fn resolve<'a>(&'a self, prompt: &'a Prompt) -> &'a str {
        self.entries
            .get(prompt.as_str())
            .map_or(prompt.as_str(), String::as_str)
    }
}
