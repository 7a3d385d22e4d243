use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Irregular singular -> plural overrides consulted before the English
/// pluralizer when deriving table names.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inflections {
    irregular: IndexMap<String, String>,
}

impl Inflections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an irregular plural. Both words are snake_case.
    pub fn irregular(mut self, singular: impl Into<String>, plural: impl Into<String>) -> Self {
        self.insert(singular, plural);
        self
    }

    pub fn insert(&mut self, singular: impl Into<String>, plural: impl Into<String>) {
        self.irregular.insert(singular.into(), plural.into());
    }

    /// Merges `other` into `self`; entries in `other` win.
    pub fn extend(&mut self, other: &Inflections) {
        for (singular, plural) in &other.irregular {
            self.irregular.insert(singular.clone(), plural.clone());
        }
    }

    /// Pluralizes a snake_case word. A whole-word override wins over an
    /// override of the trailing `_` segment, which wins over the pluralizer.
    pub fn pluralize(&self, word: &str) -> String {
        if let Some(plural) = self.irregular.get(word) {
            return plural.clone();
        }

        if let Some((head, tail)) = word.rsplit_once('_') {
            if let Some(plural) = self.irregular.get(tail) {
                return format!("{head}_{plural}");
            }
        }

        std_util::str::pluralize(word)
    }
}
