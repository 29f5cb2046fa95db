//! The vocabulary library: language name to ordered cards.

use crate::parser::merge_unique;
use crate::types::{Card, LanguageSummary};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// All loaded vocabulary, keyed by language name.
///
/// Serializes as a plain JSON object, `{"Spanish": [{...}, ...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Library {
    languages: BTreeMap<String, Vec<Card>>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `cards` under `language`, overwriting any previous list.
    /// Returns the number of cards that were replaced.
    pub fn replace(&mut self, language: &str, cards: Vec<Card>) -> usize {
        self.languages
            .insert(language.to_string(), cards)
            .map_or(0, |old| old.len())
    }

    /// Add cards whose front is not yet known for `language`.
    /// Returns the number of cards added.
    pub fn append_unique(&mut self, language: &str, cards: Vec<Card>) -> usize {
        let entry = self.languages.entry(language.to_string()).or_default();
        merge_unique(entry, cards)
    }

    pub fn get(&self, language: &str) -> Option<&[Card]> {
        self.languages.get(language).map(Vec::as_slice)
    }

    pub fn remove(&mut self, language: &str) -> Option<Vec<Card>> {
        self.languages.remove(language)
    }

    /// Languages in name order with their card counts.
    pub fn languages(&self) -> Vec<LanguageSummary> {
        self.languages
            .iter()
            .map(|(name, cards)| LanguageSummary {
                name: name.clone(),
                card_count: cards.len(),
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}
