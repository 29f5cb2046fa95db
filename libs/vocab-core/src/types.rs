//! Core types for the vocabulary trainer.

use serde::{Deserialize, Serialize};

/// One vocabulary entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub front: String,
    pub back: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Card {
    /// Create a card, treating blank notes as absent.
    pub fn new(front: impl Into<String>, back: impl Into<String>, notes: Option<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
            notes: notes.filter(|n| !n.trim().is_empty()),
        }
    }
}

/// Order in which a session presents its cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardOrder {
    InOrder,
    Shuffled,
}

impl Default for CardOrder {
    fn default() -> Self {
        Self::InOrder
    }
}

impl CardOrder {
    pub fn from_shuffle_flag(shuffle: bool) -> Self {
        if shuffle { Self::Shuffled } else { Self::InOrder }
    }
}

/// Which face of the card is the prompt in a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Show the front, expect the back.
    FrontToBack,
    /// Show the back, expect the front.
    BackToFront,
}

impl Default for Direction {
    fn default() -> Self {
        Self::FrontToBack
    }
}

impl Direction {
    pub fn from_reverse_flag(reverse: bool) -> Self {
        if reverse { Self::BackToFront } else { Self::FrontToBack }
    }

    /// Split a card into (prompt, expected answer).
    pub fn split<'a>(&self, card: &'a Card) -> (&'a str, &'a str) {
        match self {
            Self::FrontToBack => (card.front.as_str(), card.back.as_str()),
            Self::BackToFront => (card.back.as_str(), card.front.as_str()),
        }
    }
}

/// Language summary for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSummary {
    pub name: String,
    pub card_count: usize,
}

/// Running quiz score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub correct: usize,
    pub answered: usize,
    pub total: usize,
}

impl Score {
    /// Percentage of answered cards that passed, rounded to the nearest integer.
    pub fn percentage(&self) -> u32 {
        if self.answered == 0 {
            return 0;
        }
        ((self.correct as f64 / self.answered as f64) * 100.0).round() as u32
    }
}
