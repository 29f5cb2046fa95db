//! Parser for pipe-delimited vocabulary lists.
//!
//! # Format
//! ```text
//! hola | hello | greeting
//! gracias | thank you
//! ```
//!
//! Fields are split on `|` and trimmed. Lines without both a front and a
//! back are skipped; there is no error case, an unusable input simply
//! produces no cards.

use crate::types::Card;
use std::collections::HashSet;

/// Field separator.
pub const DELIMITER: char = '|';

/// Parse vocabulary content into cards, keeping file order.
pub fn parse(content: &str) -> Vec<Card> {
    content.lines().filter_map(parse_line).collect()
}

/// Parse a single line; `None` if it does not describe a card.
pub fn parse_line(line: &str) -> Option<Card> {
    let fields: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();
    if fields.len() < 2 {
        return None;
    }

    let front = fields[0];
    let back = fields[1];
    if front.is_empty() || back.is_empty() {
        return None;
    }

    let notes = fields.get(2).map(|n| n.to_string());
    Some(Card::new(front, back, notes))
}

/// Render a card back into its line form.
pub fn format_line(card: &Card) -> String {
    match &card.notes {
        Some(notes) => format!("{}{DELIMITER}{}{DELIMITER}{}", card.front, card.back, notes),
        None => format!("{}{DELIMITER}{}", card.front, card.back),
    }
}

/// Append cards whose front is not already present (case-insensitive).
/// Returns how many were added.
pub fn merge_unique(existing: &mut Vec<Card>, incoming: Vec<Card>) -> usize {
    let mut seen: HashSet<String> = existing.iter().map(|c| c.front.to_lowercase()).collect();
    let before = existing.len();

    for card in incoming {
        if seen.insert(card.front.to_lowercase()) {
            existing.push(card);
        }
    }

    existing.len() - before
}
