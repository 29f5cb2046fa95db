//! Answer grading for quiz sessions.
//!
//! Answers are trimmed and lowercased, then accepted either on an exact match
//! or when their Levenshtein distance to the expected answer is at most one
//! edit per five characters of the expected answer (rounded down).

use serde::{Deserialize, Serialize};

/// One tolerated edit per this many characters of the expected answer.
pub const TOLERANCE_DIVISOR: usize = 5;

/// Verdict for a typed answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether the answer passes.
    pub is_correct: bool,
    /// Whether the normalized strings were identical.
    pub exact: bool,
    /// Edit distance between the normalized strings.
    pub distance: usize,
    /// Largest distance that still passes.
    pub threshold: usize,
    /// Normalized typed answer (for display).
    pub typed_normalized: String,
    /// Normalized correct answer (for display).
    pub correct_normalized: String,
}

/// Decide whether `typed` is an acceptable answer for `correct`.
pub fn grade(typed: &str, correct: &str) -> bool {
    compare_answers(typed, correct).is_correct
}

/// Compare a typed answer to the correct answer.
pub fn compare_answers(typed: &str, correct: &str) -> MatchResult {
    let typed_normalized = normalize(typed);
    let correct_normalized = normalize(correct);
    let threshold = tolerance(&correct_normalized);

    if typed_normalized == correct_normalized {
        return MatchResult {
            is_correct: true,
            exact: true,
            distance: 0,
            threshold,
            typed_normalized,
            correct_normalized,
        };
    }

    let distance = levenshtein_distance(&typed_normalized, &correct_normalized);
    MatchResult {
        is_correct: distance <= threshold,
        exact: false,
        distance,
        threshold,
        typed_normalized,
        correct_normalized,
    }
}

/// Trim surrounding whitespace and case-fold.
fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// floor(0.2 * length), length counted in chars.
fn tolerance(correct_normalized: &str) -> usize {
    correct_normalized.chars().count() / TOLERANCE_DIVISOR
}

/// Calculate Levenshtein distance between two strings.
///
/// Fills the whole `(m + 1) x (n + 1)` table; inputs are single words or
/// short phrases.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    let mut table = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in table[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let substitution = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };
            table[i][j] = (table[i - 1][j] + 1)
                .min(table[i][j - 1] + 1)
                .min(table[i - 1][j - 1] + substitution);
        }
    }

    table[m][n]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("abc", "abc"), 0);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("saturday", "sunday"), 3);
    }

    #[test]
    fn test_no_transposition_shortcut() {
        // A swap of adjacent letters costs two edits.
        assert_eq!(levenshtein_distance("ab", "ba"), 2);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(levenshtein_distance("straße", "strasse"), 2);
        assert_eq!(levenshtein_distance("café", "cafe"), 1);
    }

    #[test]
    fn test_reflexive() {
        for word in ["hola", "Guten Morgen", "  spaced  ", "ñandú", ""] {
            assert!(grade(word, word), "{word:?} should grade against itself");
        }
    }

    #[test]
    fn test_empty_correct_answer() {
        assert!(grade("", ""));
        assert!(grade("   ", ""));
        assert!(!grade("x", ""));
    }

    #[test]
    fn test_threshold_for_ten_chars() {
        let correct = "abcdefghij";
        // distance 2
        assert!(grade("abcdefghXY", correct));
        // distance 3
        assert!(!grade("abcdefgXYZ", correct));
    }

    #[test]
    fn test_short_answers_need_exact_match() {
        // Four chars allow zero edits.
        assert!(!grade("gato", "pato"));
        // Five chars allow one edit.
        assert!(grade("helo", "hello"));
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        assert!(grade("  HELLO ", "hello"));
        let result = compare_answers("  Hello", "hello  ");
        assert!(result.exact);
        assert_eq!(result.typed_normalized, "hello");
    }

    #[test]
    fn test_inner_whitespace_is_significant() {
        let result = compare_answers("good  morning", "good morning");
        assert!(!result.exact);
        assert_eq!(result.distance, 1);
        assert!(result.is_correct);
    }

    #[test]
    fn test_no_accent_folding() {
        // "cafe" vs "café": one edit over a four-char answer.
        assert!(!grade("cafe", "café"));
    }

    #[test]
    fn test_match_result_fields() {
        let result = compare_answers("helo", "hello");
        assert!(result.is_correct);
        assert!(!result.exact);
        assert_eq!(result.distance, 1);
        assert_eq!(result.threshold, 1);
    }
}
