//! Library commands: loading, listing and exporting vocabulary.

use super::CommandError;
use crate::state::AppState;
use std::borrow::Cow;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{info, warn};
use vocab_core::{format_line, parse, Card, LanguageSummary};

/// How loaded cards combine with an existing language entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportMode {
    /// Overwrite the language's cards.
    #[default]
    Replace,
    /// Keep existing cards and add those with unseen fronts.
    AppendUnique,
}

impl ImportMode {
    pub fn from_append_flag(append: bool) -> Self {
        if append { Self::AppendUnique } else { Self::Replace }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportResult {
    pub language: String,
    /// Cards parsed from the input.
    pub parsed: usize,
    /// Cards added to the library.
    pub imported: usize,
    /// Cards dropped because the language was overwritten.
    pub replaced: usize,
}

/// Parse `content` and store it under `language`. Nothing is stored when no
/// line yields a card.
fn import(
    state: &mut AppState,
    language: &str,
    content: &str,
    origin: &str,
    mode: ImportMode,
) -> Result<ImportResult, CommandError> {
    let cards = parse(content);
    if cards.is_empty() {
        return Err(CommandError::NoCards {
            origin: origin.to_string(),
        });
    }

    let parsed = cards.len();
    let (imported, replaced) = match mode {
        ImportMode::Replace => (parsed, state.library.replace(language, cards)),
        ImportMode::AppendUnique => (state.library.append_unique(language, cards), 0),
    };
    state.save()?;

    info!(language, origin, parsed, imported, replaced, "vocabulary loaded");
    Ok(ImportResult {
        language: language.to_string(),
        parsed,
        imported,
        replaced,
    })
}

/// Load a vocabulary file from disk. Bytes that are not valid UTF-8 are
/// replaced with U+FFFD rather than rejecting the file.
pub fn load_file(
    state: &mut AppState,
    language: &str,
    path: &Path,
    mode: ImportMode,
) -> Result<ImportResult, CommandError> {
    let bytes = fs::read(path)?;
    let origin = path.display().to_string();
    let content = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = content {
        warn!(file = %origin, "file is not valid UTF-8, undecodable bytes replaced");
    }
    import(state, language, &content, &origin, mode)
}

/// Load pasted text, read until EOF.
pub fn load_text<R: Read>(
    state: &mut AppState,
    language: &str,
    mut input: R,
    mode: ImportMode,
) -> Result<ImportResult, CommandError> {
    let mut content = String::new();
    input.read_to_string(&mut content)?;
    import(state, language, &content, "pasted text", mode)
}

/// Fetch a vocabulary file and load it.
pub async fn load_url(
    state: &mut AppState,
    language: &str,
    url: &str,
    mode: ImportMode,
) -> Result<ImportResult, CommandError> {
    let content = state.loader.fetch_text(url).await?;
    import(state, language, &content, url, mode)
}

pub fn list_languages(state: &AppState) -> Vec<LanguageSummary> {
    state.library.languages()
}

/// Cards stored for `language`.
pub fn show_language<'a>(state: &'a AppState, language: &str) -> Result<&'a [Card], CommandError> {
    state
        .library
        .get(language)
        .ok_or_else(|| CommandError::UnknownLanguage(language.to_string()))
}

/// Delete a language. Returns how many cards it held.
pub fn remove_language(state: &mut AppState, language: &str) -> Result<usize, CommandError> {
    let removed = state
        .library
        .remove(language)
        .ok_or_else(|| CommandError::UnknownLanguage(language.to_string()))?;
    state.save()?;
    info!(language, cards = removed.len(), "language removed");
    Ok(removed.len())
}

/// Write a language back out in line form. Returns the number of lines.
pub fn export_language<W: Write>(
    state: &AppState,
    language: &str,
    out: &mut W,
) -> Result<usize, CommandError> {
    let cards = show_language(state, language)?;
    for card in cards {
        writeln!(out, "{}", format_line(card))?;
    }
    Ok(cards.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::RemoteLoader;
    use crate::store::{SqliteStore, VocabularyStore};
    use pretty_assertions::assert_eq;

    fn state() -> AppState {
        let store = SqliteStore::open_in_memory().unwrap();
        AppState::with_store(store, RemoteLoader::new("http://127.0.0.1:9/raw")).unwrap()
    }

    #[test]
    fn load_text_persists() {
        let mut state = state();
        let input = "hola | hello | greeting\nbad line\nperro | dog\n";
        let result = load_text(&mut state, "Spanish", input.as_bytes(), ImportMode::Replace).unwrap();
        assert_eq!(
            result,
            ImportResult {
                language: "Spanish".to_string(),
                parsed: 2,
                imported: 2,
                replaced: 0,
            }
        );
        assert_eq!(state.store.load().unwrap().get("Spanish").unwrap().len(), 2);
    }

    #[test]
    fn empty_input_stores_nothing() {
        let mut state = state();
        let err = load_text(&mut state, "Spanish", "onlyoneword".as_bytes(), ImportMode::Replace)
            .unwrap_err();
        assert!(matches!(err, CommandError::NoCards { .. }));
        assert!(state.library.is_empty());
        assert!(state.store.load().unwrap().is_empty());
    }

    #[test]
    fn second_load_replaces() {
        let mut state = state();
        load_text(&mut state, "German", "ja | yes\nnein | no".as_bytes(), ImportMode::Replace).unwrap();
        let result =
            load_text(&mut state, "German", "Hund | dog".as_bytes(), ImportMode::Replace).unwrap();
        assert_eq!(result.replaced, 2);
        let cards = show_language(&state, "German").unwrap();
        assert_eq!(cards, &[Card::new("Hund", "dog", None)]);
    }

    #[test]
    fn append_mode_skips_duplicates() {
        let mut state = state();
        load_text(&mut state, "German", "ja | yes".as_bytes(), ImportMode::Replace).unwrap();
        let result = load_text(
            &mut state,
            "German",
            "Ja | yeah\nnein | no".as_bytes(),
            ImportMode::AppendUnique,
        )
        .unwrap();
        assert_eq!(result.parsed, 2);
        assert_eq!(result.imported, 1);
        assert_eq!(show_language(&state, "German").unwrap().len(), 2);
    }

    #[test]
    fn remove_and_unknown_language() {
        let mut state = state();
        load_text(&mut state, "French", "chat | cat".as_bytes(), ImportMode::Replace).unwrap();
        assert_eq!(remove_language(&mut state, "French").unwrap(), 1);
        assert!(matches!(
            remove_language(&mut state, "French"),
            Err(CommandError::UnknownLanguage(_))
        ));
        assert!(state.store.load().unwrap().is_empty());
    }

    #[test]
    fn export_writes_lines() {
        let mut state = state();
        load_text(
            &mut state,
            "Spanish",
            "hola | hello | greeting\nperro | dog".as_bytes(),
            ImportMode::Replace,
        )
        .unwrap();
        let mut out = Vec::new();
        assert_eq!(export_language(&state, "Spanish", &mut out).unwrap(), 2);
        assert_eq!(String::from_utf8(out).unwrap(), "hola|hello|greeting\nperro|dog\n");
    }

    #[test]
    fn load_file_accepts_latin1_bytes() {
        let mut state = state();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spanish.txt");
        // "niño | child" in Latin-1: 0xF1 is not valid UTF-8.
        std::fs::write(&path, b"ni\xf1o | child\ncasa | house\n").unwrap();

        let result = load_file(&mut state, "Spanish", &path, ImportMode::Replace).unwrap();
        assert_eq!(result.imported, 2);
        let cards = show_language(&state, "Spanish").unwrap();
        assert_eq!(cards[0].front, "ni\u{FFFD}o");
        assert_eq!(cards[1], Card::new("casa", "house", None));
    }

    #[test]
    fn list_reports_counts() {
        let mut state = state();
        load_text(&mut state, "Spanish", "a | b\nc | d".as_bytes(), ImportMode::Replace).unwrap();
        let languages = list_languages(&state);
        assert_eq!(languages.len(), 1);
        assert_eq!(languages[0].card_count, 2);
    }
}
