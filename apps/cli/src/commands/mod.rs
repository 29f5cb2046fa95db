//! Command handlers behind the `vocab` subcommands.

pub mod library;
pub mod study;

use crate::fetch::FetchError;
use crate::store::StoreError;
use thiserror::Error;
use vocab_core::SessionError;

pub use library::{
    export_language, list_languages, load_file, load_text, load_url, remove_language,
    show_language, ImportMode, ImportResult,
};
pub use study::{run_flashcards, run_quiz};

/// Errors surfaced to the user by a command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no vocabulary lines found in {origin}")]
    NoCards { origin: String },

    #[error("unknown language: {0}")]
    UnknownLanguage(String),
}
