//! Local persistence for the vocabulary library.

pub mod error;
pub mod repository;
pub mod schema;

pub use error::StoreError;
pub use repository::{SqliteStore, VocabularyStore, LIBRARY_KEY};
