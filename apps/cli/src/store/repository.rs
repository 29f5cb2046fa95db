//! Blob store for the vocabulary library.

use crate::store::error::StoreError;
use crate::store::schema::{SCHEMA, SELECT_VALUE, UPSERT_VALUE};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use vocab_core::Library;

type Result<T> = std::result::Result<T, StoreError>;

/// Key under which the whole library is stored.
pub const LIBRARY_KEY: &str = "vocabularyData";

/// Load/save interface for the persisted library.
pub trait VocabularyStore {
    /// Load the library; an absent blob yields an empty library.
    fn load(&self) -> Result<Library>;
    fn save(&self, library: &Library) -> Result<()>;
}

/// SQLite implementation of the store.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open database at path, creating it and its parent directory if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    /// Open in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Raw blob stored under `key`.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row(SELECT_VALUE, params![key], |row| row.get(0))
            .optional()
            .map_err(Into::into)
    }

    pub fn put_raw(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(UPSERT_VALUE, params![key, value])?;
        Ok(())
    }
}

impl VocabularyStore for SqliteStore {
    fn load(&self) -> Result<Library> {
        match self.get_raw(LIBRARY_KEY)? {
            Some(blob) => serde_json::from_str(&blob).map_err(StoreError::Corrupt),
            None => Ok(Library::new()),
        }
    }

    fn save(&self, library: &Library) -> Result<()> {
        let blob = serde_json::to_string(library).map_err(StoreError::Serialize)?;
        self.put_raw(LIBRARY_KEY, &blob)
    }
}
