//! Application state.

use crate::config::Config;
use crate::fetch::RemoteLoader;
use crate::store::{SqliteStore, StoreError, VocabularyStore};
use tracing::debug;
use vocab_core::Library;

/// Everything a command needs: the store, the loaded library and the fetcher.
pub struct AppState {
    pub store: SqliteStore,
    pub library: Library,
    pub loader: RemoteLoader,
}

impl AppState {
    /// Open the configured store and load the library from it.
    pub fn open(config: &Config) -> Result<Self, StoreError> {
        let path = config.database_path();
        debug!(path = %path.display(), "opening vocabulary store");
        let store = SqliteStore::open(&path)?;
        Self::with_store(store, RemoteLoader::new(config.fallback_proxy.clone()))
    }

    pub fn with_store(store: SqliteStore, loader: RemoteLoader) -> Result<Self, StoreError> {
        let library = store.load()?;
        Ok(Self {
            store,
            library,
            loader,
        })
    }

    /// Persist the in-memory library.
    pub fn save(&self) -> Result<(), StoreError> {
        self.store.save(&self.library)
    }
}
