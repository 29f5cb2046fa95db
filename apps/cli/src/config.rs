//! Runtime configuration from the environment.
//!
//! Recognised variables:
//! - `VOCAB_DATA_DIR`: directory holding the database
//! - `VOCAB_FALLBACK_PROXY`: endpoint used when a direct fetch fails
//! - `RUST_LOG`: log filter

use std::path::PathBuf;

pub const DATA_DIR_VAR: &str = "VOCAB_DATA_DIR";
pub const FALLBACK_PROXY_VAR: &str = "VOCAB_FALLBACK_PROXY";
pub const DEFAULT_FALLBACK_PROXY: &str = "https://api.allorigins.win/raw";
pub const DATABASE_FILE: &str = "vocabulary.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub fallback_proxy: String,
}

impl Config {
    /// Read `.env` (if any) and the process environment.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = lookup(DATA_DIR_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        let fallback_proxy = lookup(FALLBACK_PROXY_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FALLBACK_PROXY.to_string());

        Self {
            data_dir,
            fallback_proxy,
        }
    }

    /// Override the data directory (from `--data-dir`).
    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        self
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE)
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vocab-flashcards")
}
