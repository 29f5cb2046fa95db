//! SQLite schema definitions.

/// A single key-value table; each value is one serialized blob.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS kv (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

pub const SELECT_VALUE: &str = "SELECT value FROM kv WHERE key = ?1";

pub const UPSERT_VALUE: &str = r#"
INSERT INTO kv (key, value) VALUES (?1, ?2)
ON CONFLICT(key) DO UPDATE SET value = excluded.value
"#;
