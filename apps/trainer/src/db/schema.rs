//! SQLite schema definitions.

/// Current schema version for migrations.
pub const SCHEMA_VERSION: i32 = 1;

/// Complete schema for the local key-value store.
pub const SCHEMA: &str = r#"
-- Key-value pairs (vocabulary snapshot, theme preference)
CREATE TABLE IF NOT EXISTS kv (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY
);
"#;

/// Key holding the JSON array of stored entries.
pub const KEY_VOCAB: &str = "vocab";

/// Key holding the theme name.
pub const KEY_THEME: &str = "theme";
