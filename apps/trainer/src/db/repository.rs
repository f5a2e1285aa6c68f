//! SQLite-backed implementation of the vocabulary store.

use crate::db::error::DbError;
use crate::db::schema::{KEY_THEME, KEY_VOCAB, SCHEMA, SCHEMA_VERSION};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use vocab_core::{StoredEntry, Theme, VocabList, VocabStore};

type Result<T> = std::result::Result<T, DbError>;

/// Key-value store on a single SQLite connection.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open database at path, creating if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    /// Open in-memory database (for testing, or when the file is unusable).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        self.conn.execute(
            "INSERT OR IGNORE INTO schema_version (version) VALUES (?1)",
            params![SCHEMA_VERSION],
        )?;
        let version = self.schema_version()?;
        if version > SCHEMA_VERSION {
            return Err(DbError::InvalidData(format!(
                "database schema v{} is newer than supported v{}",
                version, SCHEMA_VERSION
            )));
        }
        Ok(())
    }

    /// Highest recorded schema version.
    fn schema_version(&self) -> Result<i32> {
        self.conn
            .query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))
            .map_err(Into::into)
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(Into::into)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    /// When a key was last written.
    pub fn updated_at(&self, key: &str) -> Result<Option<DateTime<Utc>>> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT updated_at FROM kv WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        raw.map(|value| {
            DateTime::parse_from_rfc3339(&value)
                .map(|at| at.with_timezone(&Utc))
                .map_err(|e| DbError::InvalidData(format!("{}: {}", key, e)))
        })
        .transpose()
    }
}

impl VocabStore for SqliteStore {
    type Error = DbError;

    fn load_vocab(&self) -> Result<Option<VocabList>> {
        let Some(json) = self.get(KEY_VOCAB)? else {
            return Ok(None);
        };
        let stored: Vec<StoredEntry> = serde_json::from_str(&json)?;
        Ok(Some(VocabList::from_stored(&stored)))
    }

    fn save_vocab(&self, list: &VocabList) -> Result<()> {
        let json = serde_json::to_string(&list.to_stored())?;
        self.set(KEY_VOCAB, &json)
    }

    fn load_theme(&self) -> Result<Option<Theme>> {
        let Some(value) = self.get(KEY_THEME)? else {
            return Ok(None);
        };
        value
            .parse::<Theme>()
            .map(Some)
            .map_err(|e| DbError::InvalidData(e.to_string()))
    }

    fn save_theme(&self, theme: Theme) -> Result<()> {
        self.set(KEY_THEME, theme.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use vocab_core::parse;

    #[test]
    fn empty_store_has_nothing() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.load_vocab().unwrap(), None);
        assert_eq!(store.load_theme().unwrap(), None);
        assert_eq!(store.schema_version().unwrap(), SCHEMA_VERSION);
        assert_eq!(store.updated_at(KEY_VOCAB).unwrap(), None);
    }

    #[test]
    fn newer_schema_is_refused() {
        let store = SqliteStore::open_in_memory().unwrap();
        store
            .conn
            .execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![SCHEMA_VERSION + 1],
            )
            .unwrap();
        assert!(matches!(store.initialize(), Err(DbError::InvalidData(_))));
    }

    #[test]
    fn vocab_round_trips_as_json_array() {
        let store = SqliteStore::open_in_memory().unwrap();
        let list = parse(&["der Hund - the dog\nder Hund - hound\ndie Katze - the cat"]);
        store.save_vocab(&list).unwrap();

        assert_eq!(store.load_vocab().unwrap(), Some(list));

        let raw = store.get(KEY_VOCAB).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json[0]["term"], "der Hund");
        assert_eq!(json[0]["translation"], "the dog; hound");
        let saved_at = store.updated_at(KEY_VOCAB).unwrap().unwrap();
        assert!(saved_at <= Utc::now());
    }

    #[test]
    fn saving_overwrites_previous_value() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.save_vocab(&parse(&["a - 1"])).unwrap();
        store.save_vocab(&parse(&["b - 2"])).unwrap();
        let loaded = store.load_vocab().unwrap().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.entries()[0].term, "b");
    }

    #[test]
    fn theme_round_trips() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.save_theme(Theme::Light).unwrap();
        assert_eq!(store.load_theme().unwrap(), Some(Theme::Light));
    }

    #[test]
    fn corrupt_values_surface_as_errors() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.set(KEY_VOCAB, "not json").unwrap();
        store.set(KEY_THEME, "sepia").unwrap();
        assert!(matches!(store.load_vocab(), Err(DbError::Json(_))));
        assert!(matches!(store.load_theme(), Err(DbError::InvalidData(_))));
    }
}
