//! SQLite-backed state store implementation.

use std::path::Path;
use std::sync::Mutex;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;

use super::{StateError, StateStore};

/// SQLite-backed state store.
pub struct SqliteStateStore {
    conn: Mutex<Connection>,
}

impl SqliteStateStore {
    /// Open (or create) the state database at `path`.
    pub fn new(path: &Path) -> Result<Self, StateError> {
        let conn = Connection::open(path)?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory SQLite state store (useful for testing).
    pub fn in_memory() -> Result<Self, StateError> {
        let conn = Connection::open_in_memory()?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), StateError> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS state (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
            "#,
        )?;
        Ok(())
    }
}

impl StateStore for SqliteStateStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StateError> {
        let conn = self.conn.lock().map_err(|_| StateError::LockPoisoned)?;
        let raw: Option<String> = conn
            .query_row("SELECT value FROM state WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;

        raw.map(|json| {
            serde_json::from_str(&json).map_err(|e| StateError::Serialization {
                key: key.to_string(),
                reason: e.to_string(),
            })
        })
        .transpose()
    }

    fn put(&self, key: &str, value: Value) -> Result<(), StateError> {
        let json = serde_json::to_string(&value).map_err(|e| StateError::Serialization {
            key: key.to_string(),
            reason: e.to_string(),
        })?;

        let conn = self.conn.lock().map_err(|_| StateError::LockPoisoned)?;
        conn.execute(
            r#"
            INSERT INTO state (key, value, updated_at) VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
            "#,
            params![key, json, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_get_missing_key() {
        let store = SqliteStateStore::in_memory().unwrap();
        assert_eq!(store.get("missing").unwrap(), None);
    }

    #[test]
    fn test_put_then_get() {
        let store = SqliteStateStore::in_memory().unwrap();
        store.put("k", json!({"signal.xml": "GeoPcDx"})).unwrap();
        assert_eq!(
            store.get("k").unwrap(),
            Some(json!({"signal.xml": "GeoPcDx"}))
        );
    }

    #[test]
    fn test_put_overwrites() {
        let store = SqliteStateStore::in_memory().unwrap();
        store.put("k", json!({"a": "XSec"})).unwrap();
        store.put("k", json!({})).unwrap();
        assert_eq!(store.get("k").unwrap(), Some(json!({})));
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("state.db");

        {
            let store = SqliteStateStore::new(&db_path).unwrap();
            store.put("k", json!({"x.xml": "TgPcDx"})).unwrap();
        }

        let store = SqliteStateStore::new(&db_path).unwrap();
        assert_eq!(store.get("k").unwrap(), Some(json!({"x.xml": "TgPcDx"})));
    }

    #[test]
    fn test_corrupt_value_is_reported() {
        let store = SqliteStateStore::in_memory().unwrap();
        {
            let conn = store.conn.lock().unwrap();
            conn.execute(
                "INSERT INTO state (key, value, updated_at) VALUES ('k', 'not json', '')",
                [],
            )
            .unwrap();
        }
        let err = store.get("k").unwrap_err();
        assert!(matches!(err, StateError::Serialization { .. }));
    }
}
