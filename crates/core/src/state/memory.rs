//! In-memory state store.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

use super::{StateError, StateStore};

/// Non-persistent [`StateStore`], used in tests and for one-off runs.
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    values: Mutex<HashMap<String, Value>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStateStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StateError> {
        let values = self.values.lock().map_err(|_| StateError::LockPoisoned)?;
        Ok(values.get(key).cloned())
    }

    fn put(&self, key: &str, value: Value) -> Result<(), StateError> {
        let mut values = self.values.lock().map_err(|_| StateError::LockPoisoned)?;
        values.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_missing_key() {
        let store = MemoryStateStore::new();
        assert_eq!(store.get("nope").unwrap(), None);
    }

    #[test]
    fn test_put_replaces_value() {
        let store = MemoryStateStore::new();
        store.put("k", json!({"a": "1"})).unwrap();
        store.put("k", json!({"b": "2"})).unwrap();
        assert_eq!(store.get("k").unwrap(), Some(json!({"b": "2"})));
    }
}
