//! Special-binary recovery map.
//!
//! serz cannot write `GeoPcDx`, `TgPcDx` or `XSec` files directly: they are
//! converted to plain `.xml`, and converting that `.xml` back yields a `.bin`.
//! The map remembers, per converted `.xml` path, which extension the original
//! file had so the `.bin` can be renamed back.
//!
//! Every write reads the whole map, upserts one entry and writes the whole
//! map back. Nothing serializes concurrent writers, so two conversions
//! recording at the same time race and the last writer wins. Entries are
//! never removed.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use super::{StateError, StateStore};

/// State key holding the recovery map.
pub const SPECIAL_BIN_FILES_KEY: &str = "specialBinFiles";

/// Converted file path -> original special extension.
#[derive(Clone)]
pub struct RecoveryMap {
    store: Arc<dyn StateStore>,
}

impl RecoveryMap {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    /// Remembers that `converted_path` came from a file with `extension`.
    /// Recording the same path again overwrites the previous entry.
    pub fn record(&self, converted_path: &Path, extension: &str) -> Result<(), StateError> {
        let mut map = self.load()?;
        map.insert(
            Self::path_key(converted_path),
            Value::String(extension.to_string()),
        );
        self.store.put(SPECIAL_BIN_FILES_KEY, Value::Object(map))
    }

    /// Original special extension for `path`, if one was recorded.
    pub fn lookup(&self, path: &Path) -> Result<Option<String>, StateError> {
        let map = self.load()?;
        Ok(map
            .get(&Self::path_key(path))
            .and_then(Value::as_str)
            .map(str::to_string))
    }

    /// All recorded entries, sorted by path.
    pub fn entries(&self) -> Result<BTreeMap<String, String>, StateError> {
        Ok(self
            .load()?
            .into_iter()
            .filter_map(|(path, ext)| ext.as_str().map(|e| (path, e.to_string())))
            .collect())
    }

    /// Reads the stored object, initializing it to `{}` on first access.
    fn load(&self) -> Result<Map<String, Value>, StateError> {
        match self.store.get(SPECIAL_BIN_FILES_KEY)? {
            Some(Value::Object(map)) => Ok(map),
            Some(other) => Err(StateError::Serialization {
                key: SPECIAL_BIN_FILES_KEY.to_string(),
                reason: format!("expected an object, found {}", other),
            }),
            None => {
                self.store.put(SPECIAL_BIN_FILES_KEY, Value::Object(Map::new()))?;
                Ok(Map::new())
            }
        }
    }

    fn path_key(path: &Path) -> String {
        path.to_string_lossy().into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MemoryStateStore;
    use serde_json::json;

    fn map_with_store() -> (RecoveryMap, Arc<MemoryStateStore>) {
        let store = Arc::new(MemoryStateStore::new());
        (RecoveryMap::new(store.clone()), store)
    }

    #[test]
    fn test_first_access_initializes_empty_object() {
        let (map, store) = map_with_store();
        assert_eq!(map.lookup(Path::new("a.xml")).unwrap(), None);
        assert_eq!(store.get(SPECIAL_BIN_FILES_KEY).unwrap(), Some(json!({})));
    }

    #[test]
    fn test_record_and_lookup() {
        let (map, store) = map_with_store();
        map.record(Path::new("signal.xml"), "GeoPcDx").unwrap();

        assert_eq!(
            map.lookup(Path::new("signal.xml")).unwrap(),
            Some("GeoPcDx".to_string())
        );
        assert_eq!(
            store.get(SPECIAL_BIN_FILES_KEY).unwrap(),
            Some(json!({"signal.xml": "GeoPcDx"}))
        );
    }

    #[test]
    fn test_record_overwrites_same_path() {
        let (map, _) = map_with_store();
        map.record(Path::new("signal.xml"), "GeoPcDx").unwrap();
        map.record(Path::new("signal.xml"), "TgPcDx").unwrap();

        let entries = map.entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries["signal.xml"], "TgPcDx");
    }

    #[test]
    fn test_record_keeps_other_entries() {
        let (map, _) = map_with_store();
        map.record(Path::new("a.xml"), "GeoPcDx").unwrap();
        map.record(Path::new("b.xml"), "XSec").unwrap();

        let entries = map.entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries["a.xml"], "GeoPcDx");
        assert_eq!(entries["b.xml"], "XSec");
    }

    #[test]
    fn test_non_object_value_is_an_error() {
        let (map, store) = map_with_store();
        store.put(SPECIAL_BIN_FILES_KEY, json!([1, 2])).unwrap();
        let err = map.lookup(Path::new("a.xml")).unwrap_err();
        assert!(matches!(err, StateError::Serialization { .. }));
    }
}
