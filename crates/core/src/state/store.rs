//! Storage trait for persisted state.

use serde_json::Value;

use super::error::StateError;

/// Key-value storage backend.
///
/// Values are whole JSON documents: `put` replaces whatever was stored under
/// the key. There is no merge and no transaction spanning a `get` and a
/// later `put`.
pub trait StateStore: Send + Sync {
    /// Get the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<Value>, StateError>;

    /// Store `value` under `key`, replacing any previous value.
    fn put(&self, key: &str, value: Value) -> Result<(), StateError>;
}
