//! Persisted key-value state.
//!
//! A tiny store of JSON values keyed by name, plus the [`RecoveryMap`] that
//! remembers which special binary extension a converted `.xml` file came
//! from.

mod error;
mod memory;
mod recovery;
mod sqlite;
mod store;

pub use error::StateError;
pub use memory::MemoryStateStore;
pub use recovery::{RecoveryMap, SPECIAL_BIN_FILES_KEY};
pub use sqlite::SqliteStateStore;
pub use store::StateStore;
