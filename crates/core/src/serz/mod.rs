//! Conversion coordinator for the serz tool.
//!
//! This module drives `serz.exe` to turn a Train Simulator file into its
//! text or binary sibling, and restores special binary extensions
//! (`GeoPcDx`, `TgPcDx`, `XSec`) that serz itself cannot produce.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use serzkit_core::serz::{ProcessRunner, Serz, StaticSettings};
//! use serzkit_core::state::{RecoveryMap, SqliteStateStore};
//!
//! let store = Arc::new(SqliteStateStore::new(Path::new("state.db"))?);
//! let serz = Serz::new(
//!     ProcessRunner::new(),
//!     Arc::new(StaticSettings::new("C:/RailWorks")),
//!     RecoveryMap::new(store),
//! );
//!
//! let converted = serz.convert(Path::new("C:/RailWorks/Content/track.bin")).await?;
//! println!("Converted to {}", converted.display());
//! ```

mod coordinator;
mod error;
mod executable;
mod plan;
mod runner;
mod settings;

pub use coordinator::Serz;
pub use error::{ErrorKind, SerzError};
pub use executable::{resolve_executable, SERZ_EXE_NAME};
pub use plan::{ConversionPlan, SerzInvocation};
pub use runner::{ProcessRunner, ToolOutput, ToolRunner, SUCCESS_MARKER};
pub use settings::{SettingsSource, StaticSettings};
