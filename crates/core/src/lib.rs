pub mod config;
pub mod formats;
pub mod serz;
pub mod state;
pub mod testing;

pub use config::{
    load_config, load_config_from_str, load_config_or_default, validate_config, Config,
    ConfigError, FileSettings,
};
pub use formats::{FormatClass, ALL_EXTENSIONS, BINARY_EXTENSIONS, TEXT_EXTENSIONS};
pub use serz::{
    ErrorKind, ProcessRunner, Serz, SerzError, SettingsSource, StaticSettings, ToolOutput,
    ToolRunner,
};
pub use state::{MemoryStateStore, RecoveryMap, SqliteStateStore, StateError, StateStore};
