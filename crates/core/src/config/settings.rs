//! Settings read straight from the configuration file.

use std::path::PathBuf;
use tracing::warn;

use super::loader::load_config_or_default;
use crate::serz::SettingsSource;

/// [`SettingsSource`] that reloads the configuration file (and environment)
/// every time the serz path is needed.
#[derive(Debug, Clone)]
pub struct FileSettings {
    path: PathBuf,
}

impl FileSettings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsSource for FileSettings {
    fn serz_path(&self) -> Option<String> {
        match load_config_or_default(&self.path) {
            Ok(config) => Some(config.serz.exe_path),
            Err(e) => {
                warn!(path = %self.path.display(), "Failed to reload configuration: {}", e);
                None
            }
        }
    }
}
