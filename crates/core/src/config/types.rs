use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub serz: SerzConfig,
    #[serde(default)]
    pub state: StateConfig,
}

impl Config {
    /// State database location. Relative paths are taken relative to the
    /// directory of the configuration file.
    pub fn state_path(&self, config_path: &Path) -> PathBuf {
        if self.state.path.is_absolute() {
            return self.state.path.clone();
        }
        config_path
            .parent()
            .map(|dir| dir.join(&self.state.path))
            .unwrap_or_else(|| self.state.path.clone())
    }
}

/// serz executable configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SerzConfig {
    /// Path to serz.exe, or to the directory containing it (usually the
    /// RailWorks folder)
    #[serde(default)]
    pub exe_path: String,
    /// Kill serz if a conversion takes longer than this (default: no limit)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Persisted state configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StateConfig {
    #[serde(default = "default_state_path")]
    pub path: PathBuf,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            path: default_state_path(),
        }
    }
}

fn default_state_path() -> PathBuf {
    PathBuf::from("serzkit-state.db")
}
