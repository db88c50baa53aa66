use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Prefix of environment variables overriding the file, e.g.
/// `SERZKIT_SERZ__EXE_PATH`
const ENV_PREFIX: &str = "SERZKIT_";

fn figment(path: &Path) -> Figment {
    Figment::new()
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
}

/// Load configuration from file with environment variable overrides
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    figment(path)
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Like [`load_config`], but a missing file yields the defaults (plus any
/// environment overrides)
pub fn load_config_or_default(path: &Path) -> Result<Config, ConfigError> {
    figment(path)
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}
