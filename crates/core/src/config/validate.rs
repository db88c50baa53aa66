use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - serz.timeout_secs is not 0
///
/// The serz path itself is checked at conversion time, since it is re-read
/// before every conversion.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.serz.timeout_secs == Some(0) {
        return Err(ConfigError::ValidationError(
            "serz.timeout_secs cannot be 0".to_string(),
        ));
    }

    Ok(())
}
