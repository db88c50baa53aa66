//! Where the serz path comes from.

/// Source of the configured serz path.
///
/// Queried on every conversion so edits to the configuration apply to the
/// next conversion without a restart.
pub trait SettingsSource: Send + Sync {
    /// The configured serz executable path or directory. `None` is treated
    /// the same as an empty string.
    fn serz_path(&self) -> Option<String>;
}

/// A fixed serz path.
#[derive(Debug, Clone, Default)]
pub struct StaticSettings {
    serz_path: Option<String>,
}

impl StaticSettings {
    pub fn new(serz_path: impl Into<String>) -> Self {
        Self {
            serz_path: Some(serz_path.into()),
        }
    }

    /// No serz path configured.
    pub fn unset() -> Self {
        Self::default()
    }
}

impl SettingsSource for StaticSettings {
    fn serz_path(&self) -> Option<String> {
        self.serz_path.clone()
    }
}
