//! End-to-end conversion of a single file.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::error::SerzError;
use super::executable::resolve_executable;
use super::plan::{ConversionPlan, SerzInvocation};
use super::runner::ToolRunner;
use super::settings::SettingsSource;
use crate::formats;
use crate::state::RecoveryMap;

/// Converts files with serz and keeps special binary extensions intact
/// across round trips.
pub struct Serz<R> {
    runner: R,
    settings: Arc<dyn SettingsSource>,
    recovery: RecoveryMap,
}

impl<R: ToolRunner> Serz<R> {
    pub fn new(runner: R, settings: Arc<dyn SettingsSource>, recovery: RecoveryMap) -> Self {
        Self {
            runner,
            settings,
            recovery,
        }
    }

    pub fn recovery(&self) -> &RecoveryMap {
        &self.recovery
    }

    /// Resolves the serz executable from the current settings.
    pub fn executable(&self) -> Result<PathBuf, SerzError> {
        resolve_executable(&self.settings.serz_path().unwrap_or_default())
    }

    /// Converts `file_path` and returns the path of the converted file.
    ///
    /// Partial output left behind by a failed serz run is not cleaned up, and
    /// nothing is retried.
    pub async fn convert(&self, file_path: &Path) -> Result<PathBuf, SerzError> {
        let executable = self.executable()?;
        let plan = ConversionPlan::for_path(file_path)?;

        info!(
            source = %plan.source.display(),
            target = %plan.target.display(),
            "Converting with serz"
        );

        // Recorded before running serz; a retry just rewrites the same entry
        if plan.is_special() {
            self.recovery.record(&plan.target, &plan.source_extension)?;
            debug!(
                target = %plan.target.display(),
                extension = %plan.source_extension,
                "Recorded special binary extension"
            );
        }

        let invocation = SerzInvocation::new(executable, &plan);
        debug!(runner = self.runner.name(), command = %invocation.command_line(), "Invoking serz");
        let output = self.runner.run(&invocation).await?;
        if let Err(e) = output.interpret() {
            warn!(command = %invocation.command_line(), "serz reported a failure: {}", e);
            return Err(e);
        }

        // Keyed by the file being converted now: a match means it is an .xml
        // that originally came from a special binary file
        let converted = match self.recovery.lookup(file_path)? {
            Some(special_ext) => self.restore_extension(&plan, &special_ext).await?,
            None => plan.target,
        };

        info!(output = %converted.display(), "Conversion complete");
        Ok(converted)
    }

    async fn restore_extension(
        &self,
        plan: &ConversionPlan,
        special_ext: &str,
    ) -> Result<PathBuf, SerzError> {
        let target_str = plan.target.to_str().ok_or_else(|| SerzError::NonUtf8Path {
            path: plan.target.clone(),
        })?;
        let restored = formats::replace_suffix(target_str, plan.target_extension, special_ext)
            .map(PathBuf::from)
            .ok_or_else(|| SerzError::UnsupportedExtension {
                path: plan.target.clone(),
                extension: plan.target_extension.to_string(),
            })?;

        tokio::fs::rename(&plan.target, &restored)
            .await
            .map_err(|e| SerzError::RenameFailed {
                from: plan.target.clone(),
                to: restored.clone(),
                source: e,
            })?;

        debug!(
            from = %plan.target.display(),
            to = %restored.display(),
            "Restored special binary extension"
        );
        Ok(restored)
    }
}
