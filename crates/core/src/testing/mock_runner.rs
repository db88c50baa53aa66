//! Mock serz runner for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::serz::{SerzError, SerzInvocation, ToolOutput, ToolRunner};

/// Mock implementation of the ToolRunner trait.
///
/// Provides controllable behavior for testing:
/// - Track invocations for assertions
/// - Queue stdout/stderr pairs to return
/// - Create the target file on success, like serz does
/// - Fail the next run with a given error
#[derive(Debug, Clone)]
pub struct MockToolRunner {
    /// Recorded invocations.
    invocations: Arc<RwLock<Vec<SerzInvocation>>>,
    /// Outputs returned in order; a successful output once exhausted.
    outputs: Arc<RwLock<VecDeque<ToolOutput>>>,
    /// If set, the next run will fail with this error.
    next_error: Arc<RwLock<Option<SerzError>>>,
    /// Whether successful runs write an empty target file.
    create_targets: Arc<RwLock<bool>>,
}

impl Default for MockToolRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl MockToolRunner {
    /// Create a new mock runner.
    pub fn new() -> Self {
        Self {
            invocations: Arc::new(RwLock::new(Vec::new())),
            outputs: Arc::new(RwLock::new(VecDeque::new())),
            next_error: Arc::new(RwLock::new(None)),
            create_targets: Arc::new(RwLock::new(true)),
        }
    }

    /// Get all recorded invocations.
    pub async fn invocations(&self) -> Vec<SerzInvocation> {
        self.invocations.read().await.clone()
    }

    /// Get the number of runs performed.
    pub async fn invocation_count(&self) -> usize {
        self.invocations.read().await.len()
    }

    /// Queue the output of a future run.
    pub async fn push_output(&self, output: ToolOutput) {
        self.outputs.write().await.push_back(output);
    }

    /// Configure the next run to fail with the given error.
    pub async fn set_next_error(&self, error: SerzError) {
        *self.next_error.write().await = Some(error);
    }

    /// Enable or disable writing the target file on success.
    pub async fn set_create_targets(&self, create: bool) {
        *self.create_targets.write().await = create;
    }
}

#[async_trait]
impl ToolRunner for MockToolRunner {
    fn name(&self) -> &str {
        "mock"
    }

    async fn run(&self, invocation: &SerzInvocation) -> Result<ToolOutput, SerzError> {
        if let Some(err) = self.next_error.write().await.take() {
            return Err(err);
        }

        self.invocations.write().await.push(invocation.clone());

        let output = self
            .outputs
            .write()
            .await
            .pop_front()
            .unwrap_or_else(ToolOutput::success);

        if output.interpret().is_ok() && *self.create_targets.read().await {
            tokio::fs::write(&invocation.target, b"")
                .await
                .map_err(|e| SerzError::Spawn {
                    executable: invocation.executable.clone(),
                    source: e,
                })?;
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::Direction;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn invocation(dir: &TempDir) -> SerzInvocation {
        SerzInvocation {
            executable: PathBuf::from("serz.exe"),
            source: dir.path().join("a.xml"),
            target: dir.path().join("a.bin"),
            direction: Direction::Bin,
        }
    }

    #[test]
    fn test_defaults_to_success_and_creates_target() {
        let dir = TempDir::new().unwrap();
        let runner = MockToolRunner::new();

        let output = tokio_test::block_on(runner.run(&invocation(&dir))).unwrap();
        assert_eq!(output, ToolOutput::success());
        assert!(dir.path().join("a.bin").exists());
    }

    #[tokio::test]
    async fn test_queued_outputs_in_order() {
        let dir = TempDir::new().unwrap();
        let runner = MockToolRunner::new();
        runner.push_output(ToolOutput::new("first", "")).await;
        runner.push_output(ToolOutput::new("", "second")).await;

        assert_eq!(runner.run(&invocation(&dir)).await.unwrap().stdout, "first");
        assert_eq!(runner.run(&invocation(&dir)).await.unwrap().stderr, "second");
        assert!(!dir.path().join("a.bin").exists());

        assert_eq!(runner.run(&invocation(&dir)).await.unwrap(), ToolOutput::success());
        assert_eq!(runner.invocation_count().await, 3);
        assert!(dir.path().join("a.bin").exists());
    }

    #[tokio::test]
    async fn test_next_error_is_taken_once() {
        let dir = TempDir::new().unwrap();
        let runner = MockToolRunner::new();
        runner
            .set_next_error(SerzError::Timeout { timeout_secs: 1 })
            .await;

        assert!(runner.run(&invocation(&dir)).await.is_err());
        assert!(runner.run(&invocation(&dir)).await.is_ok());
        assert_eq!(runner.invocation_count().await, 1);
    }
}
