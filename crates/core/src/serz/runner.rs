//! Running serz as a subprocess.

use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tokio::time::{timeout, Duration};
use tracing::debug;

use super::error::SerzError;
use super::plan::SerzInvocation;

/// Text serz prints on stdout when a conversion succeeds.
pub const SUCCESS_MARKER: &str = "Conversion complete";

/// Captured output of a finished serz run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// Output of a successful run.
    pub fn success() -> Self {
        Self::new(SUCCESS_MARKER, "")
    }

    /// Decides whether the run succeeded.
    ///
    /// serz writes its own errors to stdout and exits normally, so the exit
    /// code is ignored: anything on stderr is a failure, and so is a stdout
    /// without the success marker.
    pub fn interpret(&self) -> Result<(), SerzError> {
        if !self.stderr.is_empty() {
            return Err(SerzError::conversion_failed(self.stderr.clone()));
        }
        if !self.stdout.contains(SUCCESS_MARKER) {
            return Err(SerzError::conversion_failed(self.stdout.clone()));
        }
        Ok(())
    }
}

/// Something that can execute a serz invocation and capture its output.
#[async_trait]
pub trait ToolRunner: Send + Sync {
    /// Returns the name of this runner implementation.
    fn name(&self) -> &str;

    /// Runs the invocation to completion and returns both output streams.
    async fn run(&self, invocation: &SerzInvocation) -> Result<ToolOutput, SerzError>;
}

/// Runs serz with `tokio::process`.
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner {
    timeout: Option<Duration>,
}

impl ProcessRunner {
    /// Creates a runner that waits for serz as long as it takes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the timeout in seconds. The child is killed when it expires.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout = Some(Duration::from_secs(timeout_secs));
        self
    }

    fn build_command(invocation: &SerzInvocation) -> Command {
        let mut command = Command::new(&invocation.executable);

        // serz parses its own command line, so keep the quoting it expects
        #[cfg(windows)]
        command.raw_arg(invocation.raw_args());
        #[cfg(not(windows))]
        command.args(invocation.args());

        command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        command
    }
}

#[async_trait]
impl ToolRunner for ProcessRunner {
    fn name(&self) -> &str {
        "process"
    }

    async fn run(&self, invocation: &SerzInvocation) -> Result<ToolOutput, SerzError> {
        let mut command = Self::build_command(invocation);
        let output = match self.timeout {
            Some(limit) => timeout(limit, command.output())
                .await
                .map_err(|_| SerzError::Timeout {
                    timeout_secs: limit.as_secs(),
                })?,
            None => command.output().await,
        }
        .map_err(|e| SerzError::Spawn {
            executable: invocation.executable.clone(),
            source: e,
        })?;

        debug!(status = ?output.status.code(), "serz exited");

        Ok(ToolOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
