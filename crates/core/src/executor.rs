use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// What a finished child process left behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Errors raised before a process produced an exit status.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    #[error("Failed to spawn process: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("Failed to collect process output: {0}")]
    Wait(#[source] std::io::Error),
    #[error("Process timed out after {0:?}")]
    TimedOut(Duration),
}

// ---------------------------------------------------------------------------
// Executor Trait
// ---------------------------------------------------------------------------

/// Runs an external program to completion.
///
/// Every element of `args` reaches the child as its own argv entry; no shell
/// is involved.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    async fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, ExecError>;
}

// ---------------------------------------------------------------------------
// Process Executor
// ---------------------------------------------------------------------------

/// Spawns real child processes with a bounded wait.
#[derive(Debug, Clone)]
pub struct ProcessExecutor {
    timeout: Duration,
}

impl ProcessExecutor {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl CommandExecutor for ProcessExecutor {
    async fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, ExecError> {
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // Dropping the wait future (timeout or caller disconnect) kills the child.
            .kill_on_drop(true)
            .spawn()
            .map_err(ExecError::Spawn)?;

        let pid = child.id();
        tracing::debug!(program, ?pid, "Spawned child process");

        match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(output) => {
                let output = output.map_err(ExecError::Wait)?;
                Ok(CommandOutput {
                    exit_code: output.status.code(),
                    stdout: output.stdout,
                    stderr: output.stderr,
                })
            }
            Err(_) => {
                tracing::warn!(program, ?pid, timeout = ?self.timeout, "Child process timed out, killed");
                Err(ExecError::TimedOut(self.timeout))
            }
        }
    }
}
