//! Subprocess execution through the platform shell

use crate::error::{SetupError, SetupResult};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Captured output of a finished command
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub std_out: String,
}

/// Runs commands on the build agent
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `command` to completion and capture its stdout.
    ///
    /// A nonzero exit status is an error carrying the command's stderr.
    async fn execute(&self, command: &str) -> SetupResult<CommandOutput>;
}

/// Runner that executes commands through `sh -c` (or `cmd /C` on Windows)
/// with the step's current environment, so PATH changes made earlier in the
/// run are visible.
pub struct ShellRunner;

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn execute(&self, command: &str) -> SetupResult<CommandOutput> {
        debug!("Executing: {command}");

        let mut cmd = if cfg!(windows) {
            let mut c = Command::new("cmd");
            c.args(["/C", command]);
            c
        } else {
            let mut c = Command::new("sh");
            c.args(["-c", command]);
            c
        };

        let output = cmd
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| SetupError::command_failed(command, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SetupError::command_exec(command, stderr.trim()));
        }

        Ok(CommandOutput {
            std_out: String::from_utf8_lossy(&output.stdout).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn captures_stdout() {
        let out = ShellRunner.execute("echo hello").await.unwrap();
        assert_eq!(out.std_out.trim(), "hello");
    }

    #[tokio::test]
    async fn nonzero_exit_is_an_error() {
        let err = ShellRunner.execute("exit 3").await.unwrap_err();
        assert!(err.to_string().contains("exit 3"));
    }

    #[tokio::test]
    async fn stderr_is_reported_on_failure() {
        let err = ShellRunner
            .execute("echo boom >&2; exit 1")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("boom"));
    }
}
