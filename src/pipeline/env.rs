//! Pipeline environment mutation
//!
//! Exports land in two places: the current process environment, so commands
//! run later in this step (like `go env`) already see them, and optional
//! hand-off files the pipeline engine sources before subsequent steps.

use crate::error::{SetupError, SetupResult};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment surface exposed to subsequent pipeline steps
pub trait PipelineEnv: Send + Sync {
    /// Export an environment variable for the rest of the run.
    fn export_env(&self, key: &str, value: &str) -> SetupResult<()>;

    /// Append a directory to the PATH seen by the rest of the run.
    fn append_path(&self, dir: &Path) -> SetupResult<()>;
}

/// Production environment surface for a pipeline step.
///
/// Hand-off file locations come from `PIPELINE_ENV_FILE` and
/// `PIPELINE_PATH_FILE`; when the engine does not provide them, exports
/// still apply to this process so the remainder of the step works.
pub struct StepEnv {
    env_file: Option<PathBuf>,
    path_file: Option<PathBuf>,
}

impl StepEnv {
    pub fn from_env() -> Self {
        Self {
            env_file: file_from_var("PIPELINE_ENV_FILE"),
            path_file: file_from_var("PIPELINE_PATH_FILE"),
        }
    }

    #[cfg(test)]
    fn with_files(env_file: Option<PathBuf>, path_file: Option<PathBuf>) -> Self {
        Self {
            env_file,
            path_file,
        }
    }
}

impl PipelineEnv for StepEnv {
    fn export_env(&self, key: &str, value: &str) -> SetupResult<()> {
        std::env::set_var(key, value);
        if let Some(ref file) = self.env_file {
            append_line(file, &format!("{key}={value}"))?;
        } else {
            debug!("PIPELINE_ENV_FILE not set; {key} exported to this process only");
        }
        Ok(())
    }

    fn append_path(&self, dir: &Path) -> SetupResult<()> {
        let current = std::env::var_os("PATH").unwrap_or_default();
        let entries = std::env::split_paths(&current)
            .chain(std::iter::once(dir.to_path_buf()));
        let joined = std::env::join_paths(entries)
            .map_err(|e| SetupError::Internal(format!("invalid PATH entry: {e}")))?;
        std::env::set_var("PATH", &joined);

        if let Some(ref file) = self.path_file {
            append_line(file, &dir.to_string_lossy())?;
        }
        Ok(())
    }
}

fn file_from_var(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

fn append_line(file: &Path, line: &str) -> SetupResult<()> {
    let mut handle = OpenOptions::new()
        .create(true)
        .append(true)
        .open(file)
        .map_err(|e| SetupError::io(format!("opening {}", file.display()), e))?;
    writeln!(handle, "{line}").map_err(|e| SetupError::io(format!("writing {}", file.display()), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn export_sets_process_env_and_writes_handoff_file() {
        let dir = tempfile::tempdir().unwrap();
        let env_file = dir.path().join("step.env");
        let env = StepEnv::with_files(Some(env_file.clone()), None);

        env.export_env("SETUP_GO_TEST_VAR", "value").unwrap();

        assert_eq!(std::env::var("SETUP_GO_TEST_VAR").unwrap(), "value");
        let written = std::fs::read_to_string(&env_file).unwrap();
        assert_eq!(written, "SETUP_GO_TEST_VAR=value\n");

        std::env::remove_var("SETUP_GO_TEST_VAR");
    }

    #[test]
    #[serial]
    fn append_path_extends_process_path() {
        let dir = tempfile::tempdir().unwrap();
        let path_file = dir.path().join("step.path");
        let env = StepEnv::with_files(None, Some(path_file.clone()));
        let original = std::env::var_os("PATH");

        env.append_path(dir.path()).unwrap();

        let path = std::env::var("PATH").unwrap();
        assert!(path.contains(dir.path().to_str().unwrap()));
        let written = std::fs::read_to_string(&path_file).unwrap();
        assert_eq!(written.trim_end(), dir.path().to_str().unwrap());

        match original {
            Some(p) => std::env::set_var("PATH", p),
            None => std::env::remove_var("PATH"),
        }
    }

    #[test]
    #[serial]
    fn missing_handoff_files_are_not_an_error() {
        let env = StepEnv::with_files(None, None);
        env.export_env("SETUP_GO_OTHER_VAR", "1").unwrap();
        std::env::remove_var("SETUP_GO_OTHER_VAR");
    }
}
