//! Environment configuration and diagnostics after install
//!
//! Exports GOROOT and PATH for the installed toolchain, then asks the
//! toolchain itself for its workspace path (GOPATH) and exports that too.

use crate::error::SetupResult;
use crate::pipeline::{CommandRunner, PipelineEnv};
use std::path::Path;
use tracing::info;

#[cfg(windows)]
const EOL: &str = "\r\n";
#[cfg(not(windows))]
const EOL: &str = "\n";

/// Export GOROOT/GOPATH and extend PATH for the toolchain under `target`.
///
/// GOROOT is `<target>/go` (the folder the archive carries). GOPATH comes
/// from `go env GOPATH`; an empty answer means no GOPATH export and no PATH
/// append for it.
pub async fn configure(
    env: &dyn PipelineEnv,
    runner: &dyn CommandRunner,
    target: &Path,
) -> SetupResult<()> {
    let go_root = target.join("go");
    let go_bin = go_root.join("bin");

    info!("Exporting GOROOT={}", go_root.display());
    env.export_env("GOROOT", &go_root.to_string_lossy())?;

    info!("Appending Go binaries location to PATH");
    env.append_path(&go_bin)?;

    let go_path = runner.execute("go env GOPATH").await?.std_out;
    let go_path = go_path.trim();
    if !go_path.is_empty() {
        env.export_env("GOPATH", go_path)?;
        info!("Appending GOPATH binaries location to PATH");
        env.append_path(&Path::new(go_path).join("bin"))?;
    }

    Ok(())
}

/// Run `go env` and log its full output for diagnostics.
pub async fn log_environment(runner: &dyn CommandRunner) -> SetupResult<()> {
    let output = runner.execute("go env").await?;
    info!("Go env:{EOL}{}", output.std_out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SetupError;
    use crate::pipeline::CommandOutput;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingEnv {
        exported: Mutex<Vec<(String, String)>>,
        appended: Mutex<Vec<PathBuf>>,
    }

    impl PipelineEnv for RecordingEnv {
        fn export_env(&self, key: &str, value: &str) -> SetupResult<()> {
            self.exported
                .lock()
                .unwrap()
                .push((key.to_string(), value.to_string()));
            Ok(())
        }

        fn append_path(&self, dir: &Path) -> SetupResult<()> {
            self.appended.lock().unwrap().push(dir.to_path_buf());
            Ok(())
        }
    }

    struct FixedRunner {
        std_out: String,
        fail: bool,
    }

    #[async_trait]
    impl CommandRunner for FixedRunner {
        async fn execute(&self, command: &str) -> SetupResult<CommandOutput> {
            if self.fail {
                return Err(SetupError::command_exec(command, "go not found"));
            }
            Ok(CommandOutput {
                std_out: self.std_out.clone(),
            })
        }
    }

    #[tokio::test]
    async fn exports_goroot_gopath_and_paths() {
        let env = RecordingEnv::default();
        let runner = FixedRunner {
            std_out: "/home/user/gopath\n".to_string(),
            fail: false,
        };
        let target = PathBuf::from("/workspace/go");

        configure(&env, &runner, &target).await.unwrap();

        let exported = env.exported.lock().unwrap();
        assert_eq!(
            *exported,
            vec![
                ("GOROOT".to_string(), "/workspace/go/go".to_string()),
                ("GOPATH".to_string(), "/home/user/gopath".to_string()),
            ]
        );
        let appended = env.appended.lock().unwrap();
        assert_eq!(
            *appended,
            vec![
                PathBuf::from("/workspace/go/go/bin"),
                PathBuf::from("/home/user/gopath/bin"),
            ]
        );
    }

    #[tokio::test]
    async fn empty_gopath_skips_export_and_append() {
        let env = RecordingEnv::default();
        let runner = FixedRunner {
            std_out: "\n".to_string(),
            fail: false,
        };

        configure(&env, &runner, Path::new("/workspace/go"))
            .await
            .unwrap();

        assert_eq!(env.exported.lock().unwrap().len(), 1);
        assert_eq!(env.appended.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn runner_failure_propagates() {
        let env = RecordingEnv::default();
        let runner = FixedRunner {
            std_out: String::new(),
            fail: true,
        };

        let err = configure(&env, &runner, Path::new("/workspace/go"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("go env GOPATH"));
    }

    #[tokio::test]
    async fn log_environment_runs_go_env() {
        let runner = FixedRunner {
            std_out: "GOARCH=amd64".to_string(),
            fail: false,
        };
        log_environment(&runner).await.unwrap();
    }
}
