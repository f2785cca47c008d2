//! Run orchestration
//!
//! One pipeline run: validate input, resolve the cache integration, prepare
//! the target folder, install, configure the environment, log it. Each step
//! either completes or short-circuits the run via `?`; the binary entry
//! point is the sole catch point.

use crate::cli::Cli;
use crate::environment;
use crate::error::{SetupError, SetupResult};
use crate::input::TaskInput;
use crate::installer;
use crate::integration::{self, EnvIntegrationDirectory};
use crate::pipeline::{ShellRunner, StepEnv};
use std::path::{Path, PathBuf};

/// Execute one setup-go run.
pub async fn run(cli: Cli) -> SetupResult<()> {
    let input = TaskInput::read(&cli)?;

    let directory = EnvIntegrationDirectory;
    let cache_integration =
        integration::find_artifactory_integration(&directory, input.cache_integration.as_deref())?;

    let target = create_target_folder(cli.workspace.as_deref())?;

    installer::install(
        &input.version,
        &target,
        cache_integration.as_ref(),
        input.cache_repository.as_deref(),
    )
    .await?;

    let env = StepEnv::from_env();
    let runner = ShellRunner;
    environment::configure(&env, &runner, &target).await?;
    environment::log_environment(&runner).await?;

    Ok(())
}

/// Create the folder the toolchain is installed into: `<workspace>/go`,
/// parents included. Defaults to the current directory when the engine does
/// not provide a workspace.
pub fn create_target_folder(workspace: Option<&Path>) -> SetupResult<PathBuf> {
    let base = match workspace {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir()
            .map_err(|e| SetupError::io("getting current directory", e))?,
    };
    let target = base.join("go");
    std::fs::create_dir_all(&target)
        .map_err(|e| SetupError::io(format!("creating {}", target.display()), e))?;
    Ok(target)
}
