//! CLI argument definitions using clap derive
//!
//! Inputs mirror what the pipeline engine injects through the environment,
//! so every flag has an `env` fallback matching the engine's variable names.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Install a Go toolchain for subsequent pipeline steps
///
/// Downloads the requested Go distribution for the current platform,
/// extracts it into the step workspace and exports GOROOT/GOPATH/PATH
/// for the rest of the pipeline run.
#[derive(Parser, Debug)]
#[command(name = "setup-go")]
#[command(author, about, long_about = None)]
pub struct Cli {
    /// Go version to install (semver, e.g. 1.21.5)
    #[arg(long, env = "version")]
    pub version: Option<String>,

    /// Name of the Artifactory integration used as a download cache
    #[arg(long, env = "cacheIntegration")]
    pub cache_integration: Option<String>,

    /// Artifactory remote repository that proxies go.dev downloads
    #[arg(long, env = "cacheRepository")]
    pub cache_repository: Option<String>,

    /// Step workspace directory the toolchain is installed under
    #[arg(long, env = "step_workspace_dir")]
    pub workspace: Option<PathBuf>,

    /// Increase verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
