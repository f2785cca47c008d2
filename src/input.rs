//! Input validation
//!
//! Turns the raw pipeline inputs into a validated value object before any
//! network or file operation happens. Unset inputs arrive as empty
//! environment variables, so empty strings count as absent.

use crate::cli::Cli;
use crate::error::{SetupError, SetupResult};
use semver::Version;

/// Validated inputs for one pipeline run
#[derive(Debug, Clone)]
pub struct TaskInput {
    /// Normalized toolchain version
    pub version: Version,
    /// Name of the Artifactory integration to cache through, if given
    pub cache_integration: Option<String>,
    /// Remote repository to cache through, if given
    pub cache_repository: Option<String>,
}

impl TaskInput {
    /// Read and validate the pipeline inputs.
    ///
    /// The version is required and must parse as a semantic version; the
    /// cache inputs are optional and passed through untouched.
    pub fn read(cli: &Cli) -> SetupResult<Self> {
        let raw = non_empty(cli.version.as_deref()).ok_or(SetupError::VersionMissing)?;
        // Pipelines commonly pass tag-style versions like "v1.21.5"
        let trimmed = raw.trim();
        let trimmed = trimmed.strip_prefix(['v', 'V']).unwrap_or(trimmed);
        let version = Version::parse(trimmed).map_err(|_| SetupError::VersionNotSemver)?;

        Ok(Self {
            version,
            cache_integration: non_empty(cli.cache_integration.as_deref()).map(str::to_string),
            cache_repository: non_empty(cli.cache_repository.as_deref()).map(str::to_string),
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}
