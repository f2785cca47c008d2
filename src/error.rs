//! Error types for the setup-go pipeline step
//!
//! All modules use `SetupResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for setup-go operations
pub type SetupResult<T> = Result<T, SetupError>;

/// All errors that can occur while installing the toolchain
#[derive(Error, Debug)]
pub enum SetupError {
    // Input errors
    #[error("version input is required")]
    VersionMissing,

    #[error("version input must be semver compatible")]
    VersionNotSemver,

    // Integration errors
    #[error("Input cacheIntegration is not an Artifactory Integration. Type: {0}")]
    IntegrationNotArtifactory(String),

    #[error("Integration not found: {0}")]
    IntegrationNotConfigured(String),

    #[error("Integration lookup failed: {0}")]
    IntegrationLookup(String),

    // Platform errors
    #[error("Architecture not supported")]
    UnsupportedArchitecture,

    // Download/extraction errors
    #[error("Failed to download {url}: {reason}")]
    Download { url: String, reason: String },

    #[error("Failed to extract {path}: {reason}")]
    Extract { path: PathBuf, reason: String },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Process errors
    #[error("Command failed: {command}")]
    CommandFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command execution error: {command}, stderr: {stderr}")]
    CommandExecution { command: String, stderr: String },

    // General errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SetupError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a command failed error
    pub fn command_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::CommandFailed {
            command: command.into(),
            source,
        }
    }

    /// Create a command execution error
    pub fn command_exec(command: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self::CommandExecution {
            command: command.into(),
            stderr: stderr.into(),
        }
    }

    /// Create a download error
    pub fn download(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::Download {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an extraction error
    pub fn extract(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Extract {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
