//! setup-go - Go toolchain installer pipeline step
//!
//! Resolves the platform-specific download for a requested Go version,
//! fetches it (optionally through an Artifactory cache), extracts it into
//! the step workspace and exports the environment for subsequent steps.

pub mod cli;
pub mod environment;
pub mod error;
pub mod input;
pub mod installer;
pub mod integration;
pub mod pipeline;
pub mod platform;
pub mod runner;

pub use error::{SetupError, SetupResult};
