//! Build-agent primitives the step is composed from
//!
//! Everything with a side effect lives here: HTTP transfer, archive
//! extraction, subprocess execution and pipeline environment mutation.
//! The step logic above only decides what to request from these.

pub mod archive;
pub mod env;
pub mod exec;
pub mod transfer;

pub use env::{PipelineEnv, StepEnv};
pub use exec::{CommandOutput, CommandRunner, ShellRunner};
