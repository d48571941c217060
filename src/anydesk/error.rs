//! Error type for AnyDesk controller calls.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial implementation

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used by every controller operation.
pub type Result<T> = std::result::Result<T, ControllerError>;

/// Errors that can occur when driving the AnyDesk command line.
///
/// Exactly one variant is produced per failed call.
#[derive(Error, Debug)]
pub enum ControllerError {
    /// No executable was found in the search path or the install directories.
    #[error("executable file '{name}' not found in search path")]
    BinaryNotFound { name: String },

    /// The executable was resolved but the process could not be started.
    #[error("failed to launch {}: {source}", .path.display())]
    ProcessLaunchFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// AnyDesk exited with one of its documented exit codes.
    #[error("{description}")]
    KnownExitCode {
        code: i32,
        description: &'static str,
    },

    /// AnyDesk printed `SERVICE_NOT_RUNNING` for an info query.
    #[error("service not running")]
    ServiceNotRunning,

    /// AnyDesk exited with a nonzero code that is not documented.
    #[error("AnyDesk exited with status {0}")]
    UnrecognizedFailure(i32),
}

impl ControllerError {
    /// Exit code carried by the error, if the process ran to completion.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::KnownExitCode { code, .. } => Some(*code),
            Self::UnrecognizedFailure(code) => Some(*code),
            _ => None,
        }
    }
}
