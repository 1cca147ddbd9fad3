//! Error types for wrap-utr.
//!
//! Uses thiserror for derive macros. Each variant maps to an exit code so
//! `main` can report the failure and exit without further translation.

use crate::exit_codes;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by the launcher itself (not by the runner it starts).
#[derive(Error, Debug)]
pub enum LauncherError {
    /// The current working directory could not be read.
    #[error("failed to get current working directory: {0}")]
    WorkingDirectory(#[source] io::Error),

    /// Writing the working directory line to stdout failed.
    #[error("failed to write to stdout: {0}")]
    Output(#[source] io::Error),

    /// The runner could not be found on the search path or at the resolved location.
    #[error("test runner '{}' not found: {source}", .program.display())]
    NotFound {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The runner exists but the OS refused to execute it.
    #[error("test runner '{}' is not executable: {source}", .program.display())]
    NotExecutable {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Any other failure while starting or waiting for the runner.
    #[error("failed to run test runner '{}': {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LauncherError {
    /// Classify an error returned by `Command::spawn`/`status` for `program`.
    pub fn from_spawn(program: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => LauncherError::NotFound { program, source },
            io::ErrorKind::PermissionDenied => LauncherError::NotExecutable { program, source },
            _ => LauncherError::Spawn { program, source },
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LauncherError::WorkingDirectory(_) => exit_codes::FAILURE,
            LauncherError::Output(_) => exit_codes::FAILURE,
            LauncherError::NotFound { .. } => exit_codes::NOT_FOUND,
            LauncherError::NotExecutable { .. } => exit_codes::NOT_EXECUTABLE,
            LauncherError::Spawn { .. } => exit_codes::FAILURE,
        }
    }
}

/// Result type alias for launcher operations.
pub type Result<T> = std::result::Result<T, LauncherError>;
