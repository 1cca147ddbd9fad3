//! Host context resolution for wrap-utr.
//!
//! Everything the launcher needs to know about the machine it runs on
//! (platform, home directory, working directory, verbosity) is read once
//! here and passed down explicitly, so runner resolution never consults
//! process-wide state on its own.

use crate::error::{LauncherError, Result};
use crate::platform::Platform;
use std::env;
use std::ffi::OsStr;
use std::path::PathBuf;

/// Environment variable that enables resolution tracing on stderr.
pub const VERBOSE_ENV: &str = "WRAP_UTR_VERBOSE";

/// Snapshot of the host inputs used to locate the test runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostContext {
    /// Host operating system.
    pub platform: Platform,

    /// Current user's home directory, if one can be determined.
    pub home_dir: Option<PathBuf>,

    /// Current working directory of the launcher process.
    pub cwd: PathBuf,

    /// Whether to trace resolution decisions to stderr.
    pub verbose: bool,
}

impl HostContext {
    /// Resolve the context from the running process.
    ///
    /// # Returns
    ///
    /// * `Ok(HostContext)` - Successfully resolved context
    /// * `Err(LauncherError::WorkingDirectory)` - If the cwd cannot be read (exit code 1)
    pub fn resolve() -> Result<Self> {
        let cwd = env::current_dir().map_err(LauncherError::WorkingDirectory)?;

        Ok(Self {
            verbose: verbose_enabled(env::var_os(VERBOSE_ENV).as_deref()),
            ..Self::new(Platform::current(), dirs::home_dir(), cwd)
        })
    }

    /// Build a context from explicit values, for callers that already know them.
    pub fn new(platform: Platform, home_dir: Option<PathBuf>, cwd: PathBuf) -> Self {
        Self {
            platform,
            home_dir,
            cwd,
            verbose: false,
        }
    }
}

/// Interpret the value of [`VERBOSE_ENV`].
///
/// Unset, empty, `0` and `false` (any case) disable tracing.
fn verbose_enabled(value: Option<&OsStr>) -> bool {
    match value {
        None => false,
        Some(v) => {
            let v = v.to_string_lossy();
            let v = v.trim();
            !(v.is_empty() || v == "0" || v.eq_ignore_ascii_case("false"))
        }
    }
}
