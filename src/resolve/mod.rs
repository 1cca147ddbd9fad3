//! Test runner resolution.
//!
//! Maps a [`HostContext`] and the forwarded arguments to the exact
//! [`Invocation`] to launch. The decision table is fixed:
//!
//! | Platform | Program                                             |
//! |----------|-----------------------------------------------------|
//! | Windows  | `utr.bat`, found through the search path            |
//! | Linux    | `utr`, found through the search path                |
//! | Other    | `<home>/Graphics/utr` if it exists, else `Graphics/utr` relative to cwd |
//!
//! In the last fallback the working directory is announced on stdout before
//! launching. Resolution is pure: filesystem access goes through the
//! `exists` probe supplied by the caller.

use crate::context::HostContext;
use crate::platform::Platform;
use std::ffi::OsString;
use std::path::{Path, PathBuf};


/// Runner launched through the search path on Windows.
pub const WINDOWS_RUNNER: &str = "utr.bat";

/// Runner launched through the search path on Linux.
pub const LINUX_RUNNER: &str = "utr";

/// Runner location relative to the home directory or the working directory.
pub const RELATIVE_RUNNER: &str = "Graphics/utr";

/// How a platform locates its runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerLocation {
    /// A bare program name left to the OS search path.
    SearchPath(&'static str),

    /// [`RELATIVE_RUNNER`] under the home directory, falling back to the cwd.
    HomeOrWorkingDir,
}

impl RunnerLocation {
    /// Select the location strategy for a platform.
    pub fn for_platform(platform: &Platform) -> Self {
        match platform {
            Platform::Windows => RunnerLocation::SearchPath(WINDOWS_RUNNER),
            Platform::Linux => RunnerLocation::SearchPath(LINUX_RUNNER),
            Platform::Other(_) => RunnerLocation::HomeOrWorkingDir,
        }
    }
}

/// A fully resolved runner launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program to execute: a bare name, an absolute path, or a cwd-relative path.
    pub program: PathBuf,

    /// Arguments forwarded verbatim.
    pub args: Vec<OsString>,

    /// Directory to print on stdout before launching, if any.
    pub announce_cwd: Option<PathBuf>,
}

impl Invocation {
    /// Program followed by its arguments.
    pub fn argv(&self) -> Vec<OsString> {
        std::iter::once(self.program.as_os_str().to_os_string())
            .chain(self.args.iter().cloned())
            .collect()
    }

    /// Shell-quoted rendering of [`Invocation::argv`] for diagnostics.
    ///
    /// Non-UTF-8 components are rendered lossily; the launch itself is not.
    pub fn command_line(&self) -> String {
        let words: Vec<String> = self
            .argv()
            .iter()
            .map(|w| w.to_string_lossy().into_owned())
            .collect();
        shell_words::join(words)
    }
}

/// Resolve the runner invocation for `ctx`, forwarding `args` unchanged.
///
/// `exists` is consulted only on platforms that look under the home
/// directory, and at most once.
pub fn resolve_invocation<F>(ctx: &HostContext, args: Vec<OsString>, exists: F) -> Invocation
where
    F: Fn(&Path) -> bool,
{
    match RunnerLocation::for_platform(&ctx.platform) {
        RunnerLocation::SearchPath(program) => Invocation {
            program: PathBuf::from(program),
            args,
            announce_cwd: None,
        },
        RunnerLocation::HomeOrWorkingDir => match home_runner(ctx) {
            Some(candidate) if exists(&candidate) => Invocation {
                program: candidate,
                args,
                announce_cwd: None,
            },
            _ => Invocation {
                program: PathBuf::from(RELATIVE_RUNNER),
                args,
                announce_cwd: Some(ctx.cwd.clone()),
            },
        },
    }
}

/// `<home>/Graphics/utr`, when the home directory is known.
pub fn home_runner(ctx: &HostContext) -> Option<PathBuf> {
    ctx.home_dir.as_ref().map(|home| home.join(RELATIVE_RUNNER))
}
