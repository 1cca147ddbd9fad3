//! Runner launch.
//!
//! Starts the resolved [`Invocation`] as a child process with inherited
//! stdio, blocks until it exits, and reports its exit code.

use crate::context::HostContext;
use crate::error::{LauncherError, Result};
use crate::exit_codes;
use crate::resolve::{Invocation, resolve_invocation};
use std::ffi::OsString;
use std::io::Write;
use std::process::{Command, ExitStatus};

/// Resolve the runner for `ctx` and run it with `args`.
///
/// The working directory announcement, when the resolution asks for one,
/// is written to `out`. Returns the runner's exit code.
pub fn run<W: Write>(ctx: &HostContext, args: Vec<OsString>, out: &mut W) -> Result<i32> {
    let invocation = resolve_invocation(ctx, args, |path| path.exists());

    if ctx.verbose {
        eprintln!("wrap-utr: platform: {}", ctx.platform);
        if let Some(cwd) = &invocation.announce_cwd {
            eprintln!(
                "wrap-utr: no runner in home directory, using path relative to {}",
                cwd.display()
            );
        }
        eprintln!("wrap-utr: running: {}", invocation.command_line());
    }

    let code = launch(&invocation, out)?;

    if ctx.verbose {
        eprintln!("wrap-utr: runner exited with code {}", code);
    }

    Ok(code)
}

/// Announce the working directory if required, then run the invocation to completion.
pub fn launch<W: Write>(invocation: &Invocation, out: &mut W) -> Result<i32> {
    if let Some(cwd) = &invocation.announce_cwd {
        writeln!(out, "{}", cwd.display()).map_err(LauncherError::Output)?;
        // The runner shares our stdout; keep the line ahead of its output.
        out.flush().map_err(LauncherError::Output)?;
    }

    let status = Command::new(&invocation.program)
        .args(&invocation.args)
        .status()
        .map_err(|e| LauncherError::from_spawn(invocation.program.clone(), e))?;

    Ok(exit_code_of(status))
}

/// Translate a child's exit status into the code this process should exit with.
pub fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return exit_codes::SIGNAL_BASE + signal;
        }
    }

    exit_codes::FAILURE
}
