//! wrap-utr: platform-aware launcher for the Unified Test Runner (utr).
//!
//! This is the main entry point. It collects the arguments, resolves the
//! host context, runs the platform's runner, and exits with the runner's
//! exit code (or the launcher's own code when the runner cannot be started).

mod cli;
mod context;
mod error;
mod exit_codes;
mod launch;
mod platform;
mod resolve;

#[cfg(test)]
mod test_support;

use cli::Cli;
use context::HostContext;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let result =
        HostContext::resolve().and_then(|ctx| launch::run(&ctx, cli.args, &mut io::stdout()));

    match result {
        Ok(code) => ExitCode::from(exit_codes::to_exit_byte(code)),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(exit_codes::to_exit_byte(err.exit_code()))
        }
    }
}
