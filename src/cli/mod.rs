//! CLI argument collection for wrap-utr.
//!
//! The launcher owns no flags: every argument after the program name,
//! including `--help`, `--version` and `--`, belongs to the test runner.

use clap::Parser;
use std::ffi::OsString;

/// Launch the Unified Test Runner (utr) for this platform.
///
/// All arguments are forwarded unchanged to `utr.bat` (Windows), `utr`
/// (Linux) or `Graphics/utr` (other systems).
#[derive(Parser, Debug)]
#[command(name = "wrap-utr")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Arguments forwarded to the test runner.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    pub args: Vec<OsString>,
}

impl Cli {
    /// Parse the process arguments.
    pub fn parse_args() -> Self {
        Self::from_args(std::env::args_os())
    }

    /// Parse an explicit argv, program name first.
    pub fn from_args<I, T>(argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut argv = argv.into_iter().map(Into::into);
        let bin = argv.next().unwrap_or_else(|| OsString::from("wrap-utr"));
        // A leading `--` ends option parsing, so clap keeps every user
        // argument (a user's own `--` included) as a raw value.
        let escaped = [bin, OsString::from("--")].into_iter().chain(argv);
        Self::parse_from(escaped)
    }
}
