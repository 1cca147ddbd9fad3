//! Exit code constants for wrap-utr.
//!
//! When the runner is launched, its own exit code is returned instead.
//! These codes cover the cases where the dispatcher itself fails:
//! - 0: Success
//! - 1: General failure (cwd unreadable, stdout closed, spawn error)
//! - 126: Runner found but not executable
//! - 127: Runner not found
//! - 128 + n: Runner killed by signal n (Unix)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// General failure, also used for child exit codes that do not fit in a byte.
pub const FAILURE: i32 = 1;

/// The resolved runner exists but could not be executed.
pub const NOT_EXECUTABLE: i32 = 126;

/// The resolved runner could not be found.
pub const NOT_FOUND: i32 = 127;

/// Base added to a signal number when the runner was killed by a signal.
pub const SIGNAL_BASE: i32 = 128;

/// Narrow an exit code to the byte a process can return.
///
/// Codes outside `0..=255` (negative or large Windows status values) become [`FAILURE`].
pub fn to_exit_byte(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(FAILURE as u8)
}
