//! Host platform classification.
//!
//! The launcher only distinguishes three cases. Everything that is neither
//! Windows nor Linux (macOS, the BSDs, ...) shares the home-directory lookup.

use std::fmt;

/// System name reported for Windows hosts.
pub const WINDOWS: &str = "Windows";

/// System name reported for Linux hosts.
pub const LINUX: &str = "Linux";

/// The host operating system, as far as runner resolution cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Linux,
    /// Any other system, keeping its name for diagnostics.
    Other(String),
}

impl Platform {
    /// Classify a system name such as `"Windows"`, `"Linux"` or `"Darwin"`.
    ///
    /// Matching is exact: only the two canonical names select a dedicated
    /// branch, every other name falls into [`Platform::Other`].
    pub fn from_system_name(name: &str) -> Self {
        match name {
            WINDOWS => Platform::Windows,
            LINUX => Platform::Linux,
            other => Platform::Other(other.to_string()),
        }
    }

    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        Self::from_system_name(system_name())
    }

    /// Human-readable system name.
    pub fn name(&self) -> &str {
        match self {
            Platform::Windows => WINDOWS,
            Platform::Linux => LINUX,
            Platform::Other(name) => name,
        }
    }
}

/// System name of the compile target, spelled the way `uname -s` reports it.
fn system_name() -> &'static str {
    match std::env::consts::OS {
        "windows" => WINDOWS,
        "linux" => LINUX,
        "macos" | "ios" => "Darwin",
        "freebsd" => "FreeBSD",
        "netbsd" => "NetBSD",
        "openbsd" => "OpenBSD",
        other => other,
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
