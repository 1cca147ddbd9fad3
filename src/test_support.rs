use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// A shell script standing in for the test runner.
///
/// Every invocation records its arguments, one per line, next to the script.
#[cfg(unix)]
pub(crate) struct FakeRunner {
    pub(crate) path: PathBuf,
    args_file: PathBuf,
}

#[cfg(unix)]
impl FakeRunner {
    /// Install a runner at `dir/name` that exits with `exit_code`.
    pub(crate) fn install(dir: &Path, name: &str, exit_code: i32) -> Self {
        Self::install_script(dir, name, &format!("exit {}\n", exit_code))
    }

    /// Install a runner at `dir/name` that records its arguments, then runs `body`.
    pub(crate) fn install_script(dir: &Path, name: &str, body: &str) -> Self {
        use std::os::unix::fs::PermissionsExt;

        std::fs::create_dir_all(dir).unwrap();
        let path = dir.join(name);
        let args_file = dir.join(format!("{}.args", name));

        let script = format!(
            "#!/bin/sh\n\
             : > '{args}'\n\
             for arg in \"$@\"; do printf '%s\\n' \"$arg\" >> '{args}'; done\n\
             {body}",
            args = args_file.display(),
            body = body
        );
        std::fs::write(&path, script).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();

        Self { path, args_file }
    }

    /// Arguments received by the most recent invocation.
    pub(crate) fn recorded_args(&self) -> Vec<String> {
        let content = std::fs::read_to_string(&self.args_file).unwrap_or_else(|e| {
            panic!(
                "runner '{}' was not invoked ({}): {}",
                self.path.display(),
                self.args_file.display(),
                e
            )
        });
        content.lines().map(str::to_string).collect()
    }
}
