//! Python interpreter discovery and import probes.
//!
//! A library "loads" when the project's interpreter can import it:
//! `<python> -c "import <module>"` exits with status zero.
//!
//! # Example
//!
//! ```
//! use launchpad::requirements::probe::{import_command, resolve_python};
//!
//! let python = resolve_python(Some("/opt/venv/bin/python"), &[]);
//! assert_eq!(python, "/opt/venv/bin/python");
//! assert_eq!(
//!     import_command(&python, "pandas").display(),
//!     "/opt/venv/bin/python -c import pandas"
//! );
//! ```

use std::path::{Path, PathBuf};

use crate::shell::CommandSpec;

/// Interpreter names tried in order when none is configured.
pub const PYTHON_CANDIDATES: &[&str] = &["python3", "python"];

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
        if cfg!(windows) {
            let exe = dir.join(format!("{}.exe", tool));
            if exe.is_file() {
                return Some(exe);
            }
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Pick the interpreter to use.
///
/// A configured interpreter wins. Otherwise the first candidate found on
/// `path_entries` is used; if none is found the bare name `python3` is
/// returned so the failure surfaces when it is run.
pub fn resolve_python(configured: Option<&str>, path_entries: &[PathBuf]) -> String {
    if let Some(python) = configured {
        return python.to_string();
    }

    PYTHON_CANDIDATES
        .iter()
        .find(|name| resolve_tool_path(name, path_entries).is_some())
        .unwrap_or(&PYTHON_CANDIDATES[0])
        .to_string()
}

/// Command that succeeds iff `module` is importable.
pub fn import_command(python: &str, module: &str) -> CommandSpec {
    CommandSpec::new(python).args(["-c".to_string(), format!("import {}", module)])
}
