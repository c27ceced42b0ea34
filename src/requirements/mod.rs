//! Python library requirement checking.
//!
//! - [`probe`] finds the interpreter and builds import probes
//! - [`checker`] runs the required (fatal) and optional (soft) checks

pub mod checker;
pub mod probe;

pub use checker::{LibraryChecker, LibraryReport};
pub use probe::{import_command, parse_system_path, resolve_python, resolve_tool_path};
