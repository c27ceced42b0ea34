//! Menu actions that start external processes.
//!
//! - [`dashboard`] serves the Streamlit app until it exits or Ctrl+C
//! - [`install`] installs the manifest with pip
//!
//! Failures are reported through the UI and control goes back to the
//! caller. The only error either action returns is an operator interrupt
//! that arrives before the dashboard starts.

pub mod dashboard;
pub mod install;

use std::path::Path;

use crate::config::LaunchpadConfig;
use crate::requirements::LibraryChecker;
use crate::shell::ProcessRunner;

pub use dashboard::{dashboard_command, DashboardOutcome};
pub use install::{install_command, InstallOutcome};

/// Runs the process-backed menu actions for one project.
pub struct Launcher<'a> {
    project_root: &'a Path,
    config: &'a LaunchpadConfig,
    runner: &'a dyn ProcessRunner,
    python: String,
}

impl<'a> Launcher<'a> {
    /// Create a launcher.
    pub fn new(
        project_root: &'a Path,
        config: &'a LaunchpadConfig,
        runner: &'a dyn ProcessRunner,
        python: impl Into<String>,
    ) -> Self {
        Self {
            project_root,
            config,
            runner,
            python: python.into(),
        }
    }

    fn checker(&self) -> LibraryChecker<'a> {
        LibraryChecker::new(self.runner, self.python.clone())
    }
}
