//! Check command implementation.
//!
//! `launchpad check` runs the startup checks without opening the menu.

use std::path::Path;

use crate::detection::check_artifacts;
use crate::error::Result;
use crate::project::{ARTIFACTS, REQUIRED_LIBRARIES};
use crate::requirements::LibraryChecker;
use crate::shell::ProcessRunner;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand<'a> {
    project_root: &'a Path,
    runner: &'a dyn ProcessRunner,
    python: String,
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command.
    pub fn new(project_root: &'a Path, runner: &'a dyn ProcessRunner, python: String) -> Self {
        Self {
            project_root,
            runner,
            python,
        }
    }
}

impl Command for CheckCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let checker = LibraryChecker::new(self.runner, self.python.clone());
        let libraries = checker.check_required(ui, REQUIRED_LIBRARIES)?;

        // Data files are informational and never change the exit code
        ui.message("");
        check_artifacts(ui, self.project_root, ARTIFACTS);

        if libraries.passed() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
