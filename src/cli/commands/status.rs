//! Status command implementation.
//!
//! `launchpad status` prints the derived stage statuses.

use std::path::Path;

use crate::cli::args::StatusArgs;
use crate::error::{LaunchpadError, Result};
use crate::pipeline::{project_status, show_project_status};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The status command implementation.
pub struct StatusCommand<'a> {
    project_root: &'a Path,
    args: StatusArgs,
}

impl<'a> StatusCommand<'a> {
    /// Create a new status command.
    pub fn new(project_root: &'a Path, args: StatusArgs) -> Self {
        Self { project_root, args }
    }
}

impl Command for StatusCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.json {
            let reports = project_status(self.project_root);
            let json = serde_json::to_string_pretty(&reports)
                .map_err(|e| LaunchpadError::Other(e.into()))?;
            ui.message(&json);
        } else {
            show_project_status(ui, self.project_root);
        }

        Ok(CommandResult::success())
    }
}
