//! Notebooks command implementation.

use std::path::Path;

use crate::detection::{show_notebooks, show_visualizations};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Lists the analysis notebooks and generated charts.
pub struct NotebooksCommand<'a> {
    project_root: &'a Path,
}

impl<'a> NotebooksCommand<'a> {
    pub fn new(project_root: &'a Path) -> Self {
        Self { project_root }
    }
}

impl Command for NotebooksCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        show_notebooks(ui, self.project_root);
        show_visualizations(ui, self.project_root);
        Ok(CommandResult::success())
    }
}
