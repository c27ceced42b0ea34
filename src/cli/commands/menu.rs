//! Menu command implementation.
//!
//! `launchpad` (or `launchpad menu`) runs the interactive session.

use std::path::Path;

use crate::config::LaunchpadConfig;
use crate::error::Result;
use crate::menu::{MenuController, SessionOutcome};
use crate::shell::ProcessRunner;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The menu command implementation.
pub struct MenuCommand<'a> {
    project_root: &'a Path,
    config: &'a LaunchpadConfig,
    runner: &'a dyn ProcessRunner,
    python: String,
}

impl<'a> MenuCommand<'a> {
    /// Create a new menu command.
    pub fn new(
        project_root: &'a Path,
        config: &'a LaunchpadConfig,
        runner: &'a dyn ProcessRunner,
        python: String,
    ) -> Self {
        Self {
            project_root,
            config,
            runner,
            python,
        }
    }
}

impl Command for MenuCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut controller = MenuController::new(
            self.project_root,
            self.config,
            self.runner,
            self.python.clone(),
        );

        match controller.run(ui)? {
            SessionOutcome::Exited(reason) => {
                tracing::debug!("Session ended: {:?}", reason);
                Ok(CommandResult::success())
            }
            SessionOutcome::Terminated => Ok(CommandResult::failure(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::{interrupt, MockRunner};
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn exit_choice_succeeds() {
        let _lock = interrupt::test_lock();
        let temp = TempDir::new().unwrap();
        let config = LaunchpadConfig::default();
        let runner = MockRunner::new();
        let cmd = MenuCommand::new(temp.path(), &config, &runner, "python3".to_string());
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("choice", vec!["5"]);

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.banners(), ["Crime Data Analysis Project"]);
    }

    #[test]
    fn failed_startup_exits_non_zero() {
        let _lock = interrupt::test_lock();
        let temp = TempDir::new().unwrap();
        let config = LaunchpadConfig::default();
        let runner = MockRunner::new().with_failing_probe("import pandas");
        let cmd = MenuCommand::new(temp.path(), &config, &runner, "python3".to_string());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert_eq!(runner.probes().len(), 1);
    }

    #[test]
    fn interrupted_session_succeeds() {
        let _lock = interrupt::test_lock();
        let temp = TempDir::new().unwrap();
        let config = LaunchpadConfig::default();
        let runner = MockRunner::new().with_interrupt_on("import pandas");
        let cmd = MenuCommand::new(temp.path(), &config, &runner, "python3".to_string());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("Goodbye!"));
    }

    #[test]
    fn custom_app_name_in_farewell() {
        let _lock = interrupt::test_lock();
        let temp = TempDir::new().unwrap();
        let config = LaunchpadConfig {
            app_name: "Precinct Study".to_string(),
            ..Default::default()
        };
        let runner = MockRunner::new();
        let cmd = MenuCommand::new(temp.path(), &config, &runner, "python3".to_string());
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("choice", vec!["5"]);

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_success("Thank you for using Precinct Study!"));
    }
}
