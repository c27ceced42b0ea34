//! Interactive session loop.

use std::path::Path;

use crate::config::LaunchpadConfig;
use crate::detection::{check_artifacts, show_notebooks, show_visualizations};
use crate::error::Result;
use crate::launcher::Launcher;
use crate::pipeline::show_project_status;
use crate::project::{ARTIFACTS, REQUIRED_LIBRARIES};
use crate::requirements::LibraryChecker;
use crate::shell::interrupt::{self, InterruptGuard};
use crate::shell::ProcessRunner;
use crate::ui::{Prompt, UserInterface};

use super::state::{ExitReason, MenuChoice, MenuEvent, MenuState};

const CHOICE_PROMPT_KEY: &str = "choice";
const CONTINUE_PROMPT_KEY: &str = "continue";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The menu loop ended with a farewell.
    Exited(ExitReason),
    /// A required library was missing; the menu never opened.
    Terminated,
}

/// Drives the menu state machine against a UI.
pub struct MenuController<'a> {
    project_root: &'a Path,
    config: &'a LaunchpadConfig,
    runner: &'a dyn ProcessRunner,
    python: String,
    state: MenuState,
}

impl<'a> MenuController<'a> {
    /// Create a controller in the `Startup` state.
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
            state: MenuState::Startup,
        }
    }

    /// Current state.
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Run the session until exit.
    ///
    /// Interrupts end the session normally. Any other error is returned.
    /// SIGINT is held for the whole session and turned into
    /// [`MenuEvent::Interrupted`] after the step it arrived in.
    pub fn run(&mut self, ui: &mut dyn UserInterface) -> Result<SessionOutcome> {
        let _interrupts = InterruptGuard::install();
        ui.show_banner(&self.config.app_name);

        loop {
            match self.state {
                MenuState::Exit(reason) => {
                    self.farewell(ui, reason);
                    return Ok(SessionOutcome::Exited(reason));
                }
                MenuState::Terminated => return Ok(SessionOutcome::Terminated),
                _ => {}
            }

            let mut event = match self.step(ui) {
                Ok(event) => event,
                Err(e) if e.is_interrupt() => MenuEvent::Interrupted,
                Err(e) => return Err(e),
            };
            if interrupt::take() {
                event = MenuEvent::Interrupted;
            }
            let next = self.state.next(event);
            tracing::debug!("Menu transition {:?} -> {:?}", self.state, next);
            self.state = next;
        }
    }

    /// Perform the work of the current state and report what happened.
    fn step(&mut self, ui: &mut dyn UserInterface) -> Result<MenuEvent> {
        match self.state {
            MenuState::Startup => self.startup(ui),
            MenuState::Menu => {
                render_menu(ui);
                let line = ui.prompt(&Prompt::input(
                    CHOICE_PROMPT_KEY,
                    "Enter your choice (1-5)",
                ))?;
                if MenuChoice::parse(&line).is_none() {
                    ui.warning("Invalid choice. Please try again.");
                    pause(ui)?;
                }
                Ok(MenuEvent::Input(line))
            }
            MenuState::Dispatch(choice) => {
                self.dispatch(ui, choice)?;
                pause(ui)?;
                Ok(MenuEvent::Dispatched)
            }
            MenuState::Exit(_) | MenuState::Terminated => Ok(MenuEvent::Dispatched),
        }
    }

    fn startup(&self, ui: &mut dyn UserInterface) -> Result<MenuEvent> {
        tracing::debug!("Using interpreter {}", self.python);
        let checker = LibraryChecker::new(self.runner, self.python.clone());
        if !checker.check_required(ui, REQUIRED_LIBRARIES)?.passed() {
            return Ok(MenuEvent::StartupFailed);
        }

        ui.message("");
        check_artifacts(ui, self.project_root, ARTIFACTS);
        Ok(MenuEvent::StartupPassed)
    }

    fn dispatch(&self, ui: &mut dyn UserInterface, choice: MenuChoice) -> Result<()> {
        let launcher = Launcher::new(self.project_root, self.config, self.runner, &self.python);
        match choice {
            MenuChoice::Dashboard => {
                launcher.launch_dashboard(ui)?;
            }
            MenuChoice::Notebooks => {
                show_notebooks(ui, self.project_root);
                show_visualizations(ui, self.project_root);
            }
            MenuChoice::Status => {
                show_project_status(ui, self.project_root);
            }
            MenuChoice::Install => {
                launcher.install_dependencies(ui);
            }
            MenuChoice::Exit => {}
        }
        Ok(())
    }

    fn farewell(&self, ui: &mut dyn UserInterface, reason: ExitReason) {
        ui.message("");
        match reason {
            ExitReason::Chosen => {
                ui.success(&format!("Thank you for using {}!", self.config.app_name));
            }
            ExitReason::Interrupted => ui.message("Goodbye!"),
        }
    }
}

/// Print the numbered entries.
fn render_menu(ui: &mut dyn UserInterface) {
    ui.show_header("MAIN MENU");
    for choice in MenuChoice::ALL {
        ui.message(&format!("{}. {}", choice.key(), choice.label()));
    }
    ui.message("");
}

fn pause(ui: &mut dyn UserInterface) -> Result<()> {
    ui.prompt(&Prompt::pause(
        CONTINUE_PROMPT_KEY,
        "Press Enter to continue...",
    ))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LaunchpadError;
    use crate::project::{ENTRY_POINT, MANIFEST};
    use crate::shell::MockRunner;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn run_session(
        root: &Path,
        runner: &MockRunner,
        ui: &mut MockUI,
    ) -> (Result<SessionOutcome>, MenuState) {
        let _lock = interrupt::test_lock();
        let config = LaunchpadConfig::default();
        let mut controller = MenuController::new(root, &config, runner, "python3");
        let outcome = controller.run(ui);
        (outcome, controller.state())
    }

    #[test]
    fn missing_library_terminates_before_menu() {
        let temp = TempDir::new().unwrap();
        let runner = MockRunner::new().with_failing_probe("import numpy");
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("choice", vec!["5"]);

        let (outcome, state) = run_session(temp.path(), &runner, &mut ui);

        assert_eq!(outcome.unwrap(), SessionOutcome::Terminated);
        assert_eq!(state, MenuState::Terminated);
        assert!(ui.prompts_shown().is_empty());
        assert!(!ui.has_header("MAIN MENU"));
        // Artifact check is skipped too
        assert!(!ui.has_message("Checking data files..."));
    }

    #[test]
    fn exit_choice_says_goodbye() {
        let temp = TempDir::new().unwrap();
        let runner = MockRunner::new();
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("choice", vec!["5"]);

        let (outcome, _) = run_session(temp.path(), &runner, &mut ui);

        assert_eq!(outcome.unwrap(), SessionOutcome::Exited(ExitReason::Chosen));
        assert!(ui.has_success("Thank you for using Crime Data Analysis Project!"));
        assert!(ui.has_message("Checking data files..."));
        assert_eq!(ui.prompts_shown(), ["choice"]);
    }

    #[test]
    fn invalid_choice_warns_and_pauses() {
        let temp = TempDir::new().unwrap();
        let runner = MockRunner::new();
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("choice", vec!["7", "5"]);

        let (outcome, _) = run_session(temp.path(), &runner, &mut ui);

        assert!(outcome.is_ok());
        assert!(ui.has_warning("Invalid choice. Please try again."));
        assert_eq!(ui.prompts_shown(), ["choice", "continue", "choice"]);
        // Only the startup probes ran
        assert_eq!(runner.probes().len(), REQUIRED_LIBRARIES.len());
        assert!(runner.runs().is_empty());
    }

    #[test]
    fn status_choice_prints_stages() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("data_cleaning.ipynb"), "{}").unwrap();
        let runner = MockRunner::new();
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("choice", vec![" 3 ", "5"]);

        run_session(temp.path(), &runner, &mut ui).0.unwrap();

        assert!(ui.has_header("Project Status"));
        assert!(ui.has_warning("IN PROGRESS - Data Cleaning"));
        assert_eq!(ui.prompts_shown(), ["choice", "continue", "choice"]);
    }

    #[test]
    fn notebooks_choice_lists_notebooks_and_charts() {
        let temp = TempDir::new().unwrap();
        let runner = MockRunner::new();
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("choice", vec!["2", "5"]);

        run_session(temp.path(), &runner, &mut ui).0.unwrap();

        assert!(ui.has_header("Available Notebooks"));
        assert!(ui.has_warning("data_cleaning.ipynb (NOT FOUND)"));
        assert!(ui.has_warning("Visualizations directory not found!"));
    }

    #[test]
    fn dashboard_without_entry_point_starts_nothing() {
        let temp = TempDir::new().unwrap();
        let runner = MockRunner::new();
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("choice", vec!["1", "5"]);

        run_session(temp.path(), &runner, &mut ui).0.unwrap();

        assert!(ui.has_error("streamlit_app.py not found!"));
        assert!(runner.runs().is_empty());
    }

    #[test]
    fn dashboard_runs_streamlit() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(ENTRY_POINT), "").unwrap();
        let runner = MockRunner::new();
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("choice", vec!["1", "5"]);

        run_session(temp.path(), &runner, &mut ui).0.unwrap();

        assert_eq!(runner.runs().len(), 1);
        assert_eq!(runner.runs()[0].program, "streamlit");
    }

    #[test]
    fn install_choice_runs_pip_once() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(MANIFEST), "pandas\n").unwrap();
        let runner = MockRunner::new();
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("choice", vec!["4", "5"]);

        run_session(temp.path(), &runner, &mut ui).0.unwrap();

        assert_eq!(runner.runs().len(), 1);
        assert_eq!(
            runner.runs()[0].display(),
            "python3 -m pip install -r requirements.txt"
        );
        assert!(ui.has_success("Dependencies installed successfully!"));
    }

    #[test]
    fn interrupt_at_menu_exits_with_goodbye() {
        let temp = TempDir::new().unwrap();
        let runner = MockRunner::new();
        let mut ui = MockUI::new();
        ui.queue_interrupt("choice");

        let (outcome, state) = run_session(temp.path(), &runner, &mut ui);

        assert_eq!(
            outcome.unwrap(),
            SessionOutcome::Exited(ExitReason::Interrupted)
        );
        assert_eq!(state, MenuState::Exit(ExitReason::Interrupted));
        assert!(ui.has_message("Goodbye!"));
        assert!(!ui.has_success("Thank you"));
    }

    #[test]
    fn interrupt_at_pause_exits() {
        let temp = TempDir::new().unwrap();
        let runner = MockRunner::new();
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("choice", vec!["3"]);
        ui.queue_interrupt("continue");

        let (outcome, _) = run_session(temp.path(), &runner, &mut ui);
        assert_eq!(
            outcome.unwrap(),
            SessionOutcome::Exited(ExitReason::Interrupted)
        );
    }

    #[test]
    fn interrupt_during_library_check_at_startup_exits() {
        let temp = TempDir::new().unwrap();
        let runner = MockRunner::new().with_interrupt_on("import numpy");
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("choice", vec!["5"]);

        let (outcome, _) = run_session(temp.path(), &runner, &mut ui);

        assert_eq!(
            outcome.unwrap(),
            SessionOutcome::Exited(ExitReason::Interrupted)
        );
        assert!(ui.prompts_shown().is_empty());
        assert!(ui.has_message("Goodbye!"));
    }

    #[test]
    fn interrupt_during_dashboard_library_check_exits() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(ENTRY_POINT), "").unwrap();
        let runner = MockRunner::new().with_interrupt_on("import streamlit");
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("choice", vec!["1", "5"]);

        let (outcome, state) = run_session(temp.path(), &runner, &mut ui);

        assert_eq!(
            outcome.unwrap(),
            SessionOutcome::Exited(ExitReason::Interrupted)
        );
        assert_eq!(state, MenuState::Exit(ExitReason::Interrupted));
        assert!(runner.runs().is_empty());
        // No pause after the interrupted dispatch
        assert_eq!(ui.prompts_shown(), ["choice"]);
        assert!(ui.has_message("Goodbye!"));
    }

    #[test]
    fn interrupt_pending_after_a_step_exits() {
        let _lock = interrupt::test_lock();
        let temp = TempDir::new().unwrap();
        let config = LaunchpadConfig::default();
        let runner = MockRunner::new();
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("choice", vec!["5"]);

        // SIGINT while the startup probes ran
        interrupt::notify();
        let mut controller = MenuController::new(temp.path(), &config, &runner, "python3");
        let outcome = controller.run(&mut ui).unwrap();

        assert_eq!(outcome, SessionOutcome::Exited(ExitReason::Interrupted));
        assert!(ui.prompts_shown().is_empty());
        assert!(ui.has_message("Goodbye!"));
        assert!(!interrupt::take());
    }

    #[test]
    fn closed_input_is_an_error() {
        let temp = TempDir::new().unwrap();
        let runner = MockRunner::new();
        let mut ui = MockUI::new();

        let (outcome, state) = run_session(temp.path(), &runner, &mut ui);

        assert!(matches!(outcome, Err(LaunchpadError::InputClosed)));
        assert_eq!(state, MenuState::Menu);
    }

    #[test]
    fn menu_lists_five_entries() {
        let mut ui = MockUI::new();
        render_menu(&mut ui);
        assert!(ui.has_message("1. Run Streamlit Dashboard"));
        assert!(ui.has_message("5. Exit"));
        assert_eq!(
            ui.messages().iter().filter(|m| !m.is_empty()).count(),
            5
        );
    }
}
