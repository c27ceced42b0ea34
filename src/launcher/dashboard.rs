//! Streamlit dashboard launch.

use std::path::Path;

use crate::config::{LaunchpadConfig, DEFAULT_DASHBOARD_PORT};
use crate::error::Result;
use crate::project::{DASHBOARD_LIBRARY, ENTRY_POINT};
use crate::shell::{CommandSpec, RunOutcome};
use crate::ui::UserInterface;

use super::Launcher;

/// How a dashboard launch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardOutcome {
    /// Streamlit is not importable; nothing was started.
    MissingLibrary,
    /// The entry point does not exist; nothing was started.
    MissingEntryPoint,
    /// The server exited on its own.
    Exited(Option<i32>),
    /// The operator stopped the server with Ctrl+C.
    Stopped,
    /// The server could not be started.
    Failed,
}

/// Command that serves the dashboard.
pub fn dashboard_command(config: &LaunchpadConfig, project_root: &Path) -> CommandSpec {
    let mut spec = CommandSpec::new(&config.streamlit)
        .args(["run", ENTRY_POINT])
        .current_dir(project_root);
    if config.dashboard_port != DEFAULT_DASHBOARD_PORT {
        spec = spec.args([
            "--server.port".to_string(),
            config.dashboard_port.to_string(),
        ]);
    }
    spec
}

impl Launcher<'_> {
    /// Serve the dashboard and block until it exits or is interrupted.
    ///
    /// Ctrl+C while the server runs stops it and returns `Stopped`.
    ///
    /// # Errors
    ///
    /// Returns `Interrupted` if Ctrl+C arrives during the library check,
    /// before anything was started.
    pub fn launch_dashboard(&self, ui: &mut dyn UserInterface) -> Result<DashboardOutcome> {
        if !self.checker().check_optional(&DASHBOARD_LIBRARY)? {
            ui.error("Streamlit is not installed!");
            ui.show_hint("Run: pip install streamlit");
            return Ok(DashboardOutcome::MissingLibrary);
        }

        if !self.project_root.join(ENTRY_POINT).exists() {
            ui.error(&format!("{} not found!", ENTRY_POINT));
            return Ok(DashboardOutcome::MissingEntryPoint);
        }

        ui.show_header("Launching Streamlit Dashboard...");
        ui.message(&format!(
            "Dashboard will open at: {}",
            self.config.dashboard_url()
        ));
        ui.show_hint("Press Ctrl+C to stop the server");
        ui.message("");

        let spec = dashboard_command(self.config, self.project_root);
        let outcome = match self.runner.run(&spec) {
            Ok(RunOutcome::Interrupted) => {
                ui.message("");
                ui.success("Dashboard stopped.");
                DashboardOutcome::Stopped
            }
            Ok(RunOutcome::Exited(code)) => {
                tracing::debug!("Dashboard exited with code {:?}", code);
                DashboardOutcome::Exited(code)
            }
            Err(e) => {
                ui.error(&format!("Error: {}", e));
                DashboardOutcome::Failed
            }
        };
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockRunner;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn project_with_app() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(ENTRY_POINT), "import streamlit as st\n").unwrap();
        temp
    }

    #[test]
    fn default_command_has_no_port_flag() {
        let config = LaunchpadConfig::default();
        let spec = dashboard_command(&config, Path::new("/project"));
        assert_eq!(spec.display(), "streamlit run streamlit_app.py");
        assert_eq!(spec.cwd.as_deref(), Some(Path::new("/project")));
    }

    #[test]
    fn custom_port_is_passed() {
        let config = LaunchpadConfig {
            dashboard_port: 9000,
            ..Default::default()
        };
        let spec = dashboard_command(&config, Path::new("/project"));
        assert_eq!(
            spec.display(),
            "streamlit run streamlit_app.py --server.port 9000"
        );
    }

    #[test]
    fn missing_streamlit_starts_nothing() {
        let temp = project_with_app();
        let config = LaunchpadConfig::default();
        let runner = MockRunner::new().with_failing_probe("import streamlit");
        let launcher = Launcher::new(temp.path(), &config, &runner, "python3");
        let mut ui = MockUI::new();

        let outcome = launcher.launch_dashboard(&mut ui).unwrap();

        assert_eq!(outcome, DashboardOutcome::MissingLibrary);
        assert!(runner.runs().is_empty());
        assert!(ui.has_error("Streamlit is not installed!"));
        assert!(ui.has_hint("pip install streamlit"));
    }

    #[test]
    fn missing_entry_point_starts_nothing() {
        let temp = TempDir::new().unwrap();
        let config = LaunchpadConfig::default();
        let runner = MockRunner::new();
        let launcher = Launcher::new(temp.path(), &config, &runner, "python3");
        let mut ui = MockUI::new();

        let outcome = launcher.launch_dashboard(&mut ui).unwrap();

        assert_eq!(outcome, DashboardOutcome::MissingEntryPoint);
        assert!(runner.runs().is_empty());
        assert!(ui.has_error("streamlit_app.py not found!"));
    }

    #[test]
    fn launches_dashboard_once() {
        let temp = project_with_app();
        let config = LaunchpadConfig::default();
        let runner = MockRunner::new();
        let launcher = Launcher::new(temp.path(), &config, &runner, "python3");
        let mut ui = MockUI::new();

        let outcome = launcher.launch_dashboard(&mut ui).unwrap();

        assert_eq!(outcome, DashboardOutcome::Exited(Some(0)));
        assert_eq!(runner.runs().len(), 1);
        assert_eq!(runner.runs()[0].args, vec!["run", "streamlit_app.py"]);
        assert!(ui.has_message("http://localhost:8501"));
        assert!(ui.has_hint("Ctrl+C"));
    }

    #[test]
    fn interrupt_prints_stop_message() {
        let temp = project_with_app();
        let config = LaunchpadConfig::default();
        let runner = MockRunner::new().with_outcome(RunOutcome::Interrupted);
        let launcher = Launcher::new(temp.path(), &config, &runner, "python3");
        let mut ui = MockUI::new();

        assert_eq!(
            launcher.launch_dashboard(&mut ui).unwrap(),
            DashboardOutcome::Stopped
        );
        assert!(ui.has_success("Dashboard stopped."));
    }

    #[test]
    fn spawn_failure_is_reported() {
        let temp = project_with_app();
        let config = LaunchpadConfig::default();
        let runner = MockRunner::new().with_spawn_error("No such file or directory");
        let launcher = Launcher::new(temp.path(), &config, &runner, "python3");
        let mut ui = MockUI::new();

        assert_eq!(
            launcher.launch_dashboard(&mut ui).unwrap(),
            DashboardOutcome::Failed
        );
        assert!(ui.has_error("No such file or directory"));
    }

    #[test]
    fn interrupted_library_check_starts_nothing() {
        let temp = project_with_app();
        let config = LaunchpadConfig::default();
        let runner = MockRunner::new().with_interrupt_on("import streamlit");
        let launcher = Launcher::new(temp.path(), &config, &runner, "python3");
        let mut ui = MockUI::new();

        let err = launcher.launch_dashboard(&mut ui).unwrap_err();

        assert!(err.is_interrupt());
        assert!(runner.runs().is_empty());
        assert!(ui.errors().is_empty());
    }
}
