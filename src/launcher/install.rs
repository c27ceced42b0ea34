//! Dependency installation through pip.

use std::path::Path;

use crate::project::MANIFEST;
use crate::shell::{CommandSpec, RunOutcome};
use crate::ui::UserInterface;

use super::Launcher;

/// How an install ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The manifest does not exist; nothing was run.
    MissingManifest,
    /// pip ran to completion (with this exit code).
    Completed(Option<i32>),
    /// The operator interrupted pip.
    Interrupted,
    /// pip could not be started.
    Failed,
}

/// Command that installs the manifest.
pub fn install_command(python: &str, project_root: &Path) -> CommandSpec {
    CommandSpec::new(python)
        .args(["-m", "pip", "install", "-r", MANIFEST])
        .current_dir(project_root)
}

impl Launcher<'_> {
    /// Install the manifest and block until pip exits.
    ///
    /// Success is reported whenever pip could be started; its exit code is
    /// only logged.
    pub fn install_dependencies(&self, ui: &mut dyn UserInterface) -> InstallOutcome {
        ui.show_header("Installing Dependencies...");

        if !self.project_root.join(MANIFEST).exists() {
            ui.error(&format!("{} not found", MANIFEST));
            return InstallOutcome::MissingManifest;
        }

        ui.message(&format!("Running: pip install -r {}", MANIFEST));
        ui.message("");

        let spec = install_command(&self.python, self.project_root);
        match self.runner.run(&spec) {
            Ok(RunOutcome::Exited(code)) => {
                if code != Some(0) {
                    tracing::warn!("`{}` exited with code {:?}", spec.display(), code);
                }
                ui.message("");
                ui.success("Dependencies installed successfully!");
                InstallOutcome::Completed(code)
            }
            Ok(RunOutcome::Interrupted) => {
                ui.message("");
                ui.warning("Installation interrupted.");
                InstallOutcome::Interrupted
            }
            Err(e) => {
                ui.error(&format!("Error installing dependencies: {}", e));
                InstallOutcome::Failed
            }
        }
    }
}
