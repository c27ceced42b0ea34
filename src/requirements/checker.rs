//! Library requirement checking.
//!
//! The required set is a hard gate: the first library that fails to import
//! stops the check, and nothing after it is probed or reported.

use crate::error::Result;
use crate::project::LibraryRequirement;
use crate::shell::ProcessRunner;
use crate::ui::UserInterface;

use super::probe::import_command;

/// Outcome of checking the required libraries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryReport {
    /// Libraries that imported, in probe order.
    pub loaded: Vec<&'static str>,
    /// The first library that failed, if any.
    pub missing: Option<&'static str>,
}

impl LibraryReport {
    /// Whether every required library loaded.
    pub fn passed(&self) -> bool {
        self.missing.is_none()
    }
}

/// Checks libraries by importing them with the project interpreter.
pub struct LibraryChecker<'a> {
    runner: &'a dyn ProcessRunner,
    python: String,
}

impl<'a> LibraryChecker<'a> {
    /// Create a checker using `python` as the interpreter.
    pub fn new(runner: &'a dyn ProcessRunner, python: impl Into<String>) -> Self {
        Self {
            runner,
            python: python.into(),
        }
    }

    /// Whether a single library can be imported.
    ///
    /// # Errors
    ///
    /// Returns `Interrupted` if the operator interrupts the probe.
    pub fn can_import(&self, library: &LibraryRequirement) -> Result<bool> {
        let ok = self
            .runner
            .probe(&import_command(&self.python, library.module))?;
        tracing::debug!("import {} via {}: {}", library.module, self.python, ok);
        Ok(ok)
    }

    /// Check the required libraries in order, stopping at the first failure.
    ///
    /// Writes one progress line per probed library. An interrupted probe
    /// ends the check with an error and no summary.
    pub fn check_required(
        &self,
        ui: &mut dyn UserInterface,
        libraries: &[LibraryRequirement],
    ) -> Result<LibraryReport> {
        ui.message("Checking dependencies...");
        let mut report = LibraryReport::default();

        for library in libraries {
            let mut spinner = ui.start_spinner(&format!("import {}", library.module));
            let loaded = match self.can_import(library) {
                Ok(loaded) => loaded,
                Err(e) => {
                    spinner.finish_error(&format!("import {} interrupted", library.module));
                    return Err(e);
                }
            };
            if loaded {
                spinner.finish_success(library.module);
                report.loaded.push(library.module);
            } else {
                spinner.finish_error(&format!("Missing dependency: {}", library.module));
                report.missing = Some(library.module);
                break;
            }
        }

        if report.passed() {
            ui.success("All core dependencies are installed!");
        } else {
            ui.show_hint("Please run: pip install -r requirements.txt");
        }
        Ok(report)
    }

    /// Check a library that only gates a single action. Prints nothing.
    pub fn check_optional(&self, library: &LibraryRequirement) -> Result<bool> {
        self.can_import(library)
    }
}
