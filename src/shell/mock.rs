//! Recording process runner for tests.
//!
//! # Example
//!
//! ```
//! use launchpad::shell::{CommandSpec, MockRunner, ProcessRunner, RunOutcome};
//!
//! let runner = MockRunner::new().with_failing_probe("seaborn");
//! let pandas = CommandSpec::new("python3").args(["-c", "import pandas"]);
//! let seaborn = CommandSpec::new("python3").args(["-c", "import seaborn"]);
//! assert!(runner.probe(&pandas).unwrap());
//! assert!(!runner.probe(&seaborn).unwrap());
//! assert_eq!(runner.probes().len(), 2);
//! ```

use std::cell::RefCell;

use crate::error::{LaunchpadError, Result};

use super::command::{CommandSpec, ProcessRunner, RunOutcome};

/// Process runner that records every invocation instead of spawning.
///
/// Probes succeed unless their command line contains a configured failing
/// fragment, or fail with `Interrupted` when it contains the interrupt
/// fragment. Runs return the configured outcome.
#[derive(Debug)]
pub struct MockRunner {
    failing_probes: Vec<String>,
    interrupt_on: Option<String>,
    outcome: RunOutcome,
    spawn_error: Option<String>,
    probes: RefCell<Vec<CommandSpec>>,
    runs: RefCell<Vec<CommandSpec>>,
}

impl Default for MockRunner {
    fn default() -> Self {
        Self {
            failing_probes: Vec::new(),
            interrupt_on: None,
            outcome: RunOutcome::Exited(Some(0)),
            spawn_error: None,
            probes: RefCell::new(Vec::new()),
            runs: RefCell::new(Vec::new()),
        }
    }
}

impl MockRunner {
    /// Create a runner where every probe and run succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make probes whose command line contains `fragment` fail.
    pub fn with_failing_probe(mut self, fragment: &str) -> Self {
        self.failing_probes.push(fragment.to_string());
        self
    }

    /// Make the probe whose command line contains `fragment` report an interrupt.
    pub fn with_interrupt_on(mut self, fragment: &str) -> Self {
        self.interrupt_on = Some(fragment.to_string());
        self
    }

    /// Outcome returned by `run`.
    pub fn with_outcome(mut self, outcome: RunOutcome) -> Self {
        self.outcome = outcome;
        self
    }

    /// Make `run` fail as if the program could not be started.
    pub fn with_spawn_error(mut self, message: &str) -> Self {
        self.spawn_error = Some(message.to_string());
        self
    }

    /// Every probed command, in order.
    pub fn probes(&self) -> Vec<CommandSpec> {
        self.probes.borrow().clone()
    }

    /// Every run command, in order.
    pub fn runs(&self) -> Vec<CommandSpec> {
        self.runs.borrow().clone()
    }
}

impl ProcessRunner for MockRunner {
    fn probe(&self, spec: &CommandSpec) -> Result<bool> {
        self.probes.borrow_mut().push(spec.clone());
        let line = spec.display();
        if let Some(fragment) = &self.interrupt_on {
            if line.contains(fragment.as_str()) {
                return Err(LaunchpadError::Interrupted);
            }
        }
        Ok(!self.failing_probes.iter().any(|f| line.contains(f.as_str())))
    }

    fn run(&self, spec: &CommandSpec) -> Result<RunOutcome> {
        self.runs.borrow_mut().push(spec.clone());
        match &self.spawn_error {
            Some(message) => Err(LaunchpadError::CommandFailed {
                command: spec.display(),
                message: message.clone(),
            }),
            None => Ok(self.outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_runs() {
        let runner = MockRunner::new().with_outcome(RunOutcome::Exited(Some(2)));
        let outcome = runner.run(&CommandSpec::new("pip")).unwrap();
        assert_eq!(outcome, RunOutcome::Exited(Some(2)));
        assert_eq!(runner.runs().len(), 1);
        assert_eq!(runner.runs()[0].program, "pip");
    }

    #[test]
    fn interrupted_import_check_is_an_error() {
        let runner = MockRunner::new().with_interrupt_on("streamlit");
        let spec = CommandSpec::new("python3").args(["-c", "import streamlit"]);
        assert!(runner.probe(&spec).unwrap_err().is_interrupt());
        assert_eq!(runner.probes().len(), 1);
    }

    #[test]
    fn spawn_error_is_command_failed() {
        let runner = MockRunner::new().with_spawn_error("not found");
        let err = runner.run(&CommandSpec::new("streamlit")).unwrap_err();
        assert!(err.to_string().contains("not found"));
        assert_eq!(runner.runs().len(), 1);
    }
}
