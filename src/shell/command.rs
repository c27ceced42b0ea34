//! External process execution.
//!
//! Commands are spawned directly (no intermediate shell) and always
//! awaited. A spawned child lives inside a [`ChildGuard`], which reaps it on
//! every exit path, killing it only if it outlives the grace period.

use crate::error::{LaunchpadError, Result};
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use super::interrupt::{self, InterruptGuard, POLL_INTERVAL};

/// A program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Executable name or path.
    pub program: String,
    /// Arguments.
    pub args: Vec<String>,
    /// Working directory.
    pub cwd: Option<PathBuf>,
}

impl CommandSpec {
    /// Create a spec for `program` with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Append an argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set the working directory.
    pub fn current_dir(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// The command line as shown to the user.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }
        cmd
    }

    fn spawn_error(&self, e: std::io::Error) -> LaunchpadError {
        LaunchpadError::CommandFailed {
            command: self.display(),
            message: e.to_string(),
        }
    }
}

/// How a blocking run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The child exited on its own (`None` if killed by a signal).
    Exited(Option<i32>),
    /// The operator interrupted the wait.
    Interrupted,
}

/// Seam for starting external processes.
///
/// The menu actions only talk to this trait, so tests can substitute a
/// recording implementation.
pub trait ProcessRunner {
    /// Run silently and report whether the process exited successfully.
    ///
    /// Failing to start the process counts as an unsuccessful run.
    ///
    /// # Errors
    ///
    /// Returns `Interrupted` if the operator interrupts the wait.
    fn probe(&self, spec: &CommandSpec) -> Result<bool>;

    /// Run with inherited stdio and block until exit or interrupt.
    ///
    /// # Errors
    ///
    /// Returns `CommandFailed` if the process cannot be started.
    fn run(&self, spec: &CommandSpec) -> Result<RunOutcome>;
}

/// Runs real processes.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    grace: Duration,
}

impl SystemRunner {
    /// Create a runner that waits `grace` for children to stop after an interrupt.
    pub fn new(grace: Duration) -> Self {
        Self { grace }
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

impl SystemRunner {
    /// Poll `child` until it exits or an interrupt is pending.
    fn wait(&self, child: &mut ChildGuard, spec: &CommandSpec) -> Result<RunOutcome> {
        loop {
            if let Some(status) = child.try_wait()? {
                tracing::debug!("`{}` exited with {}", spec.display(), status);
                return Ok(RunOutcome::Exited(status.code()));
            }
            if interrupt::take() {
                tracing::debug!("Interrupted while waiting on `{}`", spec.display());
                return Ok(RunOutcome::Interrupted);
            }
            thread::sleep(POLL_INTERVAL);
        }
    }
}

impl ProcessRunner for SystemRunner {
    fn probe(&self, spec: &CommandSpec) -> Result<bool> {
        let _interrupts = InterruptGuard::install();

        let mut cmd = spec.to_command();
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        let child = match cmd.spawn() {
            Ok(child) => child,
            Err(e) => {
                tracing::debug!("Probe `{}` failed to start: {}", spec.display(), e);
                return Ok(false);
            }
        };

        // Probes have no side effects, so an abandoned one is killed at once
        let mut child = ChildGuard::new(child, Duration::ZERO);
        match self.wait(&mut child, spec)? {
            RunOutcome::Exited(code) => Ok(code == Some(0)),
            RunOutcome::Interrupted => Err(LaunchpadError::Interrupted),
        }
    }

    fn run(&self, spec: &CommandSpec) -> Result<RunOutcome> {
        let _interrupts = InterruptGuard::install();

        tracing::debug!("Spawning `{}`", spec.display());
        let child = spec.to_command().spawn().map_err(|e| spec.spawn_error(e))?;
        let mut child = ChildGuard::new(child, self.grace);
        self.wait(&mut child, spec)
    }
}

/// A child process that is always reaped when dropped.
#[derive(Debug)]
pub struct ChildGuard {
    child: Child,
    grace: Duration,
    exited: bool,
}

impl ChildGuard {
    /// Take ownership of a spawned child.
    pub fn new(child: Child, grace: Duration) -> Self {
        Self {
            child,
            grace,
            exited: false,
        }
    }

    /// Check for exit without blocking.
    pub fn try_wait(&mut self) -> Result<Option<ExitStatus>> {
        let status = self.child.try_wait()?;
        if status.is_some() {
            self.exited = true;
        }
        Ok(status)
    }

    /// Wait up to the grace period, then kill.
    fn reap(&mut self) {
        let deadline = Instant::now() + self.grace;
        while Instant::now() < deadline {
            match self.child.try_wait() {
                Ok(Some(_)) | Err(_) => return,
                Ok(None) => thread::sleep(POLL_INTERVAL),
            }
        }

        tracing::debug!("Killing child {} after {:?}", self.child.id(), self.grace);
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        if !self.exited {
            self.reap();
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::shell::interrupt::test_lock;

    fn sh(script: &str) -> CommandSpec {
        CommandSpec::new("sh").args(["-c", script])
    }

    #[test]
    fn display_joins_program_and_args() {
        let spec = CommandSpec::new("python3").args(["-m", "pip", "install"]);
        assert_eq!(spec.display(), "python3 -m pip install");
    }

    #[test]
    fn probe_reports_exit_status() {
        let _lock = test_lock();
        let runner = SystemRunner::default();
        assert!(runner.probe(&sh("exit 0")).unwrap());
        assert!(!runner.probe(&sh("exit 1")).unwrap());
    }

    #[test]
    fn probe_of_missing_program_is_false() {
        let _lock = test_lock();
        let runner = SystemRunner::default();
        assert!(!runner
            .probe(&CommandSpec::new("definitely-not-a-real-binary-xyz"))
            .unwrap());
    }

    #[test]
    fn interrupt_during_silent_run_is_an_error() {
        let _lock = test_lock();
        let runner = SystemRunner::default();

        let notifier = thread::spawn(|| {
            thread::sleep(Duration::from_millis(300));
            interrupt::notify();
        });

        let start = Instant::now();
        let err = runner.probe(&sh("sleep 30")).unwrap_err();
        notifier.join().unwrap();

        assert!(err.is_interrupt());
        // The probe child is killed without waiting for the grace period
        assert!(start.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn run_returns_exit_code() {
        let _lock = test_lock();
        let runner = SystemRunner::default();
        assert_eq!(runner.run(&sh("exit 3")).unwrap(), RunOutcome::Exited(Some(3)));
        assert_eq!(runner.run(&sh("true")).unwrap(), RunOutcome::Exited(Some(0)));
    }

    #[test]
    fn run_uses_working_directory() {
        let _lock = test_lock();
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("marker"), "").unwrap();

        let runner = SystemRunner::default();
        let outcome = runner
            .run(&sh("test -f marker").current_dir(temp.path()))
            .unwrap();
        assert_eq!(outcome, RunOutcome::Exited(Some(0)));
    }

    #[test]
    fn run_of_missing_program_is_command_failed() {
        let _lock = test_lock();
        let runner = SystemRunner::default();
        let err = runner
            .run(&CommandSpec::new("definitely-not-a-real-binary-xyz"))
            .unwrap_err();
        assert!(matches!(err, LaunchpadError::CommandFailed { .. }));
    }

    #[test]
    fn interrupt_abandons_wait_and_reaps_child() {
        let _lock = test_lock();
        let runner = SystemRunner::new(Duration::from_millis(0));

        let notifier = thread::spawn(|| {
            thread::sleep(Duration::from_millis(300));
            interrupt::notify();
        });

        let start = Instant::now();
        let outcome = runner.run(&sh("sleep 30")).unwrap();
        notifier.join().unwrap();

        assert_eq!(outcome, RunOutcome::Interrupted);
        assert!(start.elapsed() < Duration::from_secs(10));
    }
}
