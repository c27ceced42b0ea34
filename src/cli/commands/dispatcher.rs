//! Command dispatching.
//!
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::args::{Cli, Commands};
use crate::config::{load_config, LaunchpadConfig};
use crate::error::Result;
use crate::requirements::{parse_system_path, resolve_python};
use crate::shell::SystemRunner;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Interpreter for a loaded configuration.
pub fn resolve_interpreter(config: &LaunchpadConfig) -> String {
    let python = resolve_python(config.python.as_deref(), &parse_system_path());
    tracing::debug!("Resolved interpreter: {}", python);
    python
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            config_path: None,
        }
    }

    /// Use an explicit config file instead of `launchpad.yml`.
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Dispatch and execute a command.
    ///
    /// Configuration errors surface here, before any command runs.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_path.as_deref())?;
        let runner = SystemRunner::new(Duration::from_secs(config.stop_grace_secs));
        let root = self.project_root.as_path();

        match &cli.command {
            Some(Commands::Status(args)) => {
                super::status::StatusCommand::new(root, args.clone()).execute(ui)
            }
            Some(Commands::Check) => {
                let python = resolve_interpreter(&config);
                super::check::CheckCommand::new(root, &runner, python).execute(ui)
            }
            Some(Commands::Notebooks) => super::notebooks::NotebooksCommand::new(root).execute(ui),
            Some(Commands::Menu) | None => {
                let python = resolve_interpreter(&config);
                super::menu::MenuCommand::new(root, &config, &runner, python).execute(ui)
            }
        }
    }
}
