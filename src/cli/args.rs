//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Launchpad - interactive launcher for the crime data analysis project.
#[derive(Debug, Parser)]
#[command(name = "launchpad")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default launchpad.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the interactive menu (default if no command specified)
    Menu,

    /// Show pipeline stage status
    Status(StatusArgs),

    /// Check Python libraries and data files
    Check,

    /// List notebooks and generated visualizations
    Notebooks,
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_has_no_command() {
        let cli = Cli::parse_from(["launchpad"]);
        assert!(cli.command.is_none());
        assert!(!cli.debug);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["launchpad", "status", "--json", "-p", "/tmp/x", "--no-color"]);
        match cli.command {
            Some(Commands::Status(args)) => assert!(args.json),
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.project, Some(PathBuf::from("/tmp/x")));
        assert!(cli.no_color);
    }

    #[test]
    fn parses_each_subcommand() {
        assert!(matches!(
            Cli::parse_from(["launchpad", "menu"]).command,
            Some(Commands::Menu)
        ));
        assert!(matches!(
            Cli::parse_from(["launchpad", "check"]).command,
            Some(Commands::Check)
        ));
        assert!(matches!(
            Cli::parse_from(["launchpad", "notebooks"]).command,
            Some(Commands::Notebooks)
        ));
    }

    #[test]
    fn config_flag() {
        let cli = Cli::parse_from(["launchpad", "-c", "custom.yml"]);
        assert_eq!(cli.config, Some(PathBuf::from("custom.yml")));
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
