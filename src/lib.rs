//! Launchpad - interactive launcher for the crime data analysis project.
//!
//! Launchpad checks that the project's Python analysis stack is importable,
//! reports which data files and notebooks exist, and offers a numbered menu
//! to start the Streamlit dashboard, list notebooks, show pipeline progress
//! or install dependencies.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional `launchpad.yml` loading
//! - [`detection`] - Data file, notebook and chart discovery
//! - [`error`] - Error types and result aliases
//! - [`launcher`] - Dashboard and dependency install actions
//! - [`menu`] - Interactive menu state machine and controller
//! - [`pipeline`] - Stage status derivation
//! - [`project`] - Fixed project layout tables
//! - [`requirements`] - Python library probing
//! - [`shell`] - Child process execution and interrupt handling
//! - [`ui`] - Prompts, spinners and terminal output
//!
//! # Example
//!
//! ```
//! use launchpad::pipeline::{project_status, StageStatus};
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let stages = project_status(temp.path());
//! assert_eq!(stages.len(), 4);
//! assert!(stages.iter().all(|s| s.status == StageStatus::NotStarted));
//! ```

pub mod cli;
pub mod config;
pub mod detection;
pub mod error;
pub mod launcher;
pub mod menu;
pub mod pipeline;
pub mod project;
pub mod requirements;
pub mod shell;
pub mod ui;

pub use error::{LaunchpadError, Result};
