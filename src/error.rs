//! Error types for launchpad operations.
//!
//! This module defines [`LaunchpadError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Missing files, missing optional libraries and non-zero child exits are
//!   normal outcomes and are reported through the UI, never as errors
//! - Use `LaunchpadError` for the few conditions that must unwind
//!   (bad config, interrupted input, spawn failures)
//! - Use `anyhow::Error` (via `LaunchpadError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for launchpad operations.
#[derive(Debug, Error)]
pub enum LaunchpadError {
    /// Explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// An external process could not be started.
    #[error("Failed to start '{command}': {message}")]
    CommandFailed { command: String, message: String },

    /// The operator interrupted the session (Ctrl+C).
    #[error("Interrupted")]
    Interrupted,

    /// Standard input reached end of file while waiting for a choice.
    #[error("Input stream closed")]
    InputClosed,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LaunchpadError {
    /// Whether this error represents an operator interrupt.
    pub fn is_interrupt(&self) -> bool {
        match self {
            Self::Interrupted => true,
            Self::Io(e) => e.kind() == std::io::ErrorKind::Interrupted,
            _ => false,
        }
    }
}

/// Result type alias for launchpad operations.
pub type Result<T> = std::result::Result<T, LaunchpadError>;
