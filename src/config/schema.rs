//! Configuration schema definitions for launchpad.
//!
//! This module contains the struct that maps to the optional
//! `launchpad.yml` file in the project root. Every field has a default,
//! so an empty file (or no file at all) yields a working configuration.

use serde::{Deserialize, Serialize};

/// Default dashboard port used by Streamlit.
pub const DEFAULT_DASHBOARD_PORT: u16 = 8501;

/// Root configuration structure for launchpad.yml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchpadConfig {
    /// Application name shown in the banner and farewell.
    pub app_name: String,

    /// Python interpreter used for library probes and installs.
    ///
    /// When unset, the first of `python3` / `python` found on PATH is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub python: Option<String>,

    /// Dashboard server executable.
    pub streamlit: String,

    /// Port the dashboard is served on.
    pub dashboard_port: u16,

    /// Seconds to wait for a child to exit after an interrupt before killing it.
    pub stop_grace_secs: u64,
}

impl Default for LaunchpadConfig {
    fn default() -> Self {
        Self {
            app_name: "Crime Data Analysis Project".to_string(),
            python: None,
            streamlit: "streamlit".to_string(),
            dashboard_port: DEFAULT_DASHBOARD_PORT,
            stop_grace_secs: 5,
        }
    }
}

impl LaunchpadConfig {
    /// Local URL the dashboard is reachable at.
    pub fn dashboard_url(&self) -> String {
        format!("http://localhost:{}", self.dashboard_port)
    }
}
