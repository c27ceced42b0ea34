//! Configuration file discovery and loading.
//!
//! Configuration is layered: built-in defaults, then `launchpad.yml` in the
//! project root (or an explicit `--config` path), then the
//! `LAUNCHPAD_PYTHON` environment variable.

use crate::config::schema::LaunchpadConfig;
use crate::error::{LaunchpadError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the project config.
pub const CONFIG_FILE_NAME: &str = "launchpad.yml";

/// Environment variable that overrides the configured interpreter.
pub const PYTHON_ENV_VAR: &str = "LAUNCHPAD_PYTHON";

/// Path of the project config for the given root.
pub fn config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_FILE_NAME)
}

/// Load a single config file and parse it into LaunchpadConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<LaunchpadConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LaunchpadError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            LaunchpadError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into LaunchpadConfig.
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<LaunchpadConfig> {
    if content.trim().is_empty() {
        return Ok(LaunchpadConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| LaunchpadError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the effective configuration for a project.
///
/// An explicit path must exist; the implicit `launchpad.yml` is optional.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<LaunchpadConfig> {
    load_config_with_env(project_root, explicit, |key| std::env::var(key))
}

/// Load configuration with a custom env var lookup function.
pub fn load_config_with_env<F>(
    project_root: &Path,
    explicit: Option<&Path>,
    env_fn: F,
) -> Result<LaunchpadConfig>
where
    F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
{
    let mut config = match explicit {
        Some(path) => {
            let path = if path.is_absolute() {
                path.to_path_buf()
            } else {
                project_root.join(path)
            };
            load_config_file(&path)?
        }
        None => {
            let path = config_path(project_root);
            if path.exists() {
                load_config_file(&path)?
            } else {
                LaunchpadConfig::default()
            }
        }
    };

    if let Ok(python) = env_fn(PYTHON_ENV_VAR) {
        if !python.trim().is_empty() {
            tracing::debug!("{} overrides interpreter: {}", PYTHON_ENV_VAR, python);
            config.python = Some(python);
        }
    }

    Ok(config)
}
