//! Configuration loading for launchpad.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use launchpad::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("launchpad.yml"), "app_name: test").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.app_name, "test");
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    config_path, load_config, load_config_file, load_config_with_env, parse_config,
    CONFIG_FILE_NAME, PYTHON_ENV_VAR,
};
pub use schema::{LaunchpadConfig, DEFAULT_DASHBOARD_PORT};
