//! Configuration module for the lox driver.
//!
//! Settings come from an optional `lox.toml`. Every field has a default, so
//! an empty file, a partial file and no file at all are all valid.
//!
//! ```toml
//! verbose = false
//!
//! [prompt]
//! prompt = "> "
//! exit_message = "\nExit\n"
//! ```

use std::path::{Path, PathBuf};

use dirs::config_dir;
use serde::Deserialize;

use crate::error::{DriverError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "lox.toml";

/// Driver configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    /// Enable debug logging, as if `--verbose` were given.
    #[serde(default)]
    pub verbose: bool,

    /// Interactive prompt settings.
    #[serde(default)]
    pub prompt: PromptConfig,
}

/// Interactive prompt settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PromptConfig {
    /// Text written before each line is read.
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Text written once input ends.
    #[serde(default = "default_exit_message")]
    pub exit_message: String,
}

fn default_prompt() -> String {
    "> ".to_string()
}

fn default_exit_message() -> String {
    "\nExit\n".to_string()
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            exit_message: default_exit_message(),
        }
    }
}

impl Config {
    /// Load configuration, preferring an explicit path.
    ///
    /// With `explicit` set, that file must exist. Otherwise the search order
    /// is:
    /// 1. `lox.toml` in the current directory
    /// 2. `lox/lox.toml` in the user configuration directory
    ///
    /// Returns the default configuration if no file is found, together with
    /// the path that was used, if any.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::find_config_file(),
        };

        match path {
            Some(path) => Ok((Self::load_from_path(&path)?, Some(path))),
            None => Ok((Self::default(), None)),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            DriverError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&content)
            .map_err(|e| DriverError::Config(format!("Failed to parse configuration: {}", e)))
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in the user configuration directory.
    fn check_user_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("lox").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    pub fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config().or_else(Self::check_user_config)
    }
}
