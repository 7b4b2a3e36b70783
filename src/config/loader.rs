//! Configuration file loading with precedence handling.
//!
//! Precedence chain, lowest to highest: built-in defaults → config file →
//! environment variables → CLI arguments.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::keybindings::KeyBindings;

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("Failed to read config file at {path}: {reason}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// Config file contains invalid TOML.
    #[error("Invalid TOML in {path}: {reason}")]
    Parse {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional; unset fields fall back to defaults.
/// Corresponds to `~/.config/devcon/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Maximum retained console lines before eviction.
    #[serde(default)]
    pub max_lines: Option<usize>,

    /// Follow the input file for appended content.
    #[serde(default)]
    pub follow: Option<bool>,

    /// Path for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Key binding overrides: key spec → action name,
    /// e.g. `"ctrl+u" = "page-up"`.
    #[serde(default)]
    pub keybindings: Option<HashMap<String, String>>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Maximum retained console lines.
    pub max_lines: usize,
    /// Follow mode.
    pub follow: bool,
    /// Path for tracing output.
    pub log_file_path: PathBuf,
    /// Effective key bindings.
    pub keybindings: KeyBindings,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            max_lines: crate::console::DEFAULT_MAX_LINES,
            follow: false,
            log_file_path: default_log_path(),
            keybindings: KeyBindings::default(),
        }
    }
}

/// Resolve the default log file path.
///
/// `~/.local/state/devcon/devcon.log` on Unix-like systems, the platform
/// equivalent elsewhere, falling back to the current directory when no
/// state directory can be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("devcon").join("devcon.log")
    } else {
        PathBuf::from("devcon.log")
    }
}

/// Resolve the default config file path.
///
/// `~/.config/devcon/config.toml` on Unix, the platform equivalent
/// elsewhere. `None` when no config directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("devcon").join("config.toml"))
}

/// Load a configuration file from a specific path.
///
/// A missing file is not an error; defaults apply.
///
/// # Errors
///
/// Returns an error when the file exists but cannot be read or parsed.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::Read {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with path precedence.
///
/// Highest to lowest: explicit `config_path` (CLI `--config`), the
/// `DEVCON_CONFIG` environment variable, the default path.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("DEVCON_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge a loaded config file into defaults.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        max_lines: config.max_lines.unwrap_or(defaults.max_lines),
        follow: config.follow.unwrap_or(defaults.follow),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        keybindings: match config.keybindings {
            Some(overrides) => KeyBindings::with_overrides(&overrides),
            None => defaults.keybindings,
        },
    }
}

/// Apply environment variable overrides.
///
/// `DEVCON_LOG_FILE` overrides the tracing output path; `DEVCON_MAX_LINES`
/// overrides the retention limit when it parses as a positive integer.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(path) = std::env::var("DEVCON_LOG_FILE") {
        config.log_file_path = PathBuf::from(path);
    }

    if let Ok(raw) = std::env::var("DEVCON_MAX_LINES") {
        if let Ok(max_lines) = raw.parse::<usize>() {
            if max_lines > 0 {
                config.max_lines = max_lines;
            }
        }
    }

    config
}

/// Apply CLI argument overrides; highest precedence.
///
/// Only flags the user explicitly set arrive as `Some`.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    max_lines_override: Option<usize>,
    follow_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(max_lines) = max_lines_override {
        if max_lines > 0 {
            config.max_lines = max_lines;
        }
    }

    if let Some(follow) = follow_override {
        config.follow = follow;
    }

    config
}
