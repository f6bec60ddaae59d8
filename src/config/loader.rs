//! Configuration file loading with precedence handling.

use crate::layout::TabWidth;
use crate::state::SessionOptions;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "MED_CONFIG";

/// Environment variable overriding the tab width.
pub const TAB_WIDTH_ENV_VAR: &str = "MED_TAB_WIDTH";

/// Smallest gutter that fits the continuation marker and a separating space.
pub const MIN_GUTTER_WIDTH: usize = 2;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A setting parsed but is out of range.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Setting name as written in the config file.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/med/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Distance between tab stops.
    #[serde(default)]
    pub tab_width: Option<usize>,

    /// Show the continuation gutter on startup.
    #[serde(default)]
    pub show_gutter: Option<bool>,

    /// Gutter width in columns.
    #[serde(default)]
    pub gutter_width: Option<usize>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Distance between tab stops.
    pub tab_width: usize,
    /// Gutter shown on startup.
    pub show_gutter: bool,
    /// Gutter width in columns.
    pub gutter_width: usize,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            tab_width: TabWidth::DEFAULT.get(),
            show_gutter: true,
            gutter_width: 3,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Validate the display settings and turn them into session options.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero tab width or a gutter
    /// narrower than [`MIN_GUTTER_WIDTH`].
    pub fn session_options(&self) -> Result<SessionOptions, ConfigError> {
        let tab = TabWidth::new(self.tab_width).map_err(|e| ConfigError::InvalidValue {
            field: "tab_width",
            reason: e.to_string(),
        })?;
        if self.gutter_width < MIN_GUTTER_WIDTH {
            return Err(ConfigError::InvalidValue {
                field: "gutter_width",
                reason: format!(
                    "must be >= {} (got {})",
                    MIN_GUTTER_WIDTH, self.gutter_width
                ),
            });
        }
        Ok(SessionOptions {
            tab,
            show_gutter: self.show_gutter,
            gutter_width: self.gutter_width,
        })
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/med/med.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("med").join("med.log")
    } else {
        PathBuf::from("med.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/med/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("med").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `MED_CONFIG` environment variable
/// 3. Default path `~/.config/med/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    match std::env::var(CONFIG_ENV_VAR) {
        Ok(env_path) => return load_config_file(PathBuf::from(env_path)),
        Err(std::env::VarError::NotUnicode(raw)) => {
            return Err(ConfigError::InvalidPath(raw.to_string_lossy().into_owned()));
        }
        Err(std::env::VarError::NotPresent) => {}
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        tab_width: config.tab_width.unwrap_or(defaults.tab_width),
        show_gutter: config.show_gutter.unwrap_or(defaults.show_gutter),
        gutter_width: config.gutter_width.unwrap_or(defaults.gutter_width),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `MED_TAB_WIDTH`: Override tab width
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if `MED_TAB_WIDTH` is not a number.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(raw) = std::env::var(TAB_WIDTH_ENV_VAR) {
        config.tab_width = raw
            .trim()
            .parse()
            .map_err(|e: std::num::ParseIntError| ConfigError::InvalidValue {
                field: "tab_width",
                reason: format!("{}={:?}: {}", TAB_WIDTH_ENV_VAR, raw, e),
            })?;
    }

    Ok(config)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    tab_width_override: Option<usize>,
    gutter_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(tab_width) = tab_width_override {
        config.tab_width = tab_width;
    }

    if let Some(show_gutter) = gutter_override {
        config.show_gutter = show_gutter;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
