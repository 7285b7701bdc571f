//! Configuration loading and discovery for `pmsprite.toml`
//!
//! Provides functions to find, load, and merge configuration.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::schema::{OutputFormat, PmConfig};
use crate::orientation::OrientationSet;

/// File name searched for during discovery.
pub const CONFIG_FILE_NAME: &str = "pmsprite.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse pmsprite.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub directions: Option<OrientationSet>,
    pub directive: Option<String>,
    pub player_a_label: Option<String>,
    pub player_b_label: Option<String>,
    pub format: Option<OutputFormat>,
    pub strict: Option<bool>,
}

/// Locate a configuration file: the nearest `pmsprite.toml` at or above the
/// working directory, else the per-user one from [`user_config_path`].
pub fn find_config() -> Option<PathBuf> {
    env::current_dir()
        .ok()
        .and_then(|cwd| find_config_from(&cwd))
        .or_else(find_xdg_config)
}

/// Per-user configuration path, whether or not the file exists.
///
/// `$XDG_CONFIG_HOME/pmsprite/pmsprite.toml`, falling back to
/// `$HOME/.config/pmsprite/pmsprite.toml`. Empty variables count as unset.
pub fn user_config_path() -> Option<PathBuf> {
    let non_empty = |name: &str| env::var_os(name).filter(|v| !v.is_empty());
    let base = non_empty("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| non_empty("HOME").map(|home| Path::new(&home).join(".config")))?;
    Some(base.join("pmsprite").join(CONFIG_FILE_NAME))
}

/// The per-user configuration file, if present.
pub fn find_xdg_config() -> Option<PathBuf> {
    user_config_path().filter(|path| path.is_file())
}

/// Nearest `pmsprite.toml` in `start` or any of its ancestors.
///
/// Only regular files match; a directory with that name is passed over.
pub fn find_config_from(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

/// Load configuration.
///
/// If a path is provided, loads from that file. Otherwise, uses
/// [`find_config`] to locate one. If no config file is found, returns the
/// default configuration.
pub fn load_config(path: Option<&Path>) -> Result<PmConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => Ok(PmConfig::default()),
    }
}

/// Load configuration from a specific file path.
fn load_config_file(path: &Path) -> Result<PmConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: PmConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    Ok(config)
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(config: &mut PmConfig, overrides: &CliOverrides) {
    if let Some(directions) = overrides.directions {
        config.output.directions = directions.to_string();
    }

    if let Some(ref directive) = overrides.directive {
        config.output.directive = directive.clone();
    }

    if let Some(ref label) = overrides.player_a_label {
        config.labels.player_a = label.clone();
    }
    if let Some(ref label) = overrides.player_b_label {
        config.labels.player_b = label.clone();
    }

    if let Some(format) = overrides.format {
        config.output.format = format;
    }

    if let Some(strict) = overrides.strict {
        config.input.strict = strict;
    }
}
