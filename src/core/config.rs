//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.reckon/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ReckonConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    pub accent: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ACCENT: &str = "cyan";
pub const DEFAULT_LOG_FILE: &str = "reckon.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub accent: String,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.reckon/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".reckon").join("config.toml"))
}

/// Load config from `~/.reckon/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ReckonConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ReckonConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ReckonConfig::default());
        }
    };
    load_config_from(&path)
}

/// Load config from an explicit path. Split out of [`load_config`] so
/// tests can point it at a scratch directory.
pub fn load_config_from(path: &Path) -> Result<ReckonConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(ReckonConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ReckonConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r##"# reckon Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_file = "reckon.log"    # Where log output goes (stdout belongs to the TUI)
# log_level = "info"         # "off", "error", "warn", "info", "debug", "trace"

# [ui]
# accent = "cyan"            # Keypad highlight: color name, "#rrggbb", or 0-255 index
"##;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_accent` and `cli_log_level` are from CLI flags (None = not specified).
pub fn resolve(
    config: &ReckonConfig,
    cli_accent: Option<&str>,
    cli_log_level: Option<&str>,
) -> ResolvedConfig {
    // Accent: CLI → env → config → default
    let accent = cli_accent
        .map(|s| s.to_string())
        .or_else(|| std::env::var("RECKON_ACCENT").ok())
        .or_else(|| config.ui.accent.clone())
        .unwrap_or_else(|| DEFAULT_ACCENT.to_string());

    // Log level: CLI → env → config → default
    let log_level = cli_log_level
        .map(|s| s.to_string())
        .or_else(|| std::env::var("RECKON_LOG_LEVEL").ok())
        .or_else(|| config.general.log_level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    // Log file: env → config → default
    let log_file = std::env::var("RECKON_LOG_FILE")
        .ok()
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    ResolvedConfig {
        accent,
        log_file: PathBuf::from(log_file),
        log_level: level_filter(&log_level),
    }
}

/// Maps a level name to a `LevelFilter`, falling back to the default on
/// anything unrecognized so a typo in the config never kills startup.
pub fn level_filter(name: &str) -> LevelFilter {
    match name.to_ascii_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        other => {
            warn!("Unknown log level {other:?}, using {DEFAULT_LOG_LEVEL}");
            LevelFilter::Info
        }
    }
}
