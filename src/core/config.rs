//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.todo-tui/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::LogLevel;
use crate::core::draft::{DEFAULT_CHAR_LIMIT, DEFAULT_PLACEHOLDER};
use crate::core::state::DEFAULT_TITLE;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TodoConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub title: Option<String>,
    pub placeholder: Option<String>,
    pub char_limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListConfig {
    /// Items the list starts with
    pub items: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<LogLevel>,
    pub file: Option<PathBuf>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const CONFIG_DIR_NAME: &str = ".todo-tui";
pub const DEFAULT_LOG_FILE_NAME: &str = "todo-tui.log";

/// Items used by `--demo`.
pub const DEMO_ITEMS: [&str; 3] = ["Buy carrots", "Buy celery", "Buy kohlrabi"];

// ============================================================================
// CLI overrides
// ============================================================================

/// Values taken from the command line (None/empty = not specified).
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub items: Vec<String>,
    pub demo: bool,
    pub log_level: Option<LogLevel>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub title: String,
    pub placeholder: String,
    pub char_limit: usize,
    pub items: Vec<String>,
    pub log_level: LogLevel,
    pub log_file: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            char_limit: DEFAULT_CHAR_LIMIT,
            items: Vec::new(),
            log_level: LogLevel::default(),
            log_file: default_log_file(),
        }
    }
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

/// Returns `~/.todo-tui/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_DIR_NAME))
}

/// Returns the path to `~/.todo-tui/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

fn default_log_file() -> Option<PathBuf> {
    config_dir().map(|d| d.join(DEFAULT_LOG_FILE_NAME))
}

/// Load config from `~/.todo-tui/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TodoConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<TodoConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TodoConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(TodoConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path. A missing file is an error here.
pub fn load_config_from(path: &Path) -> Result<TodoConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: TodoConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# todo-tui Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# title = "Todo List!"                # Or set TODO_TUI_TITLE env var
# placeholder = "Midway on our life's journey, I found myself"
# char_limit = 255

# [list]
# items = ["Buy carrots", "Buy celery"]

# [logging]
# level = "info"                      # "off", "error", "warn", "info", "debug", "trace"
#                                     # Or set TODO_TUI_LOG env var
# file = "/tmp/todo-tui.log"          # Default: ~/.todo-tui/todo-tui.log
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &TodoConfig, overrides: &Overrides) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    // Title: env → config → default
    let title = std::env::var("TODO_TUI_TITLE")
        .ok()
        .or_else(|| config.general.title.clone())
        .unwrap_or(defaults.title);

    // Items: CLI --item → CLI --demo → config → empty
    let items = if !overrides.items.is_empty() {
        overrides.items.clone()
    } else if overrides.demo {
        DEMO_ITEMS.iter().map(|s| s.to_string()).collect()
    } else {
        config.list.items.clone().unwrap_or_default()
    };

    // Log level: CLI → env → config → default
    let log_level = overrides
        .log_level
        .or_else(|| {
            std::env::var("TODO_TUI_LOG").ok().and_then(|raw| {
                let parsed = raw.parse::<LogLevel>().ok();
                if parsed.is_none() {
                    warn!("Ignoring unknown TODO_TUI_LOG level: {raw}");
                }
                parsed
            })
        })
        .or(config.logging.level)
        .unwrap_or(defaults.log_level);

    ResolvedConfig {
        title,
        placeholder: config
            .general
            .placeholder
            .clone()
            .unwrap_or(defaults.placeholder),
        char_limit: config.general.char_limit.unwrap_or(defaults.char_limit),
        items,
        log_level,
        log_file: config.logging.file.clone().or(defaults.log_file),
    }
}
