//! User-level configuration for life-evaluator
//!
//! Supports loading config from:
//! - Environment variables
//! - ~/.config/life-evaluator/config.toml
//!
//! Only presentation is configurable. The question set and the pass
//! threshold are fixed.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

/// Environment variable that disables pacing when set to 0/false/off
pub const PACING_ENV: &str = "LIFE_EVALUATOR_PACING";
/// Environment variable overriding the typewriter delay per character
pub const CHAR_DELAY_ENV: &str = "LIFE_EVALUATOR_CHAR_DELAY_MS";

/// Commented template written by `config init`
pub const DEFAULT_CONFIG: &str = r#"# life-evaluator configuration

[display]
# Typewriter effect and short pauses between phases
pacing = true

# Override the per-character typewriter delay (milliseconds)
# char_delay_ms = 30

# Clear the screen before the intro and before the results
clear_screen = true

# ANSI colors (NO_COLOR is also respected)
color = true

# Emoji in headings
emoji = true
"#;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UserConfig {
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub pacing: Option<bool>,
    pub char_delay_ms: Option<u64>,
    pub clear_screen: Option<bool>,
    pub color: Option<bool>,
    pub emoji: Option<bool>,
}

/// Command-line switches that take priority over the config file
#[derive(Debug, Default, Clone, Copy)]
pub struct DisplayOverrides {
    pub no_pacing: bool,
    pub no_clear: bool,
    pub no_color: bool,
    pub no_emoji: bool,
}

/// Effective presentation settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySettings {
    pub pacing: bool,
    pub clear_screen: bool,
    pub color: bool,
    pub emoji: bool,
    /// Replaces the built-in per-pace delays when set
    pub char_delay: Option<Duration>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            pacing: true,
            clear_screen: true,
            color: true,
            emoji: true,
            char_delay: None,
        }
    }
}

impl UserConfig {
    /// Load config from all sources, with priority:
    /// 1. Environment variables (highest)
    /// 2. Config file (`explicit` path, else ~/.config/life-evaluator/config.toml)
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = UserConfig::default();

        let path = explicit
            .map(Path::to_path_buf)
            .or_else(Self::user_config_path);
        if let Some(path) = path.filter(|p| p.exists()) {
            config.merge(Self::load_file(&path)?);
        }

        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Parse a single config file. A malformed file is reported and ignored.
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        match toml::from_str::<UserConfig>(&content) {
            Ok(config) => {
                debug!("Loaded config from {}", path.display());
                Ok(config)
            }
            Err(e) => {
                warn!("Ignoring malformed config {}: {}", path.display(), e);
                Ok(UserConfig::default())
            }
        }
    }

    /// Get the user config file path
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("life-evaluator").join("config.toml"))
    }

    /// Apply environment overrides through `lookup`
    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup(PACING_ENV) {
            match parse_flag(&value) {
                Some(flag) => self.display.pacing = Some(flag),
                None => warn!("Ignoring {}={:?}: expected true/false", PACING_ENV, value),
            }
        }
        if let Some(value) = lookup(CHAR_DELAY_ENV) {
            match value.trim().parse::<u64>() {
                Ok(ms) => self.display.char_delay_ms = Some(ms),
                Err(_) => warn!("Ignoring {}={:?}: expected milliseconds", CHAR_DELAY_ENV, value),
            }
        }
    }

    /// Merge another config into this one (other takes priority)
    fn merge(&mut self, other: UserConfig) {
        let d = other.display;
        if d.pacing.is_some() {
            self.display.pacing = d.pacing;
        }
        if d.char_delay_ms.is_some() {
            self.display.char_delay_ms = d.char_delay_ms;
        }
        if d.clear_screen.is_some() {
            self.display.clear_screen = d.clear_screen;
        }
        if d.color.is_some() {
            self.display.color = d.color;
        }
        if d.emoji.is_some() {
            self.display.emoji = d.emoji;
        }
    }

    /// Resolve effective settings; command-line switches win
    pub fn display_settings(&self, overrides: DisplayOverrides) -> DisplaySettings {
        let d = &self.display;
        DisplaySettings {
            pacing: !overrides.no_pacing && d.pacing.unwrap_or(true),
            clear_screen: !overrides.no_clear && d.clear_screen.unwrap_or(true),
            color: !overrides.no_color && d.color.unwrap_or(true),
            emoji: !overrides.no_emoji && d.emoji.unwrap_or(true),
            char_delay: d.char_delay_ms.map(Duration::from_millis),
        }
    }
}

/// Write the default config to `path` unless a file already exists there.
/// Returns whether a file was created.
pub fn init_config_file(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(true)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
