//! Configuration for the portfolio viewer
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/folio/config.toml)
//! 3. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod animation;
mod features;
mod logging;
mod serialization;

#[cfg(test)]
mod tests;

pub use animation::{AnimationConfig, FileAnimation};
pub use features::{Features, FileFeatures};
pub use logging::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Theme used when nothing else is configured
pub const DEFAULT_THEME: &str = "Neon";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "Neon", "Auto", "Dracula", "Nord", "Gruvbox"
    pub theme: String,

    /// Portfolio content file; None uses the built-in portfolio
    pub content_path: Option<PathBuf>,

    /// Whether to run the TUI (false = headless stdout surface)
    pub enable_tui: bool,

    /// Typewriter, role rotation and caret timing
    pub animation: AnimationConfig,

    /// Feature flags for optional panels
    pub features: Features,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            content_path: None,
            enable_tui: true,
            animation: AnimationConfig::default(),
            features: Features::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure; every key is optional
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub content_path: Option<String>,

    /// Optional [animation] section
    pub animation: Option<FileAnimation>,

    /// Optional [features] section
    pub features: Option<FileFeatures>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Truthy env flag: "1" or "true" (any case)
fn flag_set(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

/// Expand a leading `~` to the home directory
fn expand_home(path: &str, home: Option<PathBuf>) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some("") => "",
        Some(rest) if rest.starts_with('/') || rest.starts_with(std::path::MAIN_SEPARATOR) => {
            &rest[1..]
        }
        _ => return PathBuf::from(path),
    };
    match home {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => PathBuf::from(path),
    }
}

impl Config {
    /// Get the config file path: ~/.config/folio/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("folio").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Read a config file; a missing file means defaults
    pub(crate) fn read_file_config(path: &Path) -> Result<FileConfig> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to read config file {}", path.display())),
        }
    }

    /// Load configuration: env vars > file > defaults
    ///
    /// A config file that exists but does not parse is an error, not a silent
    /// fallback to defaults.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::from_sources(FileConfig::default(), |key| {
                std::env::var(key).ok()
            })),
        }
    }

    /// Load with an explicit config file path
    pub fn load_from(path: &Path) -> Result<Self> {
        let file = Self::read_file_config(path)?;
        Ok(Self::from_sources(file, |key| std::env::var(key).ok()))
    }

    /// Merge a parsed file with an environment lookup
    pub(crate) fn from_sources(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        // Theme: env > file > default
        let theme = env("FOLIO_THEME")
            .or(file.theme)
            .unwrap_or_else(|| DEFAULT_THEME.to_string());

        // Content file: env > file > built-in
        let content_path = env("FOLIO_CONTENT")
            .or(file.content_path)
            .filter(|p| !p.trim().is_empty())
            .map(|p| expand_home(&p, dirs::home_dir()));

        // TUI toggle: env only (runtime flag)
        let enable_tui = !env("FOLIO_NO_TUI").is_some_and(|v| flag_set(&v));

        let mut animation = AnimationConfig::from_file(file.animation);
        if let Some(speed) = env("FOLIO_TYPING_SPEED").and_then(|v| v.parse().ok()) {
            animation.typing_speed_ms = speed;
        }

        Self {
            theme,
            content_path,
            enable_tui,
            animation,
            features: Features::from_file(file.features),
            logging: LoggingConfig::from_file(file.logging),
        }
    }
}
