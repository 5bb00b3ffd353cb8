//! Configuration and settings management for Storeplan
//!
//! Provides configuration file handling, settings management, and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Layout defaults (store size, overlap gaps, containment and cascade policy)
//! - Logging (level filter, output format)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use storeplan_core::{Error, Result};
use tracing::{debug, info};

/// Maximum number of entries kept in [`Config::recent_files`]
pub const MAX_RECENT_FILES: usize = 10;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Layout defaults applied to new and loaded layouts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Width of a new store, in meters
    pub default_store_width: f64,
    /// Height of a new store, in meters
    pub default_store_height: f64,
    /// Minimum separation between zones
    pub zone_overlap_gap: f64,
    /// Minimum separation between shelves of one zone
    pub shelf_overlap_gap: f64,
    /// Pull added/updated rectangles inside their container
    pub clamp_to_container: bool,
    /// Delete a zone's shelves together with the zone
    pub cascade_zone_delete: bool,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            default_store_width: 30.0,
            default_store_height: 20.0,
            zone_overlap_gap: 0.0,
            shelf_overlap_gap: 0.1,
            clamp_to_container: false,
            cascade_zone_delete: false,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default level filter; `RUST_LOG` takes precedence when set
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Layout defaults
    pub layout: LayoutSettings,
    /// Logging preferences
    pub logging: LoggingSettings,
    /// Recent layout files, most recent first
    pub recent_files: Vec<PathBuf>,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config location, e.g. `~/.config/storeplan/config.toml`
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("storeplan").join("config.toml"))
    }

    /// Load `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::other(format!("Failed to read config file: {}", e)))?;

        let config: Self = if has_extension(path, "json") {
            serde_json::from_str(&content)
                .map_err(|e| Error::other(format!("Invalid JSON config: {}", e)))?
        } else if has_extension(path, "toml") {
            toml::from_str(&content)
                .map_err(|e| Error::other(format!("Invalid TOML config: {}", e)))?
        } else {
            return Err(Error::other("Config file must be .json or .toml"));
        };

        config.validate()?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    ///
    /// Missing parent directories are created.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = if has_extension(path, "json") {
            serde_json::to_string_pretty(self)
                .map_err(|e| Error::other(format!("Failed to serialize config: {}", e)))?
        } else if has_extension(path, "toml") {
            toml::to_string_pretty(self)
                .map_err(|e| Error::other(format!("Failed to serialize config: {}", e)))?
        } else {
            return Err(Error::other("Config file must be .json or .toml"));
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| Error::other(format!("Failed to write config file: {}", e)))?;

        info!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let layout = &self.layout;
        if !(layout.default_store_width > 0.0 && layout.default_store_width.is_finite())
            || !(layout.default_store_height > 0.0 && layout.default_store_height.is_finite())
        {
            return Err(Error::other("Default store dimensions must be > 0"));
        }

        if !(layout.zone_overlap_gap >= 0.0 && layout.zone_overlap_gap.is_finite())
            || !(layout.shelf_overlap_gap >= 0.0 && layout.shelf_overlap_gap.is_finite())
        {
            return Err(Error::other("Overlap gaps must be finite and >= 0"));
        }

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(Error::other(format!(
                "Unknown log level '{}' (expected one of {})",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// Add file to recent files list
    pub fn add_recent_file(&mut self, path: PathBuf) {
        self.recent_files.retain(|f| f != &path);
        self.recent_files.insert(0, path);
        self.recent_files.truncate(MAX_RECENT_FILES);
    }
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().is_some_and(|e| e == ext)
}
