//! Configuration and settings management for FretCAD
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats, chosen by file extension, stored in the platform
//! configuration directory by default.
//!
//! Configuration is organized into sections:
//! - Canvas tuning (ruler size, zoom bounds and steps, split limits)
//! - Display toggles applied at startup
//! - UI preferences (measurement system, snapshot export)

pub use fretcad_core::units::MeasurementSystem;
use fretcad_canvas::{CanvasConfig, DisplaySettings};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

const APP_DIR: &str = "fretcad";
const CONFIG_FILE: &str = "config.toml";

/// File formats the configuration can be stored in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Format implied by the path's extension.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// UI preference settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Measurement system for the parameter panel (Metric or Imperial)
    pub measurement_system: MeasurementSystem,
    /// Width of a headless snapshot in pixels
    pub snapshot_width: u32,
    /// Height of a headless snapshot in pixels
    pub snapshot_height: u32,
    /// Where a headless snapshot is written; the extension picks SVG or PNG
    pub snapshot_path: PathBuf,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            measurement_system: MeasurementSystem::default(),
            snapshot_width: 1280,
            snapshot_height: 800,
            snapshot_path: PathBuf::from("fretcad-top.svg"),
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Canvas behaviour
    pub canvas: CanvasConfig,
    /// Display toggles at startup
    pub display: DisplaySettings,
    /// UI preferences
    pub ui: UiSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// `<platform config dir>/fretcad/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no configuration directory on this platform".into())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load config from `path`, or defaults when it is missing or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        tracing::info!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let c = &self.canvas;

        if !(c.min_zoom.is_finite() && c.min_zoom > 0.0) {
            return Err(ConfigError::out_of_range("canvas.min_zoom", c.min_zoom));
        }
        if !c.max_zoom.is_finite() || c.min_zoom >= c.max_zoom {
            return Err(inverted("canvas.min_zoom", "canvas.max_zoom"));
        }

        // Zoom-in steps must grow, zoom-out steps must shrink but stay positive
        for (key, value) in [
            ("canvas.button_zoom_in", c.button_zoom_in),
            ("canvas.wheel_zoom_in", c.wheel_zoom_in),
        ] {
            if !(value.is_finite() && value > 1.0) {
                return Err(ConfigError::out_of_range(key, value));
            }
        }
        for (key, value) in [
            ("canvas.button_zoom_out", c.button_zoom_out),
            ("canvas.wheel_zoom_out", c.wheel_zoom_out),
        ] {
            if !(value > 0.0 && value < 1.0) {
                return Err(ConfigError::out_of_range(key, value));
            }
        }

        if !(c.ruler_thickness.is_finite() && c.ruler_thickness >= 0.0) {
            return Err(ConfigError::out_of_range(
                "canvas.ruler_thickness",
                c.ruler_thickness,
            ));
        }
        if !(c.fit_margin.is_finite() && c.fit_margin >= 1.0) {
            return Err(ConfigError::out_of_range("canvas.fit_margin", c.fit_margin));
        }
        if !(c.panel_width.is_finite() && c.panel_width >= 0.0) {
            return Err(ConfigError::out_of_range("canvas.panel_width", c.panel_width));
        }

        if !(c.split_min_ratio > 0.0 && c.split_min_ratio < 1.0) {
            return Err(ConfigError::out_of_range(
                "canvas.split_min_ratio",
                c.split_min_ratio,
            ));
        }
        if !(c.split_max_ratio > 0.0 && c.split_max_ratio < 1.0) {
            return Err(ConfigError::out_of_range(
                "canvas.split_max_ratio",
                c.split_max_ratio,
            ));
        }
        if c.split_min_ratio >= c.split_max_ratio {
            return Err(inverted("canvas.split_min_ratio", "canvas.split_max_ratio"));
        }
        for (key, value) in [
            ("canvas.default_split_ratio", c.default_split_ratio),
            ("canvas.split_reset_ratio", c.split_reset_ratio),
        ] {
            if !(value >= c.split_min_ratio && value <= c.split_max_ratio) {
                return Err(ConfigError::out_of_range(key, value));
            }
        }

        if self.ui.snapshot_width == 0 {
            return Err(ConfigError::out_of_range("ui.snapshot_width", 0));
        }
        if self.ui.snapshot_height == 0 {
            return Err(ConfigError::out_of_range("ui.snapshot_height", 0));
        }

        Ok(())
    }
}

fn inverted(low: &str, high: &str) -> ConfigError {
    ConfigError::Inverted {
        low: low.to_string(),
        high: high.to_string(),
    }
}
