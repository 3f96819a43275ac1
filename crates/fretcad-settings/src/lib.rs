//! FretCAD Settings Crate
//!
//! Handles application configuration: the file model, JSON/TOML persistence,
//! validation and the platform config directory.

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{Config, ConfigFormat, MeasurementSystem, UiSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
pub use persistence::SettingsPersistence;
