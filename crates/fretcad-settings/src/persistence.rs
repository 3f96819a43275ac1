//! Settings Persistence
//!
//! Owns the live [`Config`] together with the file it came from, and
//! announces loads and saves on the event bus so open views can pick up new
//! canvas tuning and display toggles.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use fretcad_core::{AppEvent, EventBus, SettingsEvent};

use crate::config::Config;
use crate::error::SettingsResult;

/// Config plus the path it is persisted to
#[derive(Debug)]
pub struct SettingsPersistence {
    config: Config,
    path: PathBuf,
    bus: Arc<EventBus>,
}

impl SettingsPersistence {
    /// Defaults bound to `path`; nothing is read yet.
    pub fn new(path: impl Into<PathBuf>, bus: Arc<EventBus>) -> Self {
        Self {
            config: Config::default(),
            path: path.into(),
            bus,
        }
    }

    /// Read `path` and publish [`SettingsEvent::Loaded`].
    pub fn load(path: impl Into<PathBuf>, bus: Arc<EventBus>) -> SettingsResult<Self> {
        let path = path.into();
        let config = Config::load_from_file(&path)?;
        bus.publish(AppEvent::Settings(SettingsEvent::Loaded { path: path.clone() }));
        Ok(Self { config, path, bus })
    }

    /// Like [`load`](Self::load), falling back to defaults on any error.
    pub fn load_or_default(path: impl Into<PathBuf>, bus: Arc<EventBus>) -> Self {
        let path = path.into();
        let config = Config::load_or_default(&path);
        bus.publish(AppEvent::Settings(SettingsEvent::Loaded { path: path.clone() }));
        Self { config, path, bus }
    }

    /// Write the current config and publish [`SettingsEvent::Saved`].
    pub fn save(&self) -> SettingsResult<()> {
        self.config.save_to_file(&self.path)?;
        self.bus.publish(AppEvent::Settings(SettingsEvent::Saved {
            path: self.path.clone(),
        }));
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drop unsaved edits and go back to the stored file.
    pub fn reload(&mut self) -> SettingsResult<()> {
        self.config = Config::load_from_file(&self.path)?;
        self.bus.publish(AppEvent::Settings(SettingsEvent::Loaded {
            path: self.path.clone(),
        }));
        Ok(())
    }
}
