//! Global configuration for regionmark
//!
//! Configuration is stored as YAML in the user's config directory.
//! Default location: ~/.config/regionmark/config.yaml

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use regionmark_core::zoom::{MIN_PX_PER_SEC, ZOOM_INCREMENT};
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Waveform zoom stepping
    pub zoom: ZoomConfig,
    /// Quiet windows for coalescing event bursts
    pub debounce: DebounceConfig,
}

impl Config {
    /// Clamp every section to usable values
    pub fn validate(&mut self) {
        self.zoom.validate();
    }
}

/// Zoom configuration section (all values in pixels per second)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// Floor for zooming out
    pub minimum_px_per_sec: f64,
    /// Change per wheel step
    pub increment_px_per_sec: f64,
    /// Level applied when a file is loaded
    pub initial_px_per_sec: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            minimum_px_per_sec: MIN_PX_PER_SEC,
            increment_px_per_sec: ZOOM_INCREMENT,
            initial_px_per_sec: MIN_PX_PER_SEC,
        }
    }
}

impl ZoomConfig {
    /// Keep the floor and step positive and the initial level above the floor
    pub fn validate(&mut self) {
        if !(self.minimum_px_per_sec > 0.0) {
            self.minimum_px_per_sec = MIN_PX_PER_SEC;
        }
        if !(self.increment_px_per_sec > 0.0) {
            self.increment_px_per_sec = ZOOM_INCREMENT;
        }
        if !(self.initial_px_per_sec >= self.minimum_px_per_sec) {
            self.initial_px_per_sec = self.minimum_px_per_sec;
        }
    }
}

/// Debounce configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebounceConfig {
    /// Wheel gestures settle into one zoom step after this many ms
    pub wheel_ms: u64,
    /// Region list recompute after create/update/remove bursts
    pub regions_ms: u64,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            wheel_ms: 100,
            regions_ms: 25,
        }
    }
}

impl DebounceConfig {
    pub fn wheel_window(&self) -> Duration {
        Duration::from_millis(self.wheel_ms)
    }

    pub fn regions_window(&self) -> Duration {
        Duration::from_millis(self.regions_ms)
    }
}

/// Get the default config file path
///
/// Returns: ~/.config/regionmark/config.yaml
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("regionmark")
        .join("config.yaml")
}

/// Load configuration from a YAML file
///
/// If the file doesn't exist, returns default config.
/// If the file exists but is invalid, logs a warning and returns default config.
pub fn load_config(path: &Path) -> Config {
    log::info!("load_config: Loading from {:?}", path);

    if !path.exists() {
        log::info!("load_config: Config file doesn't exist, using defaults");
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<Config>(&contents) {
            Ok(mut config) => {
                config.validate();
                log::info!(
                    "load_config: Loaded config - zoom floor {} px/s, step {} px/s",
                    config.zoom.minimum_px_per_sec,
                    config.zoom.increment_px_per_sec
                );
                config
            }
            Err(e) => {
                log::warn!("load_config: Failed to parse config: {}, using defaults", e);
                Config::default()
            }
        },
        Err(e) => {
            log::warn!("load_config: Failed to read config file: {}, using defaults", e);
            Config::default()
        }
    }
}

/// Save configuration to a YAML file
///
/// Creates parent directories if they don't exist.
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    log::info!("save_config: Saving to {:?}", path);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize config to YAML")?;

    std::fs::write(path, yaml)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    log::info!("save_config: Config saved successfully");
    Ok(())
}
