//! Configuration and settings management for CabinetKit
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats stored in a platform-specific directory.
//!
//! Configuration is organized into logical sections:
//! - Dimension table (panel thicknesses, reveals, clearances)
//! - Run layout (standard widths, filler threshold, placement tolerance)
//! - Countertop and backsplash options

pub use cabinetkit_core::units::MeasurementSystem;
use cabinetkit_core::constants::{FILLER_THRESHOLD, PLACEMENT_HEIGHT_TOLERANCE, STANDARD_WIDTHS};
use cabinetkit_core::Dimensions;
use cabinetkit_designer::{CabinetBuilder, CountertopOptions, RunLayoutOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

const CONFIG_DIR: &str = "cabinetkit";
const CONFIG_FILE: &str = "config.toml";

/// Run layout settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunSettings {
    /// Cabinet widths tried by auto-fill, largest first
    pub standard_widths: Vec<f64>,
    /// Leftover below this is not worth a filler strip
    pub filler_threshold: f64,
    /// Cabinets whose heights differ by more than this are not aligned
    pub height_tolerance: f64,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            standard_widths: STANDARD_WIDTHS.to_vec(),
            filler_threshold: FILLER_THRESHOLD,
            height_tolerance: PLACEMENT_HEIGHT_TOLERANCE,
        }
    }
}

impl From<&RunSettings> for RunLayoutOptions {
    fn from(settings: &RunSettings) -> Self {
        Self {
            standard_widths: settings.standard_widths.clone(),
            filler_threshold: settings.filler_threshold,
            height_tolerance: settings.height_tolerance,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Units used when reading request lengths
    pub units: MeasurementSystem,
    /// Room assigned to requests that do not name one
    pub default_room: String,
    pub dimensions: Dimensions,
    pub run: RunSettings,
    pub countertop: CountertopOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            units: MeasurementSystem::Imperial,
            default_room: "Kitchen".to_string(),
            dimensions: Dimensions::default(),
            run: RunSettings::default(),
            countertop: CountertopOptions::default(),
        }
    }
}

fn out_of_range(key: &str, value: f64) -> ConfigError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config location, e.g. `~/.config/cabinetkit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no configuration directory on this platform".into())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: Self = match extension(path) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into())
            }
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into())
            }
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("Failed to write {}: {}", path.display(), e))
        })?;
        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        self.dimensions
            .validate()
            .map_err(|reason| ConfigError::ValueOutOfRange {
                key: "dimensions".to_string(),
                value: reason,
            })?;

        let widths = &self.run.standard_widths;
        if widths.is_empty() {
            return Err(ConfigError::InvalidWidths("no widths given".to_string()));
        }
        if let Some(bad) = widths.iter().find(|w| !(w.is_finite() && **w > 0.0)) {
            return Err(ConfigError::InvalidWidths(format!("{} is not positive", bad)));
        }
        if !widths.windows(2).all(|pair| pair[0] > pair[1]) {
            return Err(ConfigError::InvalidWidths(
                "widths must be listed largest first without repeats".to_string(),
            ));
        }
        if !(self.run.filler_threshold >= 0.0) {
            return Err(out_of_range("run.filler_threshold", self.run.filler_threshold));
        }
        if !(self.run.height_tolerance >= 0.0) {
            return Err(out_of_range("run.height_tolerance", self.run.height_tolerance));
        }

        let top = &self.countertop;
        if !(top.thickness > 0.0) {
            return Err(out_of_range("countertop.thickness", top.thickness));
        }
        for (key, value) in [
            ("countertop.front_overhang", top.front_overhang),
            ("countertop.back_overhang", top.back_overhang),
            ("countertop.side_overhang", top.side_overhang),
            ("countertop.seating_extra_depth", top.seating_extra_depth),
            ("countertop.backsplash_height", top.backsplash_height),
            ("countertop.backsplash_thickness", top.backsplash_thickness),
        ] {
            if !(value >= 0.0) {
                return Err(out_of_range(key, value));
            }
        }

        Ok(())
    }

    pub fn run_options(&self) -> RunLayoutOptions {
        RunLayoutOptions::from(&self.run)
    }

    /// Builder carrying this config's dimension table and countertop options.
    pub fn builder(&self) -> CabinetBuilder {
        CabinetBuilder::new(self.dimensions.clone()).with_countertop(self.countertop.clone())
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}
