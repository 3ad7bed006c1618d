//! CabinetKit Settings Crate
//!
//! Loads, validates and saves the dimension table, run layout options and
//! countertop options.

pub mod config;
pub mod error;

pub use config::{Config, RunSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
