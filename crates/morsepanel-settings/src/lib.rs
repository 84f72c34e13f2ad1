//! MorsePanel Settings Crate
//!
//! Handles the panel design configuration: file formats, defaults and validation.

pub mod config;
pub mod error;

pub use config::{
    security_gate_design, Config, OutputSettings, DEFAULT_TEXT, DEFAULT_TIME_UNIT,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
