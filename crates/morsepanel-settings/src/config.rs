//! Configuration for a Morse panel run
//!
//! Provides the configuration file model, its defaults and validation.
//! Supports JSON and TOML file formats, chosen by file extension.
//!
//! Configuration is organized into logical sections:
//! - Design (text, panel outline, row and timing constants, subpanels, restrictions)
//! - Script (drawing command and script preamble)
//! - Output (target directory, report formatting)

use morsepanel_core::{
    Borders, PanelDesign, PanelGeometry, Rect, Restriction, SlotMetrics, Subpanel, Timing,
};
use morsepanel_layout::ScriptParameters;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

/// Text of the security gate panel. Everything after the period is never laid out.
pub const DEFAULT_TEXT: &str = concat!(
    "San Francisco open your Golden Gate ",
    "You let no stranger wait outside your door ",
    "San Francisco here is your wandering one ",
    "Saying Ill wander no more ",
    "Other places only make me love you best ",
    "Tell me youre the heart of all the golden west ",
    "San Francisco welcome me home. again",
    "Im coming home to go roaming no more",
);

/// Base Morse time unit of the security gate panel
pub const DEFAULT_TIME_UNIT: f64 = 2.0;

/// The double-panel security gate: a small right-justified left panel and a
/// large left-justified right panel, separated by the frame, with room left
/// for the lockset and the intercom.
pub fn security_gate_design() -> PanelDesign {
    PanelDesign::new(
        DEFAULT_TEXT,
        PanelGeometry {
            width: 60.0,
            height: 100.0,
            restricted_border: 0.5,
            borders: Borders::uniform(1.0),
        },
        SlotMetrics {
            height: 1.5,
            vertical_spacing: 0.5,
        },
        Timing::from_unit(DEFAULT_TIME_UNIT),
    )
    .with_subpanel(Subpanel::new(
        "left_panel",
        Rect::new(0.0, 0.0, 19.5, 100.0),
        true,
    ))
    .with_subpanel(Subpanel::new(
        "right_panel",
        Rect::new(20.5, 0.0, 60.0, 100.0),
        false,
    ))
    // separation between the panels for the frames
    .with_restriction(Restriction::new(Rect::new(18.0, 0.0, 22.0, 100.0), false))
    // lockset on the right panel
    .with_restriction(Restriction::new(
        Rect::new(20.5, 31.0, 20.5 + 7.5, 31.0 + 10.0),
        false,
    ))
    // intercom on the left panel
    .with_restriction(Restriction::new(
        Rect::new(1.0, 50.0, 1.0 + 6.25, 50.0 + 9.75),
        false,
    ))
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Directory receiving the script files
    pub directory: PathBuf,
    /// Decimal places of the utilization percentage in the report
    pub report_precision: usize,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            report_precision: 1,
        }
    }
}

/// Complete run configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub design: PanelDesign,
    #[serde(default)]
    pub script: ScriptParameters,
    #[serde(default)]
    pub output: OutputSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            design: security_gate_design(),
            script: ScriptParameters::default(),
            output: OutputSettings::default(),
        }
    }
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> ConfigResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("(none)").to_string(),
        )),
    }
}

fn positive(key: &str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ValueOutOfRange {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

fn non_negative(key: &str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ValueOutOfRange {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

fn well_formed(key: &str, rect: &Rect) -> ConfigResult<()> {
    let finite = [rect.ll_x, rect.ll_y, rect.ur_x, rect.ur_y]
        .iter()
        .all(|v| v.is_finite());
    if finite && rect.is_well_formed() {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            key: key.to_string(),
            reason: format!(
                "lower-left ({}, {}) must be below and left of upper-right ({}, {})",
                rect.ll_x, rect.ll_y, rect.ur_x, rect.ur_y
            ),
        })
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let design = &self.design;

        if design.text.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "design.text".to_string(),
                reason: "text must not be empty".to_string(),
            });
        }
        if design.stop_marker.is_ascii_alphanumeric() || design.stop_marker == ' ' {
            return Err(ConfigError::InvalidValue {
                key: "design.stop_marker".to_string(),
                reason: format!("{:?} has a Morse code of its own", design.stop_marker),
            });
        }
        if design.slot_capacity == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "design.slot_capacity".to_string(),
                value: "0".to_string(),
            });
        }

        // Validate panel outline
        let panel = &design.panel;
        positive("design.panel.width", panel.width)?;
        positive("design.panel.height", panel.height)?;
        non_negative("design.panel.restricted_border", panel.restricted_border)?;
        non_negative("design.panel.borders.top", panel.borders.top)?;
        non_negative("design.panel.borders.bottom", panel.borders.bottom)?;
        non_negative("design.panel.borders.left", panel.borders.left)?;
        non_negative("design.panel.borders.right", panel.borders.right)?;
        if panel.borders.left + panel.borders.right >= panel.width
            || panel.borders.top + panel.borders.bottom >= panel.height
        {
            return Err(ConfigError::InvalidValue {
                key: "design.panel.borders".to_string(),
                reason: "borders leave no printable area".to_string(),
            });
        }

        // Validate rows and timing
        positive("design.slots.height", design.slots.height)?;
        non_negative("design.slots.vertical_spacing", design.slots.vertical_spacing)?;
        positive("design.timing.dot", design.timing.dot)?;
        positive("design.timing.dash", design.timing.dash)?;
        non_negative("design.timing.symbol_gap", design.timing.symbol_gap)?;
        non_negative("design.timing.letter_gap", design.timing.letter_gap)?;

        // Validate subpanels and restrictions
        let mut names = HashSet::new();
        for (i, subpanel) in design.subpanels.iter().enumerate() {
            if subpanel.name.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: format!("design.subpanels[{}].name", i),
                    reason: "name must not be empty".to_string(),
                });
            }
            if !names.insert(subpanel.name.as_str()) {
                return Err(ConfigError::DuplicateSubpanel(subpanel.name.clone()));
            }
            well_formed(&format!("design.subpanels[{}].bounds", i), &subpanel.bounds)?;
        }
        for (i, restriction) in design.restrictions.iter().enumerate() {
            well_formed(
                &format!("design.restrictions[{}].bounds", i),
                &restriction.bounds,
            )?;
        }

        if self.script.draw_command.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "script.draw_command".to_string(),
                reason: "draw command must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
