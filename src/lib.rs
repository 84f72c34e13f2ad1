//! # MorsePanel
//!
//! Converts a text into Morse code and packs the dots and dashes as slots
//! onto a panel, around restricted areas, then writes one CAD script per
//! subpanel describing the rectangles to cut.
//!
//! ## Architecture
//!
//! MorsePanel is organized as a workspace with multiple crates:
//!
//! 1. **morsepanel-core** - Geometry, panel data model, errors
//! 2. **morsepanel-layout** - Glyph encoding, row packing, justification, subpanel emission, scripts
//! 3. **morsepanel-settings** - Configuration files, defaults, validation
//! 4. **morsepanel** - Pipeline glue and the command line binary

pub mod pipeline;

pub use morsepanel_core::{
    Borders, Error, LayoutError, PanelDesign, PanelGeometry, Rect, Restriction, Result,
    SlotMetrics, Subpanel, Timing,
};
pub use morsepanel_layout::{
    PanelLayout, PanelLayoutEngine, ScriptGenerator, ScriptParameters, SubpanelOutput,
};
pub use morsepanel_settings::{Config, ConfigError, SettingsError};
pub use pipeline::{plan, write_scripts, RunReport, WrittenScript};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Exit code of every fatal error
pub const FATAL_EXIT_CODE: i32 = 8;

/// Initialize logging
///
/// Sets up structured logging with:
/// - stderr output, so stdout carries only the report
/// - RUST_LOG environment variable support, overriding `verbosity`
/// - warnings by default, `info` at verbosity 1, `debug` (per-glyph trace) above
pub fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(verbosity > 1);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
