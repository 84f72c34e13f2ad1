//! Error handling for MorsePanel
//!
//! Every layout failure is fatal: the run either completes or aborts before
//! any script file is written. Layout failures carry a structured kind plus
//! the offending detail, and are wrapped by the unified [`Error`].
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Layout error type
///
/// Represents the fatal conditions raised while encoding text and packing
/// Morse slots into the panel.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// The text contains a character with no Morse code
    #[error("bad letter: {ch:?}")]
    InvalidCharacter {
        /// The unsupported character.
        ch: char,
    },

    /// A glyph pattern contains something other than a dot or a dash
    #[error("bad code: {symbol:?}")]
    InvalidSymbol {
        /// The unknown pattern symbol.
        symbol: char,
    },

    /// The layout produced more slots than the engine tracks
    #[error("too many slots: capacity of {capacity} exceeded")]
    SlotCapacityExceeded {
        /// The configured slot capacity.
        capacity: usize,
    },

    /// A candidate glyph kept colliding with restricted areas
    #[error("restricted areas not cleared at ({x:.2}, {y:.2}) after {iterations} shifts")]
    UnresolvedRestriction {
        /// Left edge of the candidate when the resolver gave up.
        x: f64,
        /// Bottom edge of the row band.
        y: f64,
        /// Number of shifts attempted.
        iterations: usize,
    },

    /// The slot rows would never move down the panel
    #[error("slot height {height} with spacing {spacing} cannot step down the panel")]
    InvalidRowPitch {
        /// Configured slot height.
        height: f64,
        /// Configured vertical spacing between rows.
        spacing: f64,
    },
}

/// Main error type for MorsePanel
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Layout error
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a layout error
    pub fn is_layout_error(&self) -> bool {
        matches!(self, Error::Layout(_))
    }

    /// The layout error kind, if any
    pub fn layout_kind(&self) -> Option<&LayoutError> {
        match self {
            Error::Layout(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
