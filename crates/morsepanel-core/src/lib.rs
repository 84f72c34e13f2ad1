//! # MorsePanel Core
//!
//! Core types shared by the MorsePanel crates.
//! Provides the rectangle geometry, the panel data model (subpanels,
//! restrictions, borders, timing) and the unified error type.

pub mod error;
pub mod geometry;
pub mod panel;

pub use error::{Error, LayoutError, Result};
pub use geometry::Rect;
pub use panel::{
    Borders, PanelDesign, PanelGeometry, Restriction, SlotMetrics, Subpanel, Timing,
    DEFAULT_SLOT_CAPACITY, DEFAULT_STOP_MARKER,
};
