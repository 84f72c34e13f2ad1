//! Panel data model
//!
//! Static input consumed by the layout engine: the panel outline and its
//! margins, the row and timing constants that size the Morse slots, the named
//! subpanels and the restricted areas.

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// Character in the text that ends the layout immediately.
pub const DEFAULT_STOP_MARKER: char = '.';

/// Maximum number of slots tracked for one panel.
pub const DEFAULT_SLOT_CAPACITY: usize = 2000;

/// Margins kept free of slots on each side of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Borders {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Borders {
    /// Same margin on all four sides.
    pub fn uniform(margin: f64) -> Self {
        Self {
            top: margin,
            bottom: margin,
            left: margin,
            right: margin,
        }
    }
}

/// Outline of the whole panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelGeometry {
    pub width: f64,
    pub height: f64,
    /// Inset applied to restriction cutouts when they are drawn
    pub restricted_border: f64,
    pub borders: Borders,
}

impl PanelGeometry {
    /// Full panel area, restricted areas included.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Rightmost x a slot may reach.
    pub fn right_limit(&self) -> f64 {
        self.width - self.borders.right
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Vertical sizing of the slot rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotMetrics {
    pub height: f64,
    pub vertical_spacing: f64,
}

impl SlotMetrics {
    /// Distance between the bottoms of two consecutive rows.
    pub fn row_pitch(&self) -> f64 {
        self.height + self.vertical_spacing
    }
}

/// Morse timing constants. One time unit maps to one unit of width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    pub dot: f64,
    pub dash: f64,
    /// Gap after every dot or dash
    pub symbol_gap: f64,
    /// Extra gap after every character
    pub letter_gap: f64,
}

impl Timing {
    /// Timing derived from a base unit with the classic proportions:
    /// dash = 2 dots, symbol gap = 1/4 dot, letter gap = 1/2 dot.
    pub fn from_unit(unit: f64) -> Self {
        Self {
            dot: unit,
            dash: 2.0 * unit,
            symbol_gap: 0.25 * unit,
            letter_gap: 0.5 * unit,
        }
    }
}

/// A named region of the panel with its own script file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subpanel {
    pub name: String,
    #[serde(default)]
    pub right_justify: bool,
    pub bounds: Rect,
}

impl Subpanel {
    pub fn new(name: impl Into<String>, bounds: Rect, right_justify: bool) -> Self {
        Self {
            name: name.into(),
            right_justify,
            bounds,
        }
    }
}

/// A rectangle that receives no Morse slots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Restriction {
    /// Draw an inset outline of this area in the enclosing subpanel's script
    #[serde(default)]
    pub draw_cutout: bool,
    pub bounds: Rect,
}

impl Restriction {
    pub fn new(bounds: Rect, draw_cutout: bool) -> Self {
        Self {
            draw_cutout,
            bounds,
        }
    }
}

fn default_stop_marker() -> char {
    DEFAULT_STOP_MARKER
}

fn default_slot_capacity() -> usize {
    DEFAULT_SLOT_CAPACITY
}

/// Everything the layout engine needs for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelDesign {
    /// Letters, digits and spaces, optionally containing the stop marker
    pub text: String,
    #[serde(default = "default_stop_marker")]
    pub stop_marker: char,
    #[serde(default = "default_slot_capacity")]
    pub slot_capacity: usize,
    pub panel: PanelGeometry,
    pub slots: SlotMetrics,
    pub timing: Timing,
    #[serde(default)]
    pub subpanels: Vec<Subpanel>,
    #[serde(default)]
    pub restrictions: Vec<Restriction>,
}

impl PanelDesign {
    /// A design with no subpanels or restrictions.
    pub fn new(
        text: impl Into<String>,
        panel: PanelGeometry,
        slots: SlotMetrics,
        timing: Timing,
    ) -> Self {
        Self {
            text: text.into(),
            stop_marker: DEFAULT_STOP_MARKER,
            slot_capacity: DEFAULT_SLOT_CAPACITY,
            panel,
            slots,
            timing,
            subpanels: Vec::new(),
            restrictions: Vec::new(),
        }
    }

    pub fn with_subpanel(mut self, subpanel: Subpanel) -> Self {
        self.subpanels.push(subpanel);
        self
    }

    pub fn with_restriction(mut self, restriction: Restriction) -> Self {
        self.restrictions.push(restriction);
        self
    }
}
