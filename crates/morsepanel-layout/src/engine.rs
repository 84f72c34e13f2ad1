//! Panel layout engine
//!
//! Drives the row packer from the top of the printable area downward,
//! justifies every finished row and totals the area covered by slots.

use std::ops::Range;

use morsepanel_core::{LayoutError, PanelDesign, Rect, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::glyph::GlyphEncoder;
use crate::justify::justify_row;
use crate::restrictions::RestrictionResolver;
use crate::row_packer::{RowEnd, RowPacker, TextCursor};

/// One laid-out row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowSummary {
    /// Bottom of the row band
    pub y: f64,
    /// Indices of this row's slots in [`PanelLayout::slots`]
    pub slots: Range<usize>,
    /// Characters placed on the row
    pub text: String,
}

/// Outcome of a full layout run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelLayout {
    pub slots: Vec<Rect>,
    pub rows: Vec<RowSummary>,
    /// Whether the stop marker ended the layout before the panel was full
    pub forced_stop: bool,
    /// How many times the text was restarted from its beginning
    pub text_wraps: usize,
    /// Sum of the slot areas
    pub covered_area: f64,
    /// Full panel area, restricted areas included
    pub panel_area: f64,
}

impl PanelLayout {
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Share of the whole panel covered by slots, in percent.
    ///
    /// Restricted areas stay in the denominator.
    pub fn utilization_percent(&self) -> f64 {
        if self.panel_area <= 0.0 {
            return 0.0;
        }
        100.0 * self.covered_area / self.panel_area
    }

    /// Slots of one row.
    pub fn row_slots(&self, row: &RowSummary) -> &[Rect] {
        &self.slots[row.slots.clone()]
    }
}

/// Lays out the Morse slots of a [`PanelDesign`].
pub struct PanelLayoutEngine<'a> {
    design: &'a PanelDesign,
}

impl<'a> PanelLayoutEngine<'a> {
    pub fn new(design: &'a PanelDesign) -> Self {
        Self { design }
    }

    /// Lay out the whole panel.
    ///
    /// Fails with [`LayoutError::InvalidRowPitch`] unless slots have a finite
    /// positive height and each row sits strictly below the previous one.
    pub fn run(&self) -> Result<PanelLayout> {
        let design = self.design;
        let panel = &design.panel;
        let pitch = design.slots.row_pitch();
        if !(design.slots.height > 0.0 && pitch > 0.0 && pitch.is_finite()) {
            return Err(LayoutError::InvalidRowPitch {
                height: design.slots.height,
                spacing: design.slots.vertical_spacing,
            }
            .into());
        }
        let packer = RowPacker::new(
            GlyphEncoder::new(design.timing),
            RestrictionResolver::new(&design.restrictions),
            panel.borders.left,
            panel.right_limit(),
            design.slots.height,
        )
        .with_stop_marker(design.stop_marker)
        .with_slot_capacity(design.slot_capacity);

        let mut cursor = TextCursor::new(&design.text);
        let mut slots = Vec::new();
        let mut rows = Vec::new();
        let mut forced_stop = false;

        let mut y = panel.height - panel.borders.top - design.slots.height;
        while y >= panel.borders.bottom {
            let start = slots.len();
            let row = packer.pack(y, &mut cursor, &mut slots)?;
            justify_row(&mut slots[start..], &design.subpanels, panel.borders.right);

            debug!("row at {:.2}: {:?} ({} slots)", y, row.text, slots.len() - start);
            rows.push(RowSummary {
                y,
                slots: start..slots.len(),
                text: row.text,
            });

            match row.end {
                RowEnd::Wrapped => {}
                RowEnd::ForcedStop => {
                    forced_stop = true;
                    break;
                }
                RowEnd::BlankText => break,
            }
            y -= pitch;
        }

        let covered_area: f64 = slots.iter().map(Rect::area).sum();
        let layout = PanelLayout {
            slots,
            rows,
            forced_stop,
            text_wraps: cursor.wraps(),
            covered_area,
            panel_area: panel.area(),
        };
        info!(
            "laid out {} slots in {} rows, {:.1}% of the panel covered",
            layout.slot_count(),
            layout.rows.len(),
            layout.utilization_percent()
        );
        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morsepanel_core::{Borders, PanelGeometry, SlotMetrics, Timing};

    fn design(text: &str, width: f64, height: f64) -> PanelDesign {
        PanelDesign::new(
            text,
            PanelGeometry {
                width,
                height,
                borders: Borders::uniform(1.0),
                restricted_border: 0.5,
            },
            SlotMetrics {
                height: 1.5,
                vertical_spacing: 0.5,
            },
            Timing {
                dot: 1.0,
                dash: 2.0,
                symbol_gap: 0.25,
                letter_gap: 0.5,
            },
        )
    }

    #[test]
    fn test_rows_step_down_from_top() {
        // rows at 7.5, 5.5, 3.5, 1.5; 1.5 - 2 < 1 stops
        let layout = PanelLayoutEngine::new(&design("E", 20.0, 10.0)).run().unwrap();
        let ys: Vec<f64> = layout.rows.iter().map(|r| r.y).collect();
        assert_eq!(ys, vec![7.5, 5.5, 3.5, 1.5]);
        assert!(!layout.forced_stop);
        for row in &layout.rows {
            assert!(layout
                .row_slots(row)
                .iter()
                .all(|s| s.ll_y == row.y && s.ur_y == row.y + 1.5));
        }
    }

    #[test]
    fn test_area_and_utilization() {
        let layout = PanelLayoutEngine::new(&design("T.", 20.0, 10.0)).run().unwrap();
        assert_eq!(layout.slot_count(), 1);
        assert_eq!(layout.covered_area, 3.0);
        assert_eq!(layout.panel_area, 200.0);
        assert_eq!(layout.utilization_percent(), 1.5);
    }

    #[test]
    fn test_panel_too_short_for_a_row() {
        let layout = PanelLayoutEngine::new(&design("E", 20.0, 3.0)).run().unwrap();
        assert!(layout.rows.is_empty());
        assert_eq!(layout.utilization_percent(), 0.0);
    }

    #[test]
    fn test_errors_propagate() {
        let err = PanelLayoutEngine::new(&design("E?", 20.0, 10.0))
            .run()
            .unwrap_err();
        assert!(err.is_layout_error());
    }

    #[test]
    fn test_rows_that_never_move_down_are_rejected() {
        let mut flat = design("0", 5.0, 10.0);
        flat.slots = SlotMetrics {
            height: 0.0,
            vertical_spacing: 0.0,
        };
        let err = PanelLayoutEngine::new(&flat).run().unwrap_err();
        assert_eq!(
            err.layout_kind(),
            Some(&LayoutError::InvalidRowPitch {
                height: 0.0,
                spacing: 0.0
            })
        );

        // positive height cancelled by negative spacing
        flat.slots = SlotMetrics {
            height: 1.5,
            vertical_spacing: -1.5,
        };
        assert!(PanelLayoutEngine::new(&flat).run().is_err());
    }
}
