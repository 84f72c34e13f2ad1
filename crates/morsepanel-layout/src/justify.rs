//! Per-subpanel right justification of a finished row.

use morsepanel_core::{Rect, Subpanel};
use tracing::debug;

/// Slide the slots of one row flush against the right border of every
/// right-justified subpanel they fall in.
///
/// Each subpanel is handled on its own: the shift is taken from the
/// rightmost slot overlapping it and applied to every slot of the row that
/// overlaps it. Shifts are never negative, so justifying twice is a no-op.
pub fn justify_row(row: &mut [Rect], subpanels: &[Subpanel], right_border: f64) {
    for subpanel in subpanels.iter().filter(|s| s.right_justify) {
        let Some(rightmost) = row
            .iter()
            .rev()
            .find(|slot| slot.overlaps(&subpanel.bounds))
            .copied()
        else {
            continue;
        };
        let shift = (subpanel.bounds.ur_x - right_border - rightmost.ur_x).max(0.0);
        if shift == 0.0 {
            continue;
        }
        debug!(
            "shift slots in {} starting with {:.2}, {:.2} by {:.2} to the right",
            subpanel.name, rightmost.ll_x, rightmost.ll_y, shift
        );
        for slot in row.iter_mut() {
            if slot.overlaps(&subpanel.bounds) {
                *slot = slot.translated_x(shift);
            }
        }
    }
}
