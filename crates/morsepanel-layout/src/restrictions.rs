//! Restricted area avoidance
//!
//! Computes how far a candidate glyph must move right to get out of the way
//! of the restricted areas crossing its row.

use morsepanel_core::{LayoutError, Rect, Restriction};
use tracing::debug;

/// Looks up restricted areas in declaration order.
#[derive(Debug, Clone, Copy)]
pub struct RestrictionResolver<'a> {
    restrictions: &'a [Restriction],
    max_iterations: usize,
}

impl<'a> RestrictionResolver<'a> {
    pub fn new(restrictions: &'a [Restriction]) -> Self {
        Self {
            restrictions,
            max_iterations: restrictions.len() + 1,
        }
    }

    /// Lower the number of shifts [`clear`](Self::clear) may try.
    pub fn with_iteration_limit(mut self, limit: usize) -> Self {
        self.max_iterations = limit.min(self.max_iterations);
        self
    }

    fn blocking(&self, candidate: &Rect) -> Option<&'a Restriction> {
        let hit = self
            .restrictions
            .iter()
            .find(|r| candidate.overlaps(&r.bounds))?;
        debug!(
            "restricted rectangle at {:.2}, {:.2} with height {:.2} and width {:.2}; adjust x by {:.2}",
            candidate.ll_x,
            candidate.ll_y,
            candidate.height(),
            candidate.width(),
            hit.bounds.ur_x - candidate.ll_x
        );
        Some(hit)
    }

    /// Shift that puts the candidate's left edge on the right edge of the
    /// first restriction it overlaps, or 0 when it overlaps none.
    pub fn resolve(&self, candidate: &Rect) -> f64 {
        self.blocking(candidate)
            .map(|r| r.bounds.ur_x - candidate.ll_x)
            .unwrap_or(0.0)
    }

    /// Move `x` right until a `width` x `height` box at (`x`, `y`) clears
    /// every restriction, and return the new `x`.
    ///
    /// The box is snapped onto the blocking restriction's right edge rather
    /// than moved by the computed shift, so rounding cannot leave it a hair
    /// short and trip the same restriction twice.
    pub fn clear(&self, mut x: f64, width: f64, y: f64, height: f64) -> Result<f64, LayoutError> {
        for _ in 0..self.max_iterations {
            match self.blocking(&Rect::from_corner(x, y, width, height)) {
                None => return Ok(x),
                Some(r) => x = x.max(r.bounds.ur_x),
            }
        }
        if self.blocking(&Rect::from_corner(x, y, width, height)).is_none() {
            return Ok(x);
        }
        Err(LayoutError::UnresolvedRestriction {
            x,
            y,
            iterations: self.max_iterations,
        })
    }
}
