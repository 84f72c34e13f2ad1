//! Axis-aligned rectangles in panel coordinates.
//!
//! The origin is the lower-left corner of the panel, x grows to the right
//! and y grows upward.

use serde::{Deserialize, Serialize};

/// Rectangle given by its lower-left and upper-right corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub ll_x: f64,
    pub ll_y: f64,
    pub ur_x: f64,
    pub ur_y: f64,
}

impl Rect {
    pub fn new(ll_x: f64, ll_y: f64, ur_x: f64, ur_y: f64) -> Self {
        Self {
            ll_x,
            ll_y,
            ur_x,
            ur_y,
        }
    }

    /// Build a rectangle from its lower-left corner and size.
    pub fn from_corner(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    pub fn width(&self) -> f64 {
        self.ur_x - self.ll_x
    }

    pub fn height(&self) -> f64 {
        self.ur_y - self.ll_y
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Whether the corners are ordered (`ll < ur` on both axes).
    pub fn is_well_formed(&self) -> bool {
        self.ll_x < self.ur_x && self.ll_y < self.ur_y
    }

    /// Strict overlap on both axes. Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.ll_x < other.ur_x
            && self.ur_x > other.ll_x
            && self.ll_y < other.ur_y
            && self.ur_y > other.ll_y
    }

    /// Whether `other` lies entirely inside this rectangle (edges may touch).
    pub fn contains(&self, other: &Rect) -> bool {
        other.ll_x >= self.ll_x
            && other.ur_x <= self.ur_x
            && other.ll_y >= self.ll_y
            && other.ur_y <= self.ur_y
    }

    /// Shrink by `margin` on all four sides.
    pub fn inset(&self, margin: f64) -> Rect {
        Rect::new(
            self.ll_x + margin,
            self.ll_y + margin,
            self.ur_x - margin,
            self.ur_y - margin,
        )
    }

    /// Move horizontally by `dx`.
    pub fn translated_x(&self, dx: f64) -> Rect {
        Rect::new(self.ll_x + dx, self.ll_y, self.ur_x + dx, self.ur_y)
    }
}
