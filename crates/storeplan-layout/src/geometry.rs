//! Axis-aligned rectangle geometry.
//!
//! All coordinates are store-space units (meters) with the origin at the
//! top-left corner of the container. Every function here is pure.

use serde::{Deserialize, Serialize};

/// Separation required between two zones before they stop counting as overlapping.
pub const ZONE_OVERLAP_GAP: f64 = 0.0;

/// Separation required between two shelves of the same zone.
pub const SHELF_OVERLAP_GAP: f64 = 0.1;

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (`x + width`).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// True when every field is finite.
    pub fn is_finite(&self) -> bool {
        [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
    }

    /// True when the size is strictly positive and every field is finite.
    pub fn is_valid(&self) -> bool {
        [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Returns true unless the two rectangles are separated by at least `gap`
    /// along the x-axis or the y-axis.
    ///
    /// Rectangles that merely share an edge do not overlap when `gap == 0`.
    pub fn overlaps(&self, other: &Rect, gap: f64) -> bool {
        !(self.right() + gap <= other.x
            || other.right() + gap <= self.x
            || self.bottom() + gap <= other.y
            || other.bottom() + gap <= self.y)
    }

    /// True if `other` lies entirely inside this rectangle (edges inclusive).
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Moves (and if needed shrinks) the rectangle so it lies within a
    /// `width` x `height` container anchored at the origin.
    ///
    /// The size is reduced only when it exceeds the container; the position
    /// is then pulled back inside.
    pub fn clamp_within(&self, width: f64, height: f64) -> Rect {
        let w = self.width.min(width);
        let h = self.height.min(height);
        let x = self.x.clamp(0.0, (width - w).max(0.0));
        let y = self.y.clamp(0.0, (height - h).max(0.0));
        Rect::new(x, y, w, h)
    }
}

/// Free-function form of [`Rect::overlaps`].
pub fn overlaps(a: &Rect, b: &Rect, gap: f64) -> bool {
    a.overlaps(b, gap)
}

/// Free-function form of [`Rect::area`].
pub fn area(r: &Rect) -> f64 {
    r.area()
}
