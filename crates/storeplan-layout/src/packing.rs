//! # Auto-Arrangement Module
//!
//! Repositions a list of rectangles inside a container with a single
//! left-to-right, top-to-bottom row-packing pass.
//!
//! Supports:
//! - Stable packing order (input order is the packing order, no sorting)
//! - Row wrapping when the next rectangle would start past the right edge
//! - Proportional scale-down of rectangles that do not fit the remaining height
//!
//! Rectangles wider than the container are not clipped: they overflow the
//! right edge of their row. The packer does not decide overlap; callers run
//! the regular overlap pass on the result.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::geometry::Rect;
use crate::model::LayoutShape;

/// Smallest width a scaled-down rectangle is allowed to keep.
pub const MIN_SCALED_WIDTH: f64 = 1.0;

/// What happened during a packing pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackingReport {
    /// Number of rectangles positioned.
    pub placed: usize,
    /// Number of times the cursor wrapped to a new row.
    pub rows_wrapped: usize,
    /// Ids of rectangles that were scaled down to fit vertically.
    pub scaled: Vec<String>,
    /// Ids of rectangles wider than the container.
    pub overflowing: Vec<String>,
}

impl PackingReport {
    /// True when every rectangle kept its size.
    pub fn is_lossless(&self) -> bool {
        self.scaled.is_empty()
    }
}

/// Row-packing cursor.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    x: f64,
    y: f64,
    row_height: f64,
}

/// Packs `items` in place into a `width` x `height` container.
///
/// For each rectangle, in order:
/// 1. wrap to a new row if it would start past the right edge,
/// 2. scale it down (height to the remaining space, width by the same
///    factor, floored at [`MIN_SCALED_WIDTH`]) if it does not fit vertically,
/// 3. place it at the cursor and clear its overlap flag,
/// 4. advance the cursor by its (possibly scaled) size.
///
/// Given the same container and input order the output is always the same.
pub fn pack_rows<T: LayoutShape>(items: &mut [T], width: f64, height: f64) -> PackingReport {
    let mut report = PackingReport::default();
    let mut cursor = Cursor {
        x: 0.0,
        y: 0.0,
        row_height: 0.0,
    };

    for item in items.iter_mut() {
        let rect = item.rect();
        let mut w = rect.width;
        let mut h = rect.height;

        if w > width {
            warn!(
                id = item.id(),
                width = w,
                container_width = width,
                "rectangle wider than its container; it will overflow the row"
            );
            report.overflowing.push(item.id().to_string());
        }

        if cursor.x + w > width {
            cursor.x = 0.0;
            cursor.y += cursor.row_height;
            cursor.row_height = 0.0;
            report.rows_wrapped += 1;
        }

        if cursor.y + h > height {
            let remaining = height - cursor.y;
            let scale_factor = remaining / h;
            h = remaining;
            w = (w * scale_factor).max(MIN_SCALED_WIDTH);
            warn!(
                id = item.id(),
                scale_factor,
                width = w,
                height = h,
                "rectangle scaled down to fit remaining height"
            );
            report.scaled.push(item.id().to_string());
        }

        item.set_rect(Rect::new(cursor.x, cursor.y, w, h));
        item.set_overlapping(false);

        cursor.x += w;
        cursor.row_height = cursor.row_height.max(h);
        report.placed += 1;
    }

    report
}
