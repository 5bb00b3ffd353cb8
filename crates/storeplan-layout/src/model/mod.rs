//! Layout entities: zones, shelves and the products placed on them.
//!
//! Zones and shelves share one rectangle shape, exposed through
//! [`LayoutShape`]; overlap detection, metrics and packing only ever see
//! that trait.

use crate::geometry::Rect;

mod product;
mod shelf;
mod zone;

pub use product::Product;
pub use shelf::{Shelf, ShelfDraft, ShelfPatch};
pub use zone::{Zone, ZoneDraft, ZonePatch};

/// The rectangle base shared by every positioned layout entity.
pub trait LayoutShape {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn rect(&self) -> Rect;
    fn set_rect(&mut self, rect: Rect);

    /// Derived flag; only the overlap pass should write it.
    fn is_overlapping(&self) -> bool;
    fn set_overlapping(&mut self, overlapping: bool);

    fn area(&self) -> f64 {
        self.rect().area()
    }
}

/// Generates a fresh opaque identifier for a new zone or shelf.
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Validation for user input: drafts must have finite fields and a
/// strictly positive size.
pub(crate) fn validate_rect(label: &str, rect: &Rect) -> storeplan_core::Result<()> {
    check_rect(label, rect, true, true)
}

/// Validation for a patched rectangle. Only the sides the patch sets must be
/// strictly positive; untouched sides may keep a packed size of zero.
pub(crate) fn validate_patched_rect(
    label: &str,
    rect: &Rect,
    width_changed: bool,
    height_changed: bool,
) -> storeplan_core::Result<()> {
    check_rect(label, rect, width_changed, height_changed)
}

/// Validation for geometry the engine already holds or wrote out: finite
/// fields and a non-negative size. The packer can leave a height of zero.
pub(crate) fn validate_stored_rect(label: &str, rect: &Rect) -> storeplan_core::Result<()> {
    check_rect(label, rect, false, false)
}

fn check_rect(
    label: &str,
    rect: &Rect,
    strict_width: bool,
    strict_height: bool,
) -> storeplan_core::Result<()> {
    let side_ok = |v: f64, strict: bool| if strict { v > 0.0 } else { v >= 0.0 };
    let reason = if !rect.is_finite() {
        "coordinates must be finite".to_string()
    } else if !side_ok(rect.width, strict_width) || !side_ok(rect.height, strict_height) {
        let bound = if strict_width || strict_height { "> 0" } else { ">= 0" };
        format!(
            "width and height must be {} (got {} x {})",
            bound, rect.width, rect.height
        )
    } else {
        return Ok(());
    };
    Err(storeplan_core::LayoutError::InvalidRectangle {
        id: label.to_string(),
        reason,
    }
    .into())
}
