//! Space-utilization metrics.
//!
//! Covered area is the plain sum of rectangle areas. Overlapping regions are
//! counted twice, which is why utilization is capped at 100.

use serde::{Deserialize, Serialize};

use crate::model::{LayoutShape, Shelf};
use crate::overlap::has_any_overlap;

/// Store-level metrics over the zones.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutMetrics {
    /// Percent of the store area covered by zones, in `[0, 100]`.
    pub utilization: f64,
    pub overlapping_zones: bool,
    /// Store area minus covered area, floored at zero.
    pub unused_space: f64,
}

/// Zone-level metrics over the zone's shelves.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelfMetrics {
    pub utilization: f64,
    pub overlapping_shelves: bool,
    pub unused_space: f64,
    /// Walkway score in `[0, 100]`; a 50% walkway ratio scores 100.
    pub accessibility: f64,
}

/// Walkway ratio multiplier: half the zone left free maps to a full score.
pub const ACCESSIBILITY_FACTOR: f64 = 200.0;

/// `covered / container * 100`, capped at 100. A degenerate container yields 0.
pub fn utilization_percent(covered: f64, container_area: f64) -> f64 {
    if container_area <= 0.0 {
        return 0.0;
    }
    (covered / container_area * 100.0).clamp(0.0, 100.0)
}

/// Sum of the areas of `items`.
pub fn covered_area<T: LayoutShape>(items: &[&T]) -> f64 {
    items.iter().map(|item| item.area()).sum()
}

/// Computes store metrics for `zones` inside a `width` x `height` store.
///
/// The overlap scan here is independent of the cached flags but uses the
/// same gap, so both always agree.
pub fn layout_metrics<T: LayoutShape>(width: f64, height: f64, zones: &[&T], gap: f64) -> LayoutMetrics {
    let store_area = width * height;
    let zone_area = covered_area(zones);
    LayoutMetrics {
        utilization: utilization_percent(zone_area, store_area),
        overlapping_zones: has_any_overlap(zones, gap),
        unused_space: (store_area - zone_area).max(0.0),
    }
}

/// Computes shelf metrics for the shelves of one zone of `zone_width` x `zone_height`.
pub fn shelf_metrics(zone_width: f64, zone_height: f64, shelves: &[&Shelf], gap: f64) -> ShelfMetrics {
    let zone_area = zone_width * zone_height;
    if zone_area <= 0.0 {
        return ShelfMetrics {
            overlapping_shelves: has_any_overlap(shelves, gap),
            ..ShelfMetrics::default()
        };
    }
    let shelf_area = covered_area(shelves);
    let walkway = zone_area - shelf_area;
    ShelfMetrics {
        utilization: utilization_percent(shelf_area, zone_area),
        overlapping_shelves: has_any_overlap(shelves, gap),
        unused_space: walkway.max(0.0),
        accessibility: (walkway / zone_area * ACCESSIBILITY_FACTOR).clamp(0.0, 100.0),
    }
}
