//! Tunables for the layout models.

use serde::{Deserialize, Serialize};

use crate::geometry::{SHELF_OVERLAP_GAP, ZONE_OVERLAP_GAP};

/// Behavior switches shared by the zone and shelf models.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutOptions {
    /// Minimum separation between zones (0 means touching is fine).
    pub zone_gap: f64,
    /// Minimum separation between shelves of the same zone.
    pub shelf_gap: f64,
    /// Pull added/updated rectangles inside their container.
    /// Off by default: containment is not enforced, only overlap is tracked.
    pub clamp_to_container: bool,
    /// Delete a zone's shelves together with the zone.
    /// Off by default: shelves of a deleted zone are kept as orphans.
    pub cascade_zone_delete: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            zone_gap: ZONE_OVERLAP_GAP,
            shelf_gap: SHELF_OVERLAP_GAP,
            clamp_to_container: false,
            cascade_zone_delete: false,
        }
    }
}
