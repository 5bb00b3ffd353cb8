//! Output snapshots handed to renderers and adapters.
//!
//! A snapshot is a consistent copy of one model after a mutation: overlap
//! flags and metrics always describe exactly the rectangles it carries.

use serde::{Deserialize, Serialize};

use crate::metrics::{LayoutMetrics, ShelfMetrics};
use crate::model::{Shelf, Zone};
use crate::packing::PackingReport;

/// Container size in store units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub width: f64,
    pub height: f64,
}

impl Container {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// The store's zones with derived flags and metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub container: Container,
    pub zones: Vec<Zone>,
    pub metrics: LayoutMetrics,
    pub selected_zone_id: Option<String>,
}

impl StoreSnapshot {
    pub fn zone(&self, id: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == id)
    }

    /// Ids of zones currently flagged as overlapping, in list order.
    pub fn overlapping_ids(&self) -> Vec<&str> {
        self.zones
            .iter()
            .filter(|z| z.is_overlapping)
            .map(|z| z.id.as_str())
            .collect()
    }
}

/// One zone's shelves with derived flags and metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelfSnapshot {
    pub zone_id: String,
    pub container: Container,
    pub shelves: Vec<Shelf>,
    pub metrics: ShelfMetrics,
    pub selected_shelf_id: Option<String>,
}

impl ShelfSnapshot {
    pub fn shelf(&self, id: &str) -> Option<&Shelf> {
        self.shelves.iter().find(|s| s.id == id)
    }

    pub fn overlapping_ids(&self) -> Vec<&str> {
        self.shelves
            .iter()
            .filter(|s| s.is_overlapping)
            .map(|s| s.id.as_str())
            .collect()
    }
}

/// A snapshot produced by auto-arrangement, with what the packer did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Optimized<S> {
    pub snapshot: S,
    pub report: PackingReport,
}
