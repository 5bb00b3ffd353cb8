//! Shelf layout model: the shelves of every zone, queried and mutated one
//! zone at a time.
//!
//! Shelf coordinates are zone-local, so a zone's `width` x `height` is the
//! container for its shelves. Overlap is only evaluated between shelves of
//! the same zone, using the shelf gap.
//!
//! Submodules:
//! - `shelves`: add, update, delete, bulk-clear, replace and select shelves
//! - `arrange`: auto-arrangement of one zone's shelves

mod arrange;
mod shelves;

use storeplan_core::Result;
use tracing::debug;

use crate::geometry::Rect;
use crate::metrics::{shelf_metrics, ShelfMetrics};
use crate::model::{validate_stored_rect, LayoutShape, Shelf, Zone};
use crate::options::LayoutOptions;
use crate::overlap::detect_overlaps_grouped;
use crate::selection_manager::SelectionManager;
use crate::snapshot::{Container, ShelfSnapshot};

/// Every shelf in the store, grouped by `zone_id`.
#[derive(Debug, Clone, Default)]
pub struct ShelfLayout {
    shelves: Vec<Shelf>,
    selection: SelectionManager,
    options: LayoutOptions,
}

impl ShelfLayout {
    pub fn new(options: LayoutOptions) -> Self {
        Self {
            shelves: Vec::new(),
            selection: SelectionManager::new(),
            options,
        }
    }

    /// Builds the model from existing shelves; stored flags are recomputed.
    pub fn from_shelves(shelves: Vec<Shelf>, options: LayoutOptions) -> Result<Self> {
        for shelf in &shelves {
            validate_stored_rect(&shelf.id, &shelf.rect())?;
        }
        let mut layout = Self {
            shelves,
            selection: SelectionManager::new(),
            options,
        };
        layout.detect_overlaps();
        Ok(layout)
    }

    /// All shelves, in insertion order.
    pub fn shelves(&self) -> &[Shelf] {
        &self.shelves
    }

    pub fn shelf(&self, id: &str) -> Option<&Shelf> {
        self.shelves.iter().find(|s| s.id == id)
    }

    /// Shelves belonging to `zone_id`, in insertion order.
    pub fn shelves_in_zone(&self, zone_id: &str) -> Vec<&Shelf> {
        self.shelves.iter().filter(|s| s.zone_id == zone_id).collect()
    }

    pub fn shelf_count(&self) -> usize {
        self.shelves.len()
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    pub fn selected_shelf_id(&self) -> Option<&str> {
        self.selection.selected_id()
    }

    /// Shelves whose zone no longer exists according to `zone_exists`.
    pub fn orphaned_shelves(&self, zone_exists: impl Fn(&str) -> bool) -> Vec<&Shelf> {
        self.shelves
            .iter()
            .filter(|s| !zone_exists(&s.zone_id))
            .collect()
    }

    /// Resets and recomputes `is_overlapping` for every shelf, zone by zone.
    ///
    /// Returns the number of flagged shelves across all zones.
    pub fn detect_overlaps(&mut self) -> usize {
        detect_overlaps_grouped(&mut self.shelves, self.options.shelf_gap, |s| {
            s.zone_id.clone()
        })
    }

    /// Computes fresh metrics for `zone`'s shelves.
    pub fn calculate_shelf_metrics(&self, zone: &Zone) -> ShelfMetrics {
        let scoped = self.shelves_in_zone(&zone.id);
        shelf_metrics(zone.width, zone.height, &scoped, self.options.shelf_gap)
    }

    /// Copies `zone`'s shelves out together with fresh metrics.
    pub fn snapshot(&self, zone: &Zone) -> ShelfSnapshot {
        ShelfSnapshot {
            zone_id: zone.id.clone(),
            container: Container::new(zone.width, zone.height),
            shelves: self.shelves_in_zone(&zone.id).into_iter().cloned().collect(),
            metrics: self.calculate_shelf_metrics(zone),
            selected_shelf_id: self
                .selection
                .selected_id()
                .filter(|id| self.shelf(id).is_some_and(|s| s.zone_id == zone.id))
                .map(str::to_string),
        }
    }

    /// Overlap pass, then a snapshot of `zone` (which computes its metrics).
    pub(crate) fn recompute(&mut self, zone: &Zone) -> ShelfSnapshot {
        let flagged = self.detect_overlaps();
        let snapshot = self.snapshot(zone);
        debug!(
            zone = %zone.id,
            shelves = snapshot.shelves.len(),
            flagged,
            accessibility = snapshot.metrics.accessibility,
            "recomputed shelf layout"
        );
        snapshot
    }

    pub(crate) fn clamp_rect(&self, zone: &Zone, rect: Rect) -> Rect {
        if self.options.clamp_to_container {
            rect.clamp_within(zone.width, zone.height)
        } else {
            rect
        }
    }
}
