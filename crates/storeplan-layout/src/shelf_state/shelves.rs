//! Shelf operations for one zone at a time.

use storeplan_core::Result;
use tracing::debug;

use super::ShelfLayout;
use crate::metrics::ShelfMetrics;
use crate::model::{
    generate_id, validate_patched_rect, validate_rect, LayoutShape, Shelf, ShelfDraft, ShelfPatch,
    Zone,
};
use crate::snapshot::{Container, ShelfSnapshot};

impl ShelfLayout {
    /// Adds a shelf to `zone` with a fresh id.
    pub fn add_shelf(&mut self, zone: &Zone, draft: ShelfDraft) -> Result<ShelfSnapshot> {
        validate_rect(&draft.name, &draft.rect())?;
        let mut shelf = Shelf::from_draft(generate_id(), zone.id.clone(), draft);
        shelf.set_rect(self.clamp_rect(zone, shelf.rect()));
        debug!(id = %shelf.id, zone = %zone.id, "adding shelf");
        self.shelves.push(shelf);
        Ok(self.recompute(zone))
    }

    /// Merges `patch` into the shelf `id` of `zone`.
    ///
    /// Ids that are unknown, or that belong to another zone, are a no-op.
    pub fn update_shelf(&mut self, zone: &Zone, id: &str, patch: &ShelfPatch) -> Result<ShelfSnapshot> {
        let found = self
            .shelves
            .iter()
            .position(|s| s.id == id && s.zone_id == zone.id);
        if let Some(index) = found {
            let mut merged = patch.merged(&self.shelves[index]);
            validate_patched_rect(
                id,
                &merged.rect(),
                patch.width.is_some(),
                patch.height.is_some(),
            )?;
            merged.set_rect(self.clamp_rect(zone, merged.rect()));
            self.shelves[index] = merged;
        } else {
            debug!(id, zone = %zone.id, "update for unknown shelf ignored");
        }
        Ok(self.recompute(zone))
    }

    /// Removes the shelf `id` from `zone`; unknown ids are a no-op.
    pub fn delete_shelf(&mut self, zone: &Zone, id: &str) -> ShelfSnapshot {
        let before = self.shelves.len();
        self.shelves.retain(|s| !(s.id == id && s.zone_id == zone.id));
        if self.shelves.len() < before {
            self.selection.on_deleted(id);
        }
        self.recompute(zone)
    }

    /// Removes every shelf of `zone`, returning the now-empty zone.
    pub fn delete_all_shelves_in_zone(&mut self, zone: &Zone) -> ShelfSnapshot {
        self.remove_zone_shelves(&zone.id);
        self.recompute(zone)
    }

    /// Removes the shelves left behind by a deleted zone.
    ///
    /// There are no zone bounds to measure against, so the snapshot carries
    /// an empty container and zeroed metrics.
    pub fn delete_orphaned_shelves(&mut self, zone_id: &str) -> ShelfSnapshot {
        self.remove_zone_shelves(zone_id);
        ShelfSnapshot {
            zone_id: zone_id.to_string(),
            container: Container::new(0.0, 0.0),
            shelves: Vec::new(),
            metrics: ShelfMetrics::default(),
            selected_shelf_id: None,
        }
    }

    /// Drops every shelf tagged with `zone_id`, returning how many went.
    pub(crate) fn remove_zone_shelves(&mut self, zone_id: &str) -> usize {
        let before = self.shelves.len();
        self.shelves.retain(|s| s.zone_id != zone_id);
        let removed = before - self.shelves.len();
        if removed > 0 {
            let shelves = &self.shelves;
            self.selection
                .retain(|id| shelves.iter().any(|s| s.id == id));
            self.detect_overlaps();
            debug!(zone = zone_id, removed, "cleared zone shelves");
        }
        removed
    }

    /// Replaces `zone`'s shelves wholesale, e.g. with a shelf suggestion.
    ///
    /// All drafts are validated before anything is removed.
    pub fn replace_zone_shelves(&mut self, zone: &Zone, drafts: Vec<ShelfDraft>) -> Result<ShelfSnapshot> {
        for draft in &drafts {
            validate_rect(&draft.name, &draft.rect())?;
        }
        self.remove_zone_shelves(&zone.id);
        for draft in drafts {
            let mut shelf = Shelf::from_draft(generate_id(), zone.id.clone(), draft);
            shelf.set_rect(self.clamp_rect(zone, shelf.rect()));
            self.shelves.push(shelf);
        }
        Ok(self.recompute(zone))
    }

    /// Selects a shelf by id, or clears the selection with `None`.
    pub fn select_shelf(&mut self, id: Option<&str>) -> bool {
        let exists = id.is_some_and(|id| self.shelf(id).is_some());
        self.selection.select(id, exists)
    }
}
