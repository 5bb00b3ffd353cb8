//! Zone operations (add, update, delete, replace, select) for the store.

use storeplan_core::Result;
use tracing::debug;

use super::StoreLayout;
use crate::model::{
    generate_id, validate_patched_rect, validate_rect, LayoutShape, Zone, ZoneDraft, ZonePatch,
};
use crate::snapshot::StoreSnapshot;

impl StoreLayout {
    /// Appends a new zone with a fresh id.
    ///
    /// The zone is not checked against the container bounds unless
    /// `clamp_to_container` is enabled.
    pub fn add_zone(&mut self, draft: ZoneDraft) -> Result<StoreSnapshot> {
        validate_rect(&draft.name, &draft.rect())?;
        let mut zone = Zone::from_draft(generate_id(), draft);
        zone.set_rect(self.clamp_rect(zone.rect()));
        debug!(id = %zone.id, name = %zone.name, "adding zone");
        self.zones.push(zone);
        self.recompute();
        Ok(self.snapshot())
    }

    /// Merges `patch` into the zone with `id`.
    ///
    /// An unknown id is a no-op; the store is still recomputed. A patch that
    /// sets a non-positive size or a non-finite coordinate is rejected and
    /// nothing changes. Sides the patch leaves alone are kept as they are,
    /// including a zero height left by the packer.
    pub fn update_zone(&mut self, id: &str, patch: &ZonePatch) -> Result<StoreSnapshot> {
        if let Some(index) = self.zones.iter().position(|z| z.id == id) {
            let mut merged = patch.merged(&self.zones[index]);
            validate_patched_rect(
                id,
                &merged.rect(),
                patch.width.is_some(),
                patch.height.is_some(),
            )?;
            merged.set_rect(self.clamp_rect(merged.rect()));
            self.zones[index] = merged;
        } else {
            debug!(id, "update for unknown zone ignored");
        }
        self.recompute();
        Ok(self.snapshot())
    }

    /// Removes the zone with `id`, clearing the selection if it was selected.
    ///
    /// Shelves are not touched here; see `LayoutSession::delete_zone`.
    pub fn delete_zone(&mut self, id: &str) -> StoreSnapshot {
        let before = self.zones.len();
        self.zones.retain(|z| z.id != id);
        if self.zones.len() < before {
            self.selection.on_deleted(id);
            debug!(id, "deleted zone");
        } else {
            debug!(id, "delete for unknown zone ignored");
        }
        self.recompute();
        self.snapshot()
    }

    /// Replaces every zone at once, e.g. with a layout suggestion.
    ///
    /// All drafts are validated before anything is replaced.
    pub fn replace_zones(&mut self, drafts: Vec<ZoneDraft>) -> Result<StoreSnapshot> {
        for draft in &drafts {
            validate_rect(&draft.name, &draft.rect())?;
        }
        self.zones = drafts
            .into_iter()
            .map(|draft| {
                let mut zone = Zone::from_draft(generate_id(), draft);
                zone.set_rect(self.clamp_rect(zone.rect()));
                zone
            })
            .collect();
        self.selection.clear();
        self.recompute();
        Ok(self.snapshot())
    }

    /// Selects a zone by id, or clears the selection with `None`.
    ///
    /// Unknown ids are ignored. Returns true if the selection changed.
    pub fn select_zone(&mut self, id: Option<&str>) -> bool {
        let exists = id.is_some_and(|id| self.zone(id).is_some());
        self.selection.select(id, exists)
    }
}
