//! Layout session: one store, its zones, their shelves and products.
//!
//! The session is the unit a host (UI, REST handler, CLI) owns. It keeps the
//! zone model and the shelf model side by side, resolves the parent zone for
//! every shelf operation, and publishes a [`LayoutEvent`] once each mutation
//! has fully recomputed.

use chrono::Utc;
use storeplan_core::{
    thread_safe, EventDispatcher, LayoutError, LayoutEvent, LayoutEventReceiver, Result,
    ThreadSafe,
};
use tracing::debug;

use crate::model::{Product, Shelf, ShelfDraft, ShelfPatch, Zone, ZoneDraft, ZonePatch};
use crate::options::LayoutOptions;
use crate::packing::PackingReport;
use crate::serialization::{LayoutFile, LayoutMetadata, StoreData, FILE_FORMAT_VERSION};
use crate::shelf_state::ShelfLayout;
use crate::snapshot::{Optimized, ShelfSnapshot, StoreSnapshot};
use crate::store_state::StoreLayout;

/// Default store width for new sessions, in meters.
pub const DEFAULT_STORE_WIDTH: f64 = 30.0;
/// Default store height for new sessions, in meters.
pub const DEFAULT_STORE_HEIGHT: f64 = 20.0;

/// A session guarded for use from several threads.
pub type SharedSession = ThreadSafe<LayoutSession>;

/// Wraps a session in a [`SharedSession`].
pub fn shared_session(session: LayoutSession) -> SharedSession {
    thread_safe(session)
}

#[derive(Debug)]
pub struct LayoutSession {
    metadata: LayoutMetadata,
    store: StoreLayout,
    shelves: ShelfLayout,
    products: Vec<Product>,
    events: EventDispatcher,
}

impl Default for LayoutSession {
    fn default() -> Self {
        let now = Utc::now();
        let options = LayoutOptions::default();
        Self {
            metadata: LayoutMetadata {
                name: "Untitled".to_string(),
                created: now,
                modified: now,
                description: String::new(),
            },
            store: StoreLayout::empty(DEFAULT_STORE_WIDTH, DEFAULT_STORE_HEIGHT, options),
            shelves: ShelfLayout::new(options),
            products: Vec::new(),
            events: EventDispatcher::default(),
        }
    }
}

impl LayoutSession {
    /// Starts an empty store.
    pub fn new(name: impl Into<String>, width: f64, height: f64, options: LayoutOptions) -> Result<Self> {
        let file = LayoutFile::new(name, width, height);
        Self::from_file(file, options)
    }

    /// Builds a session from a loaded file, recomputing every derived field.
    pub fn from_file(file: LayoutFile, options: LayoutOptions) -> Result<Self> {
        let LayoutFile {
            metadata,
            store,
            shelves,
            products,
            ..
        } = file;
        let store = StoreLayout::from_zones(store.width, store.height, store.zones, options)?;
        let shelves = ShelfLayout::from_shelves(shelves, options)?;
        let orphans = shelves.orphaned_shelves(|id| store.zone(id).is_some()).len();
        debug!(
            zones = store.zone_count(),
            shelves = shelves.shelf_count(),
            orphans,
            products = products.len(),
            "opened layout session"
        );
        Ok(Self {
            metadata,
            store,
            shelves,
            products,
            events: EventDispatcher::default(),
        })
    }

    /// Writes the session back out as a layout file.
    pub fn to_file(&self) -> LayoutFile {
        let mut metadata = self.metadata.clone();
        metadata.modified = Utc::now();
        LayoutFile {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata,
            store: StoreData {
                width: self.store.width(),
                height: self.store.height(),
                zones: self.store.zones().to_vec(),
            },
            shelves: self.shelves.shelves().to_vec(),
            products: self.products.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.metadata.name = name.into();
    }

    pub fn options(&self) -> &LayoutOptions {
        self.store.options()
    }

    pub fn store(&self) -> &StoreLayout {
        &self.store
    }

    pub fn shelves(&self) -> &ShelfLayout {
        &self.shelves
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Subscribes to change events.
    pub fn subscribe(&self) -> LayoutEventReceiver {
        self.events.subscribe()
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        self.store.snapshot()
    }

    pub fn set_dimensions(&mut self, width: f64, height: f64) -> Result<StoreSnapshot> {
        let snap = self.store.set_dimensions(width, height)?;
        self.events
            .publish(LayoutEvent::DimensionsChanged { width, height });
        Ok(snap)
    }

    pub fn add_zone(&mut self, draft: ZoneDraft) -> Result<StoreSnapshot> {
        let snap = self.store.add_zone(draft)?;
        self.publish_zones(&snap);
        Ok(snap)
    }

    pub fn update_zone(&mut self, id: &str, patch: &ZonePatch) -> Result<StoreSnapshot> {
        let snap = self.store.update_zone(id, patch)?;
        self.publish_zones(&snap);
        Ok(snap)
    }

    /// Deletes a zone. Its shelves are removed too when
    /// `cascade_zone_delete` is set, otherwise they become orphans.
    pub fn delete_zone(&mut self, id: &str) -> StoreSnapshot {
        let snap = self.store.delete_zone(id);
        self.publish_zones(&snap);
        if self.options().cascade_zone_delete {
            let removed = self.shelves.remove_zone_shelves(id);
            if removed > 0 {
                self.events.publish(LayoutEvent::ShelvesChanged {
                    zone_id: id.to_string(),
                    shelf_count: 0,
                    overlapping: 0,
                });
            }
        }
        snap
    }

    /// Applies a zone suggestion, replacing every zone.
    pub fn replace_zones(&mut self, drafts: Vec<ZoneDraft>) -> Result<StoreSnapshot> {
        let snap = self.store.replace_zones(drafts)?;
        self.publish_zones(&snap);
        Ok(snap)
    }

    pub fn optimize_layout(&mut self) -> Optimized<StoreSnapshot> {
        let optimized = self.store.optimize_layout();
        self.publish_optimized(None, &optimized.report);
        optimized
    }

    pub fn select_zone(&mut self, id: Option<&str>) -> bool {
        self.store.select_zone(id)
    }

    /// The shelves of `zone_id`, with metrics against that zone.
    pub fn shelf_snapshot(&self, zone_id: &str) -> Result<ShelfSnapshot> {
        let zone = find_zone(&self.store, zone_id)?;
        Ok(self.shelves.snapshot(zone))
    }

    pub fn add_shelf(&mut self, zone_id: &str, draft: ShelfDraft) -> Result<ShelfSnapshot> {
        let zone = find_zone(&self.store, zone_id)?;
        let snap = self.shelves.add_shelf(zone, draft)?;
        self.publish_shelves(&snap);
        Ok(snap)
    }

    pub fn update_shelf(&mut self, zone_id: &str, id: &str, patch: &ShelfPatch) -> Result<ShelfSnapshot> {
        let zone = find_zone(&self.store, zone_id)?;
        let snap = self.shelves.update_shelf(zone, id, patch)?;
        self.publish_shelves(&snap);
        Ok(snap)
    }

    pub fn delete_shelf(&mut self, zone_id: &str, id: &str) -> Result<ShelfSnapshot> {
        let zone = find_zone(&self.store, zone_id)?;
        let snap = self.shelves.delete_shelf(zone, id);
        self.publish_shelves(&snap);
        Ok(snap)
    }

    /// Removes every shelf of `zone_id`, including orphans of a deleted zone.
    ///
    /// For a live zone the snapshot measures the now-empty zone; for a
    /// deleted one it carries an empty container.
    pub fn delete_all_shelves_in_zone(&mut self, zone_id: &str) -> ShelfSnapshot {
        let snap = match self.store.zone(zone_id) {
            Some(zone) => self.shelves.delete_all_shelves_in_zone(zone),
            None => self.shelves.delete_orphaned_shelves(zone_id),
        };
        self.publish_shelves(&snap);
        snap
    }

    /// Applies a shelf suggestion, replacing the shelves of one zone.
    pub fn replace_zone_shelves(&mut self, zone_id: &str, drafts: Vec<ShelfDraft>) -> Result<ShelfSnapshot> {
        let zone = find_zone(&self.store, zone_id)?;
        let snap = self.shelves.replace_zone_shelves(zone, drafts)?;
        self.publish_shelves(&snap);
        Ok(snap)
    }

    pub fn optimize_zone(&mut self, zone_id: &str) -> Result<Optimized<ShelfSnapshot>> {
        let zone = find_zone(&self.store, zone_id)?;
        let optimized = self.shelves.optimize_zone(zone);
        self.publish_optimized(Some(zone_id), &optimized.report);
        Ok(optimized)
    }

    pub fn select_shelf(&mut self, id: Option<&str>) -> bool {
        self.shelves.select_shelf(id)
    }

    /// Shelves whose zone no longer exists.
    pub fn orphaned_shelves(&self) -> Vec<&Shelf> {
        let store = &self.store;
        self.shelves
            .orphaned_shelves(|id| store.zone(id).is_some())
    }

    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    pub fn products_for_shelf(&self, shelf_id: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.shelf_id == shelf_id)
            .collect()
    }

    pub fn products_in_zone(&self, zone_id: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.zone_id == zone_id)
            .collect()
    }

    fn publish_zones(&self, snap: &StoreSnapshot) {
        self.events.publish(LayoutEvent::ZonesChanged {
            zone_count: snap.zones.len(),
            overlapping: snap.overlapping_ids().len(),
            utilization: snap.metrics.utilization,
        });
    }

    fn publish_shelves(&self, snap: &ShelfSnapshot) {
        self.events.publish(LayoutEvent::ShelvesChanged {
            zone_id: snap.zone_id.clone(),
            shelf_count: snap.shelves.len(),
            overlapping: snap.overlapping_ids().len(),
        });
    }

    fn publish_optimized(&self, zone_id: Option<&str>, report: &PackingReport) {
        debug!(
            zone = zone_id.unwrap_or("<store>"),
            placed = report.placed,
            rows = report.rows_wrapped,
            "auto-arranged layout"
        );
        self.events.publish(LayoutEvent::LayoutOptimized {
            zone_id: zone_id.map(str::to_string),
            scaled: report.scaled.len(),
        });
    }
}

fn find_zone<'a>(store: &'a StoreLayout, zone_id: &str) -> Result<&'a Zone> {
    store.zone(zone_id).ok_or_else(|| {
        LayoutError::ZoneNotFound {
            id: zone_id.to_string(),
        }
        .into()
    })
}
