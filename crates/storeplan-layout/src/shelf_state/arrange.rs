//! Auto-arrangement of one zone's shelves.

use tracing::info;

use super::ShelfLayout;
use crate::model::{Shelf, Zone};
use crate::packing::pack_rows;
use crate::snapshot::{Optimized, ShelfSnapshot};

impl ShelfLayout {
    /// Row-packs `zone`'s shelves, in insertion order, inside the zone.
    ///
    /// Shelves of other zones keep their positions and their place in the list.
    pub fn optimize_zone(&mut self, zone: &Zone) -> Optimized<ShelfSnapshot> {
        let mut scoped: Vec<Shelf> = self
            .shelves
            .iter()
            .filter(|s| s.zone_id == zone.id)
            .cloned()
            .collect();
        let report = pack_rows(&mut scoped, zone.width, zone.height);

        let mut packed = scoped.into_iter();
        for slot in self.shelves.iter_mut().filter(|s| s.zone_id == zone.id) {
            if let Some(shelf) = packed.next() {
                *slot = shelf;
            }
        }

        let snapshot = self.recompute(zone);
        info!(
            zone = %zone.id,
            shelves = report.placed,
            scaled = report.scaled.len(),
            accessibility = snapshot.metrics.accessibility,
            "optimized shelf layout"
        );
        Optimized { snapshot, report }
    }
}
