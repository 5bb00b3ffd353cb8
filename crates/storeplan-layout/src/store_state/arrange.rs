//! Auto-arrangement of the store's zones.

use tracing::info;

use super::StoreLayout;
use crate::packing::pack_rows;
use crate::snapshot::{Optimized, StoreSnapshot};

impl StoreLayout {
    /// Row-packs the zones in list order inside the store, then recomputes.
    ///
    /// The overlap pass that follows is authoritative; the packer's own
    /// bookkeeping is not trusted to mean "no overlaps". With no zones this
    /// is a no-op reporting 0% utilization.
    pub fn optimize_layout(&mut self) -> Optimized<StoreSnapshot> {
        let report = pack_rows(&mut self.zones, self.width, self.height);
        self.recompute();
        info!(
            zones = report.placed,
            scaled = report.scaled.len(),
            overflowing = report.overflowing.len(),
            utilization = self.metrics.utilization,
            "optimized zone layout"
        );
        Optimized {
            snapshot: self.snapshot(),
            report,
        }
    }
}
