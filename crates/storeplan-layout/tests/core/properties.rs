use proptest::prelude::*;
use storeplan_layout::{pack_rows, Rect, StoreLayout, Zone, ZoneDraft};

fn arb_rect() -> impl Strategy<Value = Rect> {
    (0.0f64..40.0, 0.0f64..40.0, 0.5f64..15.0, 0.5f64..15.0)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn arb_drafts() -> impl Strategy<Value = Vec<ZoneDraft>> {
    prop::collection::vec(arb_rect(), 0..12).prop_map(|rects| {
        rects
            .into_iter()
            .enumerate()
            .map(|(i, r)| ZoneDraft::new(format!("Zone {}", i), r.x, r.y, r.width, r.height))
            .collect()
    })
}

fn as_zones(drafts: &[ZoneDraft]) -> Vec<Zone> {
    drafts
        .iter()
        .enumerate()
        .map(|(i, d)| Zone::from_draft(format!("z{}", i), d.clone()))
        .collect()
}

proptest! {
    /// Overlap is symmetric for any gap.
    #[test]
    fn overlap_symmetric(a in arb_rect(), b in arb_rect(), gap in 0.0f64..1.0) {
        prop_assert_eq!(a.overlaps(&b, gap), b.overlaps(&a, gap));
    }

    /// A larger gap never removes an overlap.
    #[test]
    fn gap_is_monotonic(a in arb_rect(), b in arb_rect()) {
        if a.overlaps(&b, 0.0) {
            prop_assert!(a.overlaps(&b, 0.1));
        }
    }

    /// Utilization stays within [0, 100] whatever the zones.
    #[test]
    fn utilization_bounded(drafts in arb_drafts()) {
        let mut store = StoreLayout::new(30.0, 20.0).unwrap();
        let snap = store.replace_zones(drafts).unwrap();
        prop_assert!(snap.metrics.utilization >= 0.0);
        prop_assert!(snap.metrics.utilization <= 100.0);
        prop_assert!(snap.metrics.unused_space >= 0.0);
    }

    /// The aggregate flag agrees with the per-zone flags.
    #[test]
    fn aggregate_flag_matches_zone_flags(drafts in arb_drafts()) {
        let mut store = StoreLayout::new(30.0, 20.0).unwrap();
        let snap = store.replace_zones(drafts).unwrap();
        let any_flagged = snap.zones.iter().any(|z| z.is_overlapping);
        prop_assert_eq!(snap.metrics.overlapping_zones, any_flagged);
    }

    /// Running detection twice without a mutation changes nothing.
    #[test]
    fn detect_is_idempotent(drafts in arb_drafts()) {
        let mut store = StoreLayout::new(30.0, 20.0).unwrap();
        store.replace_zones(drafts).unwrap();
        let first = store.snapshot();
        store.detect_overlaps();
        store.detect_overlaps();
        prop_assert_eq!(first.zones, store.snapshot().zones);
    }

    /// Same input order and container, same output.
    #[test]
    fn packing_is_deterministic(drafts in arb_drafts(), w in 5.0f64..40.0, h in 5.0f64..40.0) {
        let mut a = as_zones(&drafts);
        let mut b = as_zones(&drafts);
        let ra = pack_rows(&mut a, w, h);
        let rb = pack_rows(&mut b, w, h);
        prop_assert_eq!(a, b);
        prop_assert_eq!(ra, rb);
    }

    /// Scaled rectangles never get narrower than one unit.
    #[test]
    fn scaled_width_floor(drafts in arb_drafts(), w in 5.0f64..40.0, h in 5.0f64..40.0) {
        let mut zones = as_zones(&drafts);
        let report = pack_rows(&mut zones, w, h);
        for id in &report.scaled {
            let zone = zones.iter().find(|z| &z.id == id).unwrap();
            prop_assert!(zone.width >= 1.0);
        }
    }
}
