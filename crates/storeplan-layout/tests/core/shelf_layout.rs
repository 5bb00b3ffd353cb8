use storeplan_layout::{LayoutOptions, ShelfDraft, ShelfLayout, ShelfPatch, Zone, ZoneDraft};

fn zone(id: &str, width: f64, height: f64) -> Zone {
    Zone::from_draft(id, ZoneDraft::new(id, 0.0, 0.0, width, height))
}

#[test]
fn test_accessibility_from_walkway_ratio() {
    let z = zone("z1", 10.0, 10.0);
    let mut layout = ShelfLayout::new(LayoutOptions::default());
    // 25 of 100 covered: walkway 75% -> 150, capped at 100
    let snap = layout
        .add_shelf(&z, ShelfDraft::new("A", 0.0, 0.0, 5.0, 5.0))
        .unwrap();
    assert_eq!(snap.metrics.accessibility, 100.0);
    assert_eq!(snap.metrics.utilization, 25.0);

    // 70 of 100 covered: walkway 30% -> 60
    let id = snap.shelves[0].id.clone();
    let patch = ShelfPatch {
        width: Some(10.0),
        height: Some(7.0),
        ..ShelfPatch::default()
    };
    let snap = layout.update_shelf(&z, &id, &patch).unwrap();
    assert!((snap.metrics.accessibility - 60.0).abs() < 1e-9);
    assert!((snap.metrics.unused_space - 30.0).abs() < 1e-9);
}

#[test]
fn test_full_zone_has_zero_accessibility() {
    let z = zone("z1", 4.0, 4.0);
    let mut layout = ShelfLayout::new(LayoutOptions::default());
    let snap = layout
        .add_shelf(&z, ShelfDraft::new("A", 0.0, 0.0, 4.0, 4.0))
        .unwrap();
    assert_eq!(snap.metrics.accessibility, 0.0);
    assert_eq!(snap.metrics.utilization, 100.0);
}

#[test]
fn test_shelves_within_gap_overlap() {
    let z = zone("z1", 10.0, 10.0);
    let mut layout = ShelfLayout::new(LayoutOptions::default());
    layout.add_shelf(&z, ShelfDraft::new("A", 0.0, 0.0, 2.0, 1.0)).unwrap();
    let near = layout
        .add_shelf(&z, ShelfDraft::new("B", 2.05, 0.0, 2.0, 1.0))
        .unwrap();
    assert_eq!(near.overlapping_ids().len(), 2);

    let id = near.shelves[1].id.clone();
    let apart = layout
        .update_shelf(&z, &id, &ShelfPatch::position(2.5, 0.0))
        .unwrap();
    assert!(apart.overlapping_ids().is_empty());
}

#[test]
fn test_shelves_in_different_zones_never_overlap() {
    let (z1, z2) = (zone("z1", 10.0, 10.0), zone("z2", 10.0, 10.0));
    let mut layout = ShelfLayout::new(LayoutOptions::default());
    layout.add_shelf(&z1, ShelfDraft::new("A", 0.0, 0.0, 3.0, 3.0)).unwrap();
    let snap = layout
        .add_shelf(&z2, ShelfDraft::new("B", 0.0, 0.0, 3.0, 3.0))
        .unwrap();
    assert!(snap.overlapping_ids().is_empty());
    assert!(layout.shelves().iter().all(|s| !s.is_overlapping));
}

#[test]
fn test_lookups_by_id_and_zone() {
    let (z1, z2) = (zone("z1", 10.0, 10.0), zone("z2", 10.0, 10.0));
    let mut layout = ShelfLayout::new(LayoutOptions::default());
    let snap = layout
        .add_shelf(&z1, ShelfDraft::new("A", 0.0, 0.0, 3.0, 3.0).with_category("Bakery"))
        .unwrap();
    layout.add_shelf(&z1, ShelfDraft::new("B", 5.0, 0.0, 3.0, 3.0)).unwrap();
    layout.add_shelf(&z2, ShelfDraft::new("C", 0.0, 0.0, 3.0, 3.0)).unwrap();

    let shelf = layout.shelf(&snap.shelves[0].id).unwrap();
    assert_eq!(shelf.category, "Bakery");
    assert_eq!(shelf.zone_id, "z1");
    assert_eq!(layout.shelves_in_zone("z1").len(), 2);
    assert_eq!(layout.shelves_in_zone("z2").len(), 1);
    assert!(layout.shelves_in_zone("z3").is_empty());
}

#[test]
fn test_optimize_zone_leaves_other_zones_alone() {
    let (z1, z2) = (zone("z1", 6.0, 6.0), zone("z2", 10.0, 10.0));
    let mut layout = ShelfLayout::new(LayoutOptions::default());
    layout.add_shelf(&z1, ShelfDraft::new("A", 3.0, 3.0, 2.0, 1.0)).unwrap();
    layout.add_shelf(&z2, ShelfDraft::new("X", 7.0, 7.0, 2.0, 2.0)).unwrap();
    layout.add_shelf(&z1, ShelfDraft::new("B", 3.0, 3.0, 2.0, 1.0)).unwrap();

    let optimized = layout.optimize_zone(&z1);
    let names: Vec<(&str, f64, f64)> = optimized
        .snapshot
        .shelves
        .iter()
        .map(|s| (s.name.as_str(), s.x, s.y))
        .collect();
    assert_eq!(names, vec![("A", 0.0, 0.0), ("B", 2.0, 0.0)]);

    let x = layout.shelves_in_zone("z2")[0];
    assert_eq!((x.x, x.y), (7.0, 7.0));
    // packed shelves touch, which the 0.1 shelf gap still flags
    assert_eq!(optimized.snapshot.overlapping_ids().len(), 2);
}
