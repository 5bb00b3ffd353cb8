use storeplan_layout::{
    LayoutFile, LayoutOptions, LayoutSession, Product, ShelfDraft, ZoneDraft,
    FILE_FORMAT_VERSION,
};
use tempfile::TempDir;

fn sample_session() -> LayoutSession {
    let mut session = LayoutSession::new("Main St", 30.0, 20.0, LayoutOptions::default()).unwrap();
    let zone_id = session
        .add_zone(ZoneDraft::new("Produce", 2.0, 2.0, 12.0, 8.0).with_color("#4caf50"))
        .unwrap()
        .zones[0]
        .id
        .clone();
    session
        .add_zone(ZoneDraft::new("Dairy", 10.0, 2.0, 12.0, 8.0))
        .unwrap();
    let shelf_id = session
        .add_shelf(&zone_id, ShelfDraft::new("Apples", 0.5, 0.5, 4.0, 1.0).with_category("Fruit"))
        .unwrap()
        .shelves[0]
        .id
        .clone();
    session.add_product(Product {
        id: "p1".into(),
        name: "Gala".into(),
        category: "Fruit".into(),
        price: 1.2,
        width: 0.2,
        height: 0.2,
        zone_id,
        shelf_id,
    });
    session
}

#[test]
fn test_save_and_load_layout_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.storeplan.json");

    let session = sample_session();
    session.to_file().save_to_file(&path).unwrap();

    let loaded = LayoutFile::load_from_file(&path).unwrap();
    assert_eq!(loaded.version, FILE_FORMAT_VERSION);
    assert_eq!(loaded.metadata.name, "Main St");
    assert_eq!(loaded.store.zones.len(), 2);
    assert_eq!(loaded.store.zones[0].color, "#4caf50");
    assert_eq!(loaded.shelves.len(), 1);
    assert_eq!(loaded.products.len(), 1);

    let reopened = LayoutSession::from_file(loaded, LayoutOptions::default()).unwrap();
    assert_eq!(reopened.snapshot().zones, session.snapshot().zones);
    assert_eq!(reopened.store().metrics(), session.store().metrics());
}

#[test]
fn test_json_uses_camel_case_fields() {
    let json = sample_session().to_file().to_json().unwrap();
    assert!(json.contains("\"isOverlapping\""));
    assert!(json.contains("\"zoneId\""));
    assert!(json.contains("\"shelfId\""));
}

#[test]
fn test_stale_flags_in_file_are_recomputed() {
    let mut file = sample_session().to_file();
    for zone in file.store.zones.iter_mut() {
        zone.is_overlapping = false;
    }
    let session = LayoutSession::from_file(file, LayoutOptions::default()).unwrap();
    // Produce (2..14) and Dairy (10..22) intersect
    assert_eq!(session.snapshot().overlapping_ids().len(), 2);
}

#[test]
fn test_invalid_dimensions_in_file_rejected() {
    let mut file = sample_session().to_file();
    file.store.width = 0.0;
    let err = LayoutSession::from_file(file, LayoutOptions::default()).unwrap_err();
    assert!(err.is_layout_error());
}

#[test]
fn test_load_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let err = LayoutFile::load_from_file(dir.path().join("missing.json")).unwrap_err();
    assert!(err.is_snapshot_error());
}

#[test]
fn test_packed_layout_reloads_after_scale_down() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("packed.storeplan.json");

    let mut session = LayoutSession::new("Tight", 10.0, 5.0, LayoutOptions::default()).unwrap();
    session.add_zone(ZoneDraft::new("Full", 0.0, 0.0, 10.0, 5.0)).unwrap();
    let zone_id = session
        .add_zone(ZoneDraft::new("Squeezed", 3.0, 0.0, 4.0, 5.0))
        .unwrap()
        .zones[1]
        .id
        .clone();
    let optimized = session.optimize_layout();
    assert_eq!(optimized.snapshot.zone(&zone_id).unwrap().height, 0.0);

    session.to_file().save_to_file(&path).unwrap();
    let loaded = LayoutFile::load_from_file(&path).unwrap();
    let mut reopened = LayoutSession::from_file(loaded, LayoutOptions::default()).unwrap();
    assert_eq!(reopened.snapshot().zones, optimized.snapshot.zones);

    let patch = storeplan_layout::ZonePatch {
        name: Some("Overflow".into()),
        ..Default::default()
    };
    let snap = reopened.update_zone(&zone_id, &patch).unwrap();
    assert_eq!(snap.zone(&zone_id).unwrap().name, "Overflow");
}

#[test]
fn test_packed_shelves_reload_after_scale_down() {
    let mut session = LayoutSession::new("Shelves", 30.0, 20.0, LayoutOptions::default()).unwrap();
    let zone_id = session
        .add_zone(ZoneDraft::new("Aisle", 0.0, 0.0, 4.0, 2.0))
        .unwrap()
        .zones[0]
        .id
        .clone();
    session
        .add_shelf(&zone_id, ShelfDraft::new("Long", 0.0, 0.0, 4.0, 2.0))
        .unwrap();
    session
        .add_shelf(&zone_id, ShelfDraft::new("Extra", 0.0, 0.0, 2.0, 1.0))
        .unwrap();
    let optimized = session.optimize_zone(&zone_id).unwrap();
    assert_eq!(optimized.report.scaled.len(), 1);

    let json = session.to_file().to_json().unwrap();
    let file = LayoutFile::from_json(&json).unwrap();
    let reopened = LayoutSession::from_file(file, LayoutOptions::default()).unwrap();
    assert_eq!(reopened.shelves().shelf_count(), 2);
}
