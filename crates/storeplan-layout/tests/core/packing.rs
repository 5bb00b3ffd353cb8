use storeplan_layout::{pack_rows, LayoutShape, Zone, ZoneDraft};

fn zones(sizes: &[(f64, f64)]) -> Vec<Zone> {
    sizes
        .iter()
        .enumerate()
        .map(|(i, &(w, h))| {
            let id = format!("z{}", i);
            Zone::from_draft(id.clone(), ZoneDraft::new(id, 50.0, 50.0, w, h))
        })
        .collect()
}

#[test]
fn test_third_rectangle_wraps_to_next_row() {
    let mut items = zones(&[(4.0, 3.0), (4.0, 3.0), (4.0, 3.0)]);
    let report = pack_rows(&mut items, 10.0, 10.0);

    assert_eq!((items[0].x, items[0].y), (0.0, 0.0));
    assert_eq!((items[1].x, items[1].y), (4.0, 0.0));
    assert_eq!((items[2].x, items[2].y), (0.0, 3.0));
    assert_eq!(report.rows_wrapped, 1);
    assert_eq!(report.placed, 3);
}

#[test]
fn test_tall_rectangle_scaled_to_remaining_height() {
    let mut items = zones(&[(4.0, 8.0)]);
    let report = pack_rows(&mut items, 10.0, 5.0);

    assert_eq!(items[0].height, 5.0);
    assert_eq!(items[0].width, 2.5);
    assert_eq!(report.scaled, vec!["z0".to_string()]);
    assert!(!report.is_lossless());
}

#[test]
fn test_row_height_is_tallest_in_row() {
    let mut items = zones(&[(4.0, 2.0), (4.0, 5.0), (4.0, 1.0)]);
    pack_rows(&mut items, 10.0, 20.0);
    assert_eq!((items[2].x, items[2].y), (0.0, 5.0));
}

#[test]
fn test_input_order_is_kept() {
    let mut items = zones(&[(2.0, 2.0), (8.0, 8.0), (1.0, 1.0)]);
    pack_rows(&mut items, 20.0, 20.0);
    let ids: Vec<&str> = items.iter().map(|z| z.id()).collect();
    assert_eq!(ids, vec!["z0", "z1", "z2"]);
    assert!(items[0].x < items[1].x && items[1].x < items[2].x);
}

#[test]
fn test_wide_rectangle_overflows_its_row() {
    let mut items = zones(&[(3.0, 2.0), (15.0, 2.0), (3.0, 2.0)]);
    let report = pack_rows(&mut items, 10.0, 10.0);

    assert_eq!((items[1].x, items[1].y), (0.0, 2.0));
    assert_eq!(items[1].width, 15.0);
    assert_eq!((items[2].x, items[2].y), (0.0, 4.0));
    assert_eq!(report.overflowing, vec!["z1".to_string()]);
}

#[test]
fn test_packing_clears_stale_flags() {
    let mut items = zones(&[(4.0, 3.0), (4.0, 3.0)]);
    for item in items.iter_mut() {
        item.set_overlapping(true);
    }
    pack_rows(&mut items, 10.0, 10.0);
    assert!(items.iter().all(|z| !z.is_overlapping));
}
