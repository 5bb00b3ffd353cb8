use storeplan_core::LayoutEvent;
use storeplan_layout::{
    shared_session, LayoutOptions, LayoutSession, ShelfDraft, ZoneDraft, ZonePatch,
};

#[test]
fn test_events_follow_each_mutation() {
    let mut session = LayoutSession::new("Events", 30.0, 20.0, LayoutOptions::default()).unwrap();
    let mut rx = session.subscribe();

    let id = session
        .add_zone(ZoneDraft::new("A", 0.0, 0.0, 10.0, 10.0))
        .unwrap()
        .zones[0]
        .id
        .clone();
    match rx.try_recv().unwrap() {
        LayoutEvent::ZonesChanged {
            zone_count,
            overlapping,
            utilization,
        } => {
            assert_eq!(zone_count, 1);
            assert_eq!(overlapping, 0);
            assert!((utilization - 100.0 / 6.0).abs() < 1e-9);
        }
        other => panic!("unexpected event {:?}", other),
    }

    session.add_zone(ZoneDraft::new("B", 5.0, 0.0, 10.0, 10.0)).unwrap();
    match rx.try_recv().unwrap() {
        LayoutEvent::ZonesChanged { overlapping, .. } => assert_eq!(overlapping, 2),
        other => panic!("unexpected event {:?}", other),
    }

    session
        .add_shelf(&id, ShelfDraft::new("S", 0.0, 0.0, 2.0, 1.0))
        .unwrap();
    assert_eq!(
        rx.try_recv().unwrap(),
        LayoutEvent::ShelvesChanged {
            zone_id: id.clone(),
            shelf_count: 1,
            overlapping: 0,
        }
    );
}

#[test]
fn test_rejected_mutation_publishes_nothing() {
    let mut session = LayoutSession::default();
    let mut rx = session.subscribe();

    assert!(session.set_dimensions(-1.0, 10.0).is_err());
    assert!(session
        .add_zone(ZoneDraft::new("Bad", 0.0, 0.0, 0.0, 5.0))
        .is_err());
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_set_dimensions_publishes_one_event() {
    let mut session = LayoutSession::default();
    let mut rx = session.subscribe();
    session.set_dimensions(40.0, 25.0).unwrap();
    assert_eq!(
        rx.try_recv().unwrap(),
        LayoutEvent::DimensionsChanged {
            width: 40.0,
            height: 25.0
        }
    );
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_optimize_publishes_report() {
    let mut session = LayoutSession::new("Opt", 10.0, 5.0, LayoutOptions::default()).unwrap();
    session.add_zone(ZoneDraft::new("Tall", 3.0, 3.0, 4.0, 8.0)).unwrap();
    let mut rx = session.subscribe();

    let optimized = session.optimize_layout();
    assert_eq!(optimized.report.scaled.len(), 1);
    assert_eq!(
        rx.try_recv().unwrap(),
        LayoutEvent::LayoutOptimized {
            zone_id: None,
            scaled: 1
        }
    );
}

#[test]
fn test_shared_session_across_threads() {
    let session = shared_session(LayoutSession::default());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let session = session.clone();
            std::thread::spawn(move || {
                let x = f64::from(i) * 5.0;
                session
                    .lock()
                    .add_zone(ZoneDraft::new(format!("Z{}", i), x, 0.0, 5.0, 5.0))
                    .unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let guard = session.lock();
    assert_eq!(guard.store().zone_count(), 4);
    assert!(!guard.store().metrics().overlapping_zones);
    let id = guard.store().zones()[0].id.clone();
    drop(guard);

    let snap = session
        .lock()
        .update_zone(&id, &ZonePatch::position(25.0, 15.0))
        .unwrap();
    assert_eq!(snap.zone(&id).unwrap().x, 25.0);
}
