mod common;

use assetdesk_core::assets::{
    AssetError, AssetKind, AssetQuery, AssetRef, AssetResolver, AvailabilityState,
};
use assetdesk_core::assignments::{AssignmentService, TargetKind, TargetRef};

use common::{seed_computer, seed_device, seed_org_and_catalog, seed_phone_line, setup_db};

#[test]
fn test_search_requires_a_recognized_dimension() {
    let db = setup_db();
    seed_org_and_catalog(&db.pool);

    let resolver = AssetResolver::new(db.pool.clone());
    let err = resolver
        .search(AssetQuery::default())
        .expect_err("Empty query should be rejected");
    assert!(matches!(err, AssetError::InvalidFilter(_)));

    // Kind alone narrows nothing; it only scopes the other dimensions.
    let err = resolver
        .search(AssetQuery {
            kind: Some(AssetKind::Computer),
            ..Default::default()
        })
        .expect_err("Kind-only query should be rejected");
    assert!(matches!(err, AssetError::InvalidFilter(_)));
}

#[test]
fn test_available_and_assigned_partition_the_inventory() {
    let db = setup_db();
    let seed = seed_org_and_catalog(&db.pool);
    let kept = seed_computer(&db.pool, &seed, "SN-3001");
    let handed_out = seed_computer(&db.pool, &seed, "SN-3002");
    seed_device(&db.pool, &seed, "SN-4001");

    AssignmentService::new(db.pool.clone())
        .assign(
            AssetRef::Computer(handed_out.id.clone()),
            TargetRef::User(seed.user_id.clone()),
            None,
            None,
        )
        .expect("Assign should succeed");

    let resolver = AssetResolver::new(db.pool.clone());

    let available = resolver
        .search(AssetQuery {
            state: Some(AvailabilityState::Available),
            kind: Some(AssetKind::Computer),
            ..Default::default()
        })
        .expect("Available query should succeed");
    assert_eq!(available.len(), 1);
    assert_eq!(available[0].id, kept.id);
    assert_eq!(available[0].label, "SN-3001");
    assert!(available[0].holder.is_none());

    let assigned = resolver
        .search(AssetQuery {
            state: Some(AvailabilityState::Assigned),
            kind: Some(AssetKind::Computer),
            ..Default::default()
        })
        .expect("Assigned query should succeed");
    assert_eq!(assigned.len(), 1);
    assert_eq!(assigned[0].id, handed_out.id);
    let holder = assigned[0].holder.as_ref().expect("Holder should be resolved");
    assert_eq!(holder.target_type, TargetKind::User);
    assert_eq!(holder.name, "Ada Lovelace");
}

#[test]
fn test_model_filter_scopes_computers_and_devices() {
    let db = setup_db();
    let seed = seed_org_and_catalog(&db.pool);
    seed_computer(&db.pool, &seed, "SN-3003");
    seed_device(&db.pool, &seed, "SN-4002");
    seed_phone_line(&db.pool, "+34-600-100-001");

    let resolver = AssetResolver::new(db.pool.clone());
    let summaries = resolver
        .search(AssetQuery {
            model_id: Some(seed.model_id.clone()),
            ..Default::default()
        })
        .expect("Model query should succeed");

    // Phone lines carry no model and must not appear.
    assert_eq!(summaries.len(), 2);
    assert!(summaries.iter().all(|s| s.kind != AssetKind::PhoneLine));
    assert!(summaries
        .iter()
        .all(|s| s.model_id.as_deref() == Some(seed.model_id.as_str())));
}

#[test]
fn test_provider_filter_reaches_phone_lines_via_ledger() {
    let db = setup_db();
    let seed = seed_org_and_catalog(&db.pool);
    let free_line = seed_phone_line(&db.pool, "+34-600-100-002");
    let held_line = seed_phone_line(&db.pool, "+34-600-100-003");

    AssignmentService::new(db.pool.clone())
        .assign(
            AssetRef::PhoneLine(held_line.id.clone()),
            TargetRef::Department(seed.department_id.clone()),
            None,
            None,
        )
        .expect("Assign should succeed");

    let resolver = AssetResolver::new(db.pool.clone());

    let available = resolver
        .search(AssetQuery {
            state: Some(AvailabilityState::Available),
            provider: Some("Movistar".to_string()),
            ..Default::default()
        })
        .expect("Available query should succeed");
    assert_eq!(available.len(), 1);
    assert_eq!(available[0].id, free_line.id);
    assert_eq!(available[0].provider.as_deref(), Some("Movistar"));

    let assigned = resolver
        .search(AssetQuery {
            state: Some(AvailabilityState::Assigned),
            provider: Some("Movistar".to_string()),
            ..Default::default()
        })
        .expect("Assigned query should succeed");
    assert_eq!(assigned.len(), 1);
    assert_eq!(assigned[0].id, held_line.id);
    let holder = assigned[0].holder.as_ref().expect("Holder should be resolved");
    assert_eq!(holder.target_type, TargetKind::Department);
    assert_eq!(holder.name, "Service Desk");
}

#[test]
fn test_released_phone_line_counts_as_available_again() {
    let db = setup_db();
    let seed = seed_org_and_catalog(&db.pool);
    let line = seed_phone_line(&db.pool, "+34-600-100-004");

    let service = AssignmentService::new(db.pool.clone());
    service
        .assign(
            AssetRef::PhoneLine(line.id.clone()),
            TargetRef::User(seed.user_id.clone()),
            None,
            None,
        )
        .expect("Assign should succeed");
    service
        .unassign(AssetRef::PhoneLine(line.id.clone()), None)
        .expect("Unassign should succeed");

    let resolver = AssetResolver::new(db.pool.clone());
    let available = resolver
        .search(AssetQuery {
            state: Some(AvailabilityState::Available),
            provider: Some("Movistar".to_string()),
            ..Default::default()
        })
        .expect("Available query should succeed");
    assert_eq!(available.len(), 1);
    assert_eq!(available[0].id, line.id);
}
