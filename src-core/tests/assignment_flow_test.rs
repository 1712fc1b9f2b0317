mod common;

use assetdesk_core::assets::{AssetKind, AssetRef, AssetService, AssetState};
use assetdesk_core::assignments::{
    AssignmentAction, AssignmentError, AssignmentRequest, AssignmentService, DeliveryMetadata,
    RequestedAction, TargetKind, TargetRef,
};

use common::{seed_computer, seed_device, seed_org_and_catalog, seed_phone_line, setup_db};

#[test]
fn test_assign_computer_to_user_sets_pointers_and_appends_ledger() {
    let db = setup_db();
    let seed = seed_org_and_catalog(&db.pool);
    let computer = seed_computer(&db.pool, &seed, "SN-1001");

    let service = AssignmentService::new(db.pool.clone());
    let entry = service
        .assign(
            AssetRef::Computer(computer.id.clone()),
            TargetRef::User(seed.user_id.clone()),
            Some("Onboarding".to_string()),
            None,
        )
        .expect("Assign should succeed");

    assert_eq!(entry.action, AssignmentAction::Assignment);
    assert_eq!(entry.target_type, TargetKind::User);
    assert_eq!(entry.target_id, seed.user_id);
    assert_eq!(entry.target_label, "Ada Lovelace");
    assert_eq!(entry.asset_type, AssetKind::Computer);

    let reloaded = AssetService::new(db.pool.clone())
        .get_computer(&computer.id)
        .expect("Computer should exist");
    assert_eq!(reloaded.assigned_user_id.as_deref(), Some(seed.user_id.as_str()));
    assert_eq!(reloaded.assigned_department_id, None);
    assert_eq!(reloaded.state, AssetState::Assigned);
    assert_eq!(reloaded.lock_version, computer.lock_version + 1);

    let history = service
        .history_for_asset(AssetKind::Computer, &computer.id)
        .expect("History should load");
    assert_eq!(history.len(), 1);
}

#[test]
fn test_assign_device_to_department_is_mutually_exclusive() {
    let db = setup_db();
    let seed = seed_org_and_catalog(&db.pool);
    let device = seed_device(&db.pool, &seed, "SN-2001");

    AssignmentService::new(db.pool.clone())
        .assign(
            AssetRef::Device(device.id.clone()),
            TargetRef::Department(seed.department_id.clone()),
            None,
            None,
        )
        .expect("Assign should succeed");

    let reloaded = AssetService::new(db.pool.clone())
        .get_device(&device.id)
        .expect("Device should exist");
    assert_eq!(reloaded.assigned_user_id, None);
    assert_eq!(
        reloaded.assigned_department_id.as_deref(),
        Some(seed.department_id.as_str())
    );
}

#[test]
fn test_double_assign_is_rejected() {
    let db = setup_db();
    let seed = seed_org_and_catalog(&db.pool);
    let computer = seed_computer(&db.pool, &seed, "SN-1002");

    let service = AssignmentService::new(db.pool.clone());
    service
        .assign(
            AssetRef::Computer(computer.id.clone()),
            TargetRef::User(seed.user_id.clone()),
            None,
            None,
        )
        .expect("First assign should succeed");

    let err = service
        .assign(
            AssetRef::Computer(computer.id.clone()),
            TargetRef::Department(seed.department_id.clone()),
            None,
            None,
        )
        .expect_err("Second assign should be rejected");
    assert!(matches!(err, AssignmentError::AlreadyAssigned(_)));

    // The rejected attempt must not have appended anything.
    let history = service
        .history_for_asset(AssetKind::Computer, &computer.id)
        .expect("History should load");
    assert_eq!(history.len(), 1);
}

#[test]
fn test_unassign_clears_pointers_and_records_prior_holder() {
    let db = setup_db();
    let seed = seed_org_and_catalog(&db.pool);
    let computer = seed_computer(&db.pool, &seed, "SN-1003");

    let service = AssignmentService::new(db.pool.clone());
    service
        .assign(
            AssetRef::Computer(computer.id.clone()),
            TargetRef::User(seed.user_id.clone()),
            None,
            None,
        )
        .expect("Assign should succeed");

    let entry = service
        .unassign(AssetRef::Computer(computer.id.clone()), Some("Offboarding".to_string()))
        .expect("Unassign should succeed");
    assert_eq!(entry.action, AssignmentAction::Return);
    assert_eq!(entry.target_type, TargetKind::User);
    assert_eq!(entry.target_id, seed.user_id);
    assert_eq!(entry.target_label, "Ada Lovelace");

    let reloaded = AssetService::new(db.pool.clone())
        .get_computer(&computer.id)
        .expect("Computer should exist");
    assert_eq!(reloaded.assigned_user_id, None);
    assert_eq!(reloaded.assigned_department_id, None);
    assert_eq!(reloaded.state, AssetState::InStorage);
    assert_eq!(reloaded.lock_version, computer.lock_version + 2);

    // Ledger is append-only: both events survive, newest first.
    let history = service
        .history_for_asset(AssetKind::Computer, &computer.id)
        .expect("History should load");
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].action, AssignmentAction::Return);
    assert_eq!(history[1].action, AssignmentAction::Assignment);
}

#[test]
fn test_unassign_without_holder_is_rejected() {
    let db = setup_db();
    let seed = seed_org_and_catalog(&db.pool);
    let computer = seed_computer(&db.pool, &seed, "SN-1004");

    let service = AssignmentService::new(db.pool.clone());
    let err = service
        .unassign(AssetRef::Computer(computer.id.clone()), None)
        .expect_err("Unassign of an unassigned asset should be rejected");
    assert!(matches!(err, AssignmentError::NotAssigned(_)));

    let history = service
        .history_for_asset(AssetKind::Computer, &computer.id)
        .expect("History should load");
    assert!(history.is_empty());
}

#[test]
fn test_assign_to_missing_target_is_rejected() {
    let db = setup_db();
    let seed = seed_org_and_catalog(&db.pool);
    let computer = seed_computer(&db.pool, &seed, "SN-1005");

    let service = AssignmentService::new(db.pool.clone());
    let err = service
        .assign(
            AssetRef::Computer(computer.id.clone()),
            TargetRef::User("no-such-user".to_string()),
            None,
            None,
        )
        .expect_err("Assign to a missing user should fail");
    assert!(matches!(err, AssignmentError::NotFound(_)));

    // The failed transaction must leave the asset untouched.
    let reloaded = AssetService::new(db.pool.clone())
        .get_computer(&computer.id)
        .expect("Computer should exist");
    assert_eq!(reloaded.assigned_user_id, None);
    assert_eq!(reloaded.lock_version, computer.lock_version);
}

#[test]
fn test_assign_missing_asset_is_rejected() {
    let db = setup_db();
    let seed = seed_org_and_catalog(&db.pool);

    let err = AssignmentService::new(db.pool.clone())
        .assign(
            AssetRef::Computer("no-such-computer".to_string()),
            TargetRef::User(seed.user_id.clone()),
            None,
            None,
        )
        .expect_err("Assign of a missing asset should fail");
    assert!(matches!(err, AssignmentError::NotFound(_)));
}

#[test]
fn test_phone_line_round_trip_through_ledger() {
    let db = setup_db();
    let seed = seed_org_and_catalog(&db.pool);
    let line = seed_phone_line(&db.pool, "+34-600-000-001");

    let service = AssignmentService::new(db.pool.clone());
    service
        .assign(
            AssetRef::PhoneLine(line.id.clone()),
            TargetRef::Department(seed.department_id.clone()),
            None,
            None,
        )
        .expect("Assign should succeed");

    // No pointer row exists for lines: a second assign must still be
    // detected, from the ledger alone.
    let err = service
        .assign(
            AssetRef::PhoneLine(line.id.clone()),
            TargetRef::User(seed.user_id.clone()),
            None,
            None,
        )
        .expect_err("Double assign should be rejected");
    assert!(matches!(err, AssignmentError::AlreadyAssigned(_)));

    let entry = service
        .unassign(AssetRef::PhoneLine(line.id.clone()), None)
        .expect("Unassign should succeed");
    assert_eq!(entry.action, AssignmentAction::Return);
    assert_eq!(entry.target_type, TargetKind::Department);
    assert_eq!(entry.target_id, seed.department_id);
    assert_eq!(entry.target_label, "Service Desk");

    let err = service
        .unassign(AssetRef::PhoneLine(line.id.clone()), None)
        .expect_err("Second unassign should be rejected");
    assert!(matches!(err, AssignmentError::NotAssigned(_)));
}

#[test]
fn test_return_label_snapshot_survives_holder_deletion() {
    let db = setup_db();
    let seed = seed_org_and_catalog(&db.pool);
    let line = seed_phone_line(&db.pool, "+34-600-000-002");

    let service = AssignmentService::new(db.pool.clone());
    service
        .assign(
            AssetRef::PhoneLine(line.id.clone()),
            TargetRef::User(seed.user_id.clone()),
            None,
            None,
        )
        .expect("Assign should succeed");

    // The phone-line release path reads the holder from the ledger
    // snapshot, so it works even after the user row is gone.
    assetdesk_core::users::UserService::new(db.pool.clone())
        .delete_user(&seed.user_id)
        .expect("Delete user should succeed");

    let entry = service
        .unassign(AssetRef::PhoneLine(line.id.clone()), None)
        .expect("Unassign should still succeed");
    assert_eq!(entry.target_label, "Ada Lovelace");
}

#[test]
fn test_apply_wire_request_with_delivery_metadata() {
    let db = setup_db();
    let seed = seed_org_and_catalog(&db.pool);
    let computer = seed_computer(&db.pool, &seed, "SN-1006");

    let service = AssignmentService::new(db.pool.clone());
    let entry = service
        .apply(AssignmentRequest {
            item_id: computer.id.clone(),
            item_type: AssetKind::Computer,
            action: RequestedAction::Assign,
            target_type: Some(TargetKind::User),
            target_id: Some(seed.user_id.clone()),
            notes: None,
            delivery: Some(DeliveryMetadata {
                manager_name: Some("Grace Hopper".to_string()),
                reason: Some("New hire".to_string()),
                locality: Some("Madrid".to_string()),
                charger_model: None,
                charger_serial: None,
            }),
        })
        .expect("Apply should succeed");

    let delivery = entry.delivery.expect("Delivery metadata should round-trip");
    assert_eq!(delivery.manager_name.as_deref(), Some("Grace Hopper"));
    assert_eq!(delivery.locality.as_deref(), Some("Madrid"));

    let err = service
        .apply(AssignmentRequest {
            item_id: computer.id.clone(),
            item_type: AssetKind::Computer,
            action: RequestedAction::Assign,
            target_type: None,
            target_id: None,
            notes: None,
            delivery: None,
        })
        .expect_err("Assign without a target should be rejected");
    assert!(matches!(err, AssignmentError::InvalidData(_)));
}

#[test]
fn test_list_assignments_is_ordered_and_limited() {
    let db = setup_db();
    let seed = seed_org_and_catalog(&db.pool);
    let computer = seed_computer(&db.pool, &seed, "SN-1007");
    let device = seed_device(&db.pool, &seed, "SN-2007");

    let service = AssignmentService::new(db.pool.clone());
    service
        .assign(
            AssetRef::Computer(computer.id.clone()),
            TargetRef::User(seed.user_id.clone()),
            None,
            None,
        )
        .expect("Assign should succeed");
    service
        .assign(
            AssetRef::Device(device.id.clone()),
            TargetRef::Department(seed.department_id.clone()),
            None,
            None,
        )
        .expect("Assign should succeed");
    service
        .unassign(AssetRef::Computer(computer.id.clone()), None)
        .expect("Unassign should succeed");

    let all = service
        .list_assignments(None)
        .expect("List should succeed");
    assert_eq!(all.len(), 3);
    // Reading the feed twice must not change it.
    let again = service
        .list_assignments(None)
        .expect("List should succeed");
    assert_eq!(again.len(), 3);

    let limited = service
        .list_assignments(Some(2))
        .expect("Limited list should succeed");
    assert_eq!(limited.len(), 2);
}
