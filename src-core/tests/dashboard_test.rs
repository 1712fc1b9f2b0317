mod common;

use assetdesk_core::assets::AssetRef;
use assetdesk_core::assignments::{AssignmentAction, AssignmentService, TargetRef};
use assetdesk_core::dashboard::DashboardService;

use common::{seed_computer, seed_device, seed_org_and_catalog, seed_phone_line, setup_db};

#[test]
fn test_empty_inventory_summary() {
    let db = setup_db();
    seed_org_and_catalog(&db.pool);

    let summary = DashboardService::new(db.pool.clone())
        .summary()
        .expect("Summary should load");

    assert_eq!(summary.users, 1);
    assert_eq!(summary.departments, 2);
    assert_eq!(summary.computers.total, 0);
    assert_eq!(summary.phone_lines.total, 0);
    assert!(summary.department_distribution.is_empty());
    assert!(summary.recent_activity.is_empty());
}

#[test]
fn test_counts_track_assignments_across_all_kinds() {
    let db = setup_db();
    let seed = seed_org_and_catalog(&db.pool);
    let computer = seed_computer(&db.pool, &seed, "SN-5001");
    seed_computer(&db.pool, &seed, "SN-5002");
    let device = seed_device(&db.pool, &seed, "SN-6001");
    let line = seed_phone_line(&db.pool, "+34-600-200-001");
    seed_phone_line(&db.pool, "+34-600-200-002");

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
        .assign(
            AssetRef::PhoneLine(line.id.clone()),
            TargetRef::Department(seed.department_id.clone()),
            None,
            None,
        )
        .expect("Assign should succeed");

    let summary = DashboardService::new(db.pool.clone())
        .summary()
        .expect("Summary should load");

    assert_eq!(summary.computers.total, 2);
    assert_eq!(summary.computers.assigned, 1);
    assert_eq!(summary.computers.available, 1);
    assert_eq!(summary.devices.total, 1);
    assert_eq!(summary.devices.assigned, 1);
    assert_eq!(summary.phone_lines.total, 2);
    assert_eq!(summary.phone_lines.assigned, 1);
    assert_eq!(summary.phone_lines.available, 1);

    // Device + phone line are department-held; the user-held computer
    // does not show up in the distribution.
    assert_eq!(summary.department_distribution.len(), 1);
    assert_eq!(summary.department_distribution[0].department_name, "Service Desk");
    assert_eq!(summary.department_distribution[0].assets, 2);

    assert_eq!(summary.recent_activity.len(), 3);
}

#[test]
fn test_released_phone_line_leaves_the_assigned_count() {
    let db = setup_db();
    let seed = seed_org_and_catalog(&db.pool);
    let line = seed_phone_line(&db.pool, "+34-600-200-003");

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

    let summary = DashboardService::new(db.pool.clone())
        .summary()
        .expect("Summary should load");

    assert_eq!(summary.phone_lines.total, 1);
    assert_eq!(summary.phone_lines.assigned, 0);
    assert_eq!(summary.phone_lines.available, 1);

    // Both ledger events stay in the feed, newest first.
    assert_eq!(summary.recent_activity.len(), 2);
    assert_eq!(summary.recent_activity[0].action, AssignmentAction::Return);
}
