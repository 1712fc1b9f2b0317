mod common;

use assetdesk_core::assets::{AssetError, AssetService, AssetState, ComputerUpdate, NewComputer};
use assetdesk_core::catalog::{CatalogError, CatalogService, NewBrand, NewModel};
use assetdesk_core::users::{UserError, UserService, UserUpdate};

use common::{seed_computer, seed_org_and_catalog, setup_db};

#[test]
fn test_catalog_round_trip() {
    let db = setup_db();
    let catalog = CatalogService::new(db.pool.clone());

    let brand = catalog
        .create_brand(NewBrand {
            id: None,
            name: "Dell".to_string(),
        })
        .expect("Brand create should succeed");
    let model = catalog
        .create_model(NewModel {
            id: None,
            brand_id: brand.id.clone(),
            name: "Latitude 7450".to_string(),
            category: "Laptop".to_string(),
        })
        .expect("Model create should succeed");

    let models = catalog
        .list_models(Some(&brand.id))
        .expect("Model list should succeed");
    assert_eq!(models.len(), 1);
    assert_eq!(models[0].name, "Latitude 7450");

    catalog
        .delete_model(&model.id)
        .expect("Model delete should succeed");
    let err = catalog
        .get_model(&model.id)
        .expect_err("Deleted model should be gone");
    assert!(matches!(err, CatalogError::NotFound(_)));
}

#[test]
fn test_create_brand_with_empty_name_fails() {
    let db = setup_db();
    let err = CatalogService::new(db.pool.clone())
        .create_brand(NewBrand {
            id: None,
            name: "   ".to_string(),
        })
        .expect_err("Blank name should be rejected");
    assert!(matches!(err, CatalogError::InvalidData(_)));
}

#[test]
fn test_computer_is_created_in_storage_with_zero_lock_version() {
    let db = setup_db();
    let seed = seed_org_and_catalog(&db.pool);
    let computer = seed_computer(&db.pool, &seed, "SN-7001");

    assert_eq!(computer.state, AssetState::InStorage);
    assert_eq!(computer.lock_version, 0);
    assert_eq!(computer.assigned_user_id, None);
    assert_eq!(computer.assigned_department_id, None);
}

#[test]
fn test_duplicate_serial_number_is_rejected() {
    let db = setup_db();
    let seed = seed_org_and_catalog(&db.pool);
    seed_computer(&db.pool, &seed, "SN-7002");

    let err = AssetService::new(db.pool.clone())
        .create_computer(NewComputer {
            id: None,
            serial_number: "SN-7002".to_string(),
            model_id: seed.model_id.clone(),
            cpu: None,
            ram: None,
            storage: None,
            charger_serial: None,
            notes: None,
        })
        .expect_err("Duplicate serial should be rejected");
    assert!(matches!(err, AssetError::DatabaseError(_)));
}

#[test]
fn test_update_cannot_set_assigned_state_directly() {
    let db = setup_db();
    let seed = seed_org_and_catalog(&db.pool);
    let computer = seed_computer(&db.pool, &seed, "SN-7003");

    let service = AssetService::new(db.pool.clone());
    let err = service
        .update_computer(ComputerUpdate {
            id: computer.id.clone(),
            serial_number: computer.serial_number.clone(),
            model_id: computer.model_id.clone(),
            state: Some(AssetState::Assigned),
            cpu: computer.cpu.clone(),
            ram: computer.ram.clone(),
            storage: computer.storage.clone(),
            charger_serial: None,
            notes: None,
        })
        .expect_err("Assigned state is reserved for the transition path");
    assert!(matches!(err, AssetError::InvalidData(_)));

    // Repair status goes through the normal update path.
    let updated = service
        .update_computer(ComputerUpdate {
            id: computer.id.clone(),
            serial_number: computer.serial_number.clone(),
            model_id: computer.model_id.clone(),
            state: Some(AssetState::UnderRepair),
            cpu: computer.cpu.clone(),
            ram: computer.ram.clone(),
            storage: computer.storage.clone(),
            charger_serial: None,
            notes: Some("Screen replacement".to_string()),
        })
        .expect("Update should succeed");
    assert_eq!(updated.state, AssetState::UnderRepair);
    assert_eq!(updated.notes.as_deref(), Some("Screen replacement"));
    // Updates never touch the concurrency counter.
    assert_eq!(updated.lock_version, computer.lock_version);
}

#[test]
fn test_user_crud_and_not_found() {
    let db = setup_db();
    let seed = seed_org_and_catalog(&db.pool);
    let service = UserService::new(db.pool.clone());

    let updated = service
        .update_user(UserUpdate {
            id: seed.user_id.clone(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: Some("ada.lovelace@example.com".to_string()),
            department_id: Some(seed.department_id.clone()),
            is_active: false,
        })
        .expect("Update should succeed");
    assert_eq!(updated.email.as_deref(), Some("ada.lovelace@example.com"));
    assert!(!updated.is_active);

    service
        .delete_user(&seed.user_id)
        .expect("Delete should succeed");
    let err = service
        .delete_user(&seed.user_id)
        .expect_err("Second delete should report NotFound");
    assert!(matches!(err, UserError::NotFound(_)));
}
