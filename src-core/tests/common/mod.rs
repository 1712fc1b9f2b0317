use std::sync::Arc;

use tempfile::TempDir;

use assetdesk_core::assets::{AssetService, Computer, Device, NewComputer, NewDevice, NewPhoneLine, PhoneLine};
use assetdesk_core::catalog::{CatalogService, NewBrand, NewModel};
use assetdesk_core::db::{self, DbPool};
use assetdesk_core::org::{NewDepartment, NewManagementArea, OrgService};
use assetdesk_core::users::{NewUser, UserService};

/// A throwaway database with migrations applied. The temp dir is
/// dropped (and the database file with it) when the fixture goes out
/// of scope.
pub struct TestDb {
    pub pool: Arc<DbPool>,
    _data_dir: TempDir,
}

pub fn setup_db() -> TestDb {
    let data_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = db::init(data_dir.path().to_str().unwrap()).expect("Failed to initialize database");
    let pool = db::create_pool(&db_path).expect("Failed to create database pool");
    db::run_migrations(&pool).expect("Failed to run migrations");
    TestDb {
        pool,
        _data_dir: data_dir,
    }
}

/// Ids of a minimal org/catalog fixture shared by most tests.
pub struct Seed {
    pub department_id: String,
    pub other_department_id: String,
    pub user_id: String,
    pub model_id: String,
}

pub fn seed_org_and_catalog(pool: &Arc<DbPool>) -> Seed {
    let org = OrgService::new(pool.clone());
    let area = org
        .create_management_area(NewManagementArea {
            id: None,
            name: "Corporate IT".to_string(),
        })
        .expect("Failed to create management area");
    let department = org
        .create_department(NewDepartment {
            id: None,
            name: "Service Desk".to_string(),
            management_area_id: area.id.clone(),
        })
        .expect("Failed to create department");
    let other_department = org
        .create_department(NewDepartment {
            id: None,
            name: "Logistics".to_string(),
            management_area_id: area.id,
        })
        .expect("Failed to create department");

    let user = UserService::new(pool.clone())
        .create_user(NewUser {
            id: None,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: Some("ada@example.com".to_string()),
            department_id: Some(department.id.clone()),
            is_active: true,
        })
        .expect("Failed to create user");

    let catalog = CatalogService::new(pool.clone());
    let brand = catalog
        .create_brand(NewBrand {
            id: None,
            name: "Lenovo".to_string(),
        })
        .expect("Failed to create brand");
    let model = catalog
        .create_model(NewModel {
            id: None,
            brand_id: brand.id,
            name: "ThinkPad T14".to_string(),
            category: "Laptop".to_string(),
        })
        .expect("Failed to create model");

    Seed {
        department_id: department.id,
        other_department_id: other_department.id,
        user_id: user.id,
        model_id: model.id,
    }
}

pub fn seed_computer(pool: &Arc<DbPool>, seed: &Seed, serial: &str) -> Computer {
    AssetService::new(pool.clone())
        .create_computer(NewComputer {
            id: None,
            serial_number: serial.to_string(),
            model_id: seed.model_id.clone(),
            cpu: Some("Ryzen 7".to_string()),
            ram: Some("32GB".to_string()),
            storage: Some("1TB".to_string()),
            charger_serial: None,
            notes: None,
        })
        .expect("Failed to create computer")
}

pub fn seed_device(pool: &Arc<DbPool>, seed: &Seed, serial: &str) -> Device {
    AssetService::new(pool.clone())
        .create_device(NewDevice {
            id: None,
            serial_number: serial.to_string(),
            model_id: seed.model_id.clone(),
            notes: None,
        })
        .expect("Failed to create device")
}

pub fn seed_phone_line(pool: &Arc<DbPool>, number: &str) -> PhoneLine {
    AssetService::new(pool.clone())
        .create_phone_line(NewPhoneLine {
            id: None,
            line_number: number.to_string(),
            provider: "Movistar".to_string(),
            sim_serial: Some("8934-0000-0000".to_string()),
            plan: Some("Corporate 5GB".to_string()),
            notes: None,
        })
        .expect("Failed to create phone line")
}
