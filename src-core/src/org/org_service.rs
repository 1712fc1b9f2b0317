use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use super::org_errors::Result;
use super::org_model::*;
use super::org_repository::OrgRepository;

/// Service for managing management areas and departments
pub struct OrgService {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl OrgService {
    /// Creates a new OrgService instance
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    pub fn create_management_area(&self, new_area: NewManagementArea) -> Result<ManagementArea> {
        OrgRepository::new(self.pool.clone()).create_management_area(new_area)
    }

    pub fn update_management_area(&self, update: ManagementAreaUpdate) -> Result<ManagementArea> {
        OrgRepository::new(self.pool.clone()).update_management_area(update)
    }

    pub fn get_management_area(&self, area_id: &str) -> Result<ManagementArea> {
        OrgRepository::new(self.pool.clone()).get_management_area(area_id)
    }

    pub fn list_management_areas(&self) -> Result<Vec<ManagementArea>> {
        OrgRepository::new(self.pool.clone()).list_management_areas()
    }

    pub fn delete_management_area(&self, area_id: &str) -> Result<()> {
        OrgRepository::new(self.pool.clone()).delete_management_area(area_id)?;
        Ok(())
    }

    pub fn create_department(&self, new_department: NewDepartment) -> Result<Department> {
        OrgRepository::new(self.pool.clone()).create_department(new_department)
    }

    pub fn update_department(&self, update: DepartmentUpdate) -> Result<Department> {
        OrgRepository::new(self.pool.clone()).update_department(update)
    }

    pub fn get_department(&self, department_id: &str) -> Result<Department> {
        OrgRepository::new(self.pool.clone()).get_department(department_id)
    }

    pub fn list_departments(&self, area_filter: Option<&str>) -> Result<Vec<Department>> {
        OrgRepository::new(self.pool.clone()).list_departments(area_filter)
    }

    pub fn delete_department(&self, department_id: &str) -> Result<()> {
        OrgRepository::new(self.pool.clone()).delete_department(department_id)?;
        Ok(())
    }
}
