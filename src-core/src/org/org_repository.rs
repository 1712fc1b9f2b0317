use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::get_connection;
use crate::schema::{departments, management_areas};

use super::org_errors::{OrgError, Result};
use super::org_model::*;

/// Repository for managing organizational-unit data in the database
pub struct OrgRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl OrgRepository {
    /// Creates a new OrgRepository instance
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    pub fn create_management_area(&self, new_area: NewManagementArea) -> Result<ManagementArea> {
        new_area.validate()?;

        let mut area_db: ManagementAreaDB = new_area.into();
        area_db.id = Uuid::new_v4().to_string();

        let mut conn =
            get_connection(&self.pool).map_err(|e| OrgError::DatabaseError(e.to_string()))?;

        diesel::insert_into(management_areas::table)
            .values(&area_db)
            .execute(&mut conn)
            .map_err(OrgError::from)?;

        Ok(area_db.into())
    }

    pub fn update_management_area(&self, update: ManagementAreaUpdate) -> Result<ManagementArea> {
        update.validate()?;

        let mut conn =
            get_connection(&self.pool).map_err(|e| OrgError::DatabaseError(e.to_string()))?;

        let affected = diesel::update(management_areas::table.find(&update.id))
            .set((
                management_areas::name.eq(&update.name),
                management_areas::updated_at.eq(chrono::Utc::now().naive_utc()),
            ))
            .execute(&mut conn)
            .map_err(OrgError::from)?;

        if affected == 0 {
            return Err(OrgError::NotFound(format!(
                "Management area with id {} not found",
                update.id
            )));
        }

        self.get_management_area(&update.id)
    }

    pub fn get_management_area(&self, area_id: &str) -> Result<ManagementArea> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| OrgError::DatabaseError(e.to_string()))?;

        management_areas::table
            .find(area_id)
            .first::<ManagementAreaDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    OrgError::NotFound(format!("Management area with id {} not found", area_id))
                }
                _ => OrgError::DatabaseError(e.to_string()),
            })
            .map(ManagementArea::from)
    }

    pub fn list_management_areas(&self) -> Result<Vec<ManagementArea>> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| OrgError::DatabaseError(e.to_string()))?;

        management_areas::table
            .order(management_areas::name.asc())
            .load::<ManagementAreaDB>(&mut conn)
            .map_err(OrgError::from)
            .map(|rows| rows.into_iter().map(ManagementArea::from).collect())
    }

    pub fn delete_management_area(&self, area_id: &str) -> Result<usize> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| OrgError::DatabaseError(e.to_string()))?;

        let affected = diesel::delete(management_areas::table.find(area_id))
            .execute(&mut conn)
            .map_err(OrgError::from)?;

        if affected == 0 {
            return Err(OrgError::NotFound(format!(
                "Management area with id {} not found",
                area_id
            )));
        }

        Ok(affected)
    }

    pub fn create_department(&self, new_department: NewDepartment) -> Result<Department> {
        new_department.validate()?;

        let mut department_db: DepartmentDB = new_department.into();
        department_db.id = Uuid::new_v4().to_string();

        let mut conn =
            get_connection(&self.pool).map_err(|e| OrgError::DatabaseError(e.to_string()))?;

        diesel::insert_into(departments::table)
            .values(&department_db)
            .execute(&mut conn)
            .map_err(OrgError::from)?;

        Ok(department_db.into())
    }

    pub fn update_department(&self, update: DepartmentUpdate) -> Result<Department> {
        update.validate()?;

        let mut conn =
            get_connection(&self.pool).map_err(|e| OrgError::DatabaseError(e.to_string()))?;

        let affected = diesel::update(departments::table.find(&update.id))
            .set((
                departments::name.eq(&update.name),
                departments::management_area_id.eq(&update.management_area_id),
                departments::updated_at.eq(chrono::Utc::now().naive_utc()),
            ))
            .execute(&mut conn)
            .map_err(OrgError::from)?;

        if affected == 0 {
            return Err(OrgError::NotFound(format!(
                "Department with id {} not found",
                update.id
            )));
        }

        self.get_department(&update.id)
    }

    pub fn get_department(&self, department_id: &str) -> Result<Department> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| OrgError::DatabaseError(e.to_string()))?;

        departments::table
            .find(department_id)
            .first::<DepartmentDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    OrgError::NotFound(format!("Department with id {} not found", department_id))
                }
                _ => OrgError::DatabaseError(e.to_string()),
            })
            .map(Department::from)
    }

    /// Lists departments, optionally scoped to one management area
    pub fn list_departments(&self, area_filter: Option<&str>) -> Result<Vec<Department>> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| OrgError::DatabaseError(e.to_string()))?;

        let mut query = departments::table.into_boxed();
        if let Some(area) = area_filter {
            query = query.filter(departments::management_area_id.eq(area));
        }

        query
            .order(departments::name.asc())
            .load::<DepartmentDB>(&mut conn)
            .map_err(OrgError::from)
            .map(|rows| rows.into_iter().map(Department::from).collect())
    }

    pub fn delete_department(&self, department_id: &str) -> Result<usize> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| OrgError::DatabaseError(e.to_string()))?;

        let affected = diesel::delete(departments::table.find(department_id))
            .execute(&mut conn)
            .map_err(OrgError::from)?;

        if affected == 0 {
            return Err(OrgError::NotFound(format!(
                "Department with id {} not found",
                department_id
            )));
        }

        Ok(affected)
    }

    /// Resolves department names for a set of ids
    pub fn department_names_by_ids(&self, ids: &[String]) -> Result<HashMap<String, String>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let mut conn =
            get_connection(&self.pool).map_err(|e| OrgError::DatabaseError(e.to_string()))?;

        let rows = departments::table
            .filter(departments::id.eq_any(ids))
            .select((departments::id, departments::name))
            .load::<(String, String)>(&mut conn)
            .map_err(OrgError::from)?;

        Ok(rows.into_iter().collect())
    }

    /// Counts departments
    pub fn count_departments(&self) -> Result<i64> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| OrgError::DatabaseError(e.to_string()))?;

        departments::table
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(OrgError::from)
    }
}
