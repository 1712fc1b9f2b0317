use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use super::org_errors::{OrgError, Result};

/// Domain model for a management area (top-level organizational unit)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagementArea {
    pub id: String,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new management area
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewManagementArea {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
}

impl NewManagementArea {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(OrgError::InvalidData(
                "Management area name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Input model for updating a management area
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagementAreaUpdate {
    #[serde(default)]
    pub id: String,
    pub name: String,
}

impl ManagementAreaUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(OrgError::InvalidData(
                "Management area id is required for updates".to_string(),
            ));
        }
        if self.name.trim().is_empty() {
            return Err(OrgError::InvalidData(
                "Management area name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Database model for management areas
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::management_areas)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ManagementAreaDB {
    pub id: String,
    pub name: String,
    #[diesel(skip_insertion)]
    pub created_at: NaiveDateTime,
    #[diesel(skip_insertion)]
    pub updated_at: NaiveDateTime,
}

impl From<ManagementAreaDB> for ManagementArea {
    fn from(db: ManagementAreaDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<NewManagementArea> for ManagementAreaDB {
    fn from(domain: NewManagementArea) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: domain.id.unwrap_or_default(),
            name: domain.name,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Domain model for a department. Departments can hold assets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: String,
    pub name: String,
    pub management_area_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new department
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDepartment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub management_area_id: String,
}

impl NewDepartment {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(OrgError::InvalidData(
                "Department name cannot be empty".to_string(),
            ));
        }
        if self.management_area_id.trim().is_empty() {
            return Err(OrgError::InvalidData(
                "Management area id cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Input model for updating a department
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentUpdate {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub management_area_id: String,
}

impl DepartmentUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(OrgError::InvalidData(
                "Department id is required for updates".to_string(),
            ));
        }
        if self.name.trim().is_empty() {
            return Err(OrgError::InvalidData(
                "Department name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Database model for departments
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::departments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DepartmentDB {
    pub id: String,
    pub name: String,
    pub management_area_id: String,
    #[diesel(skip_insertion)]
    pub created_at: NaiveDateTime,
    #[diesel(skip_insertion)]
    pub updated_at: NaiveDateTime,
}

impl From<DepartmentDB> for Department {
    fn from(db: DepartmentDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            management_area_id: db.management_area_id,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<NewDepartment> for DepartmentDB {
    fn from(domain: NewDepartment) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: domain.id.unwrap_or_default(),
            name: domain.name,
            management_area_id: domain.management_area_id,
            created_at: now,
            updated_at: now,
        }
    }
}
