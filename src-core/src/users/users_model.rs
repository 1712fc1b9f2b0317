use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use super::users_errors::{Result, UserError};

/// Domain model for a user. Users can hold assets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub department_id: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl User {
    /// The label used for this user on ledger entries and listings
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Input model for creating a new user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub department_id: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl NewUser {
    pub fn validate(&self) -> Result<()> {
        if self.first_name.trim().is_empty() {
            return Err(UserError::InvalidData(
                "First name cannot be empty".to_string(),
            ));
        }
        if self.last_name.trim().is_empty() {
            return Err(UserError::InvalidData(
                "Last name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Input model for updating an existing user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(default)]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub department_id: Option<String>,
    pub is_active: bool,
}

impl UserUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(UserError::InvalidData(
                "User id is required for updates".to_string(),
            ));
        }
        if self.first_name.trim().is_empty() {
            return Err(UserError::InvalidData(
                "First name cannot be empty".to_string(),
            ));
        }
        if self.last_name.trim().is_empty() {
            return Err(UserError::InvalidData(
                "Last name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Database model for users
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserDB {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub department_id: Option<String>,
    pub is_active: bool,
    #[diesel(skip_insertion)]
    pub created_at: NaiveDateTime,
    #[diesel(skip_insertion)]
    pub updated_at: NaiveDateTime,
}

impl From<UserDB> for User {
    fn from(db: UserDB) -> Self {
        Self {
            id: db.id,
            first_name: db.first_name,
            last_name: db.last_name,
            email: db.email,
            department_id: db.department_id,
            is_active: db.is_active,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<NewUser> for UserDB {
    fn from(domain: NewUser) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: domain.id.unwrap_or_default(),
            first_name: domain.first_name,
            last_name: domain.last_name,
            email: domain.email,
            department_id: domain.department_id,
            is_active: domain.is_active,
            created_at: now,
            updated_at: now,
        }
    }
}
