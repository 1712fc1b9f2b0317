use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use super::catalog_errors::{CatalogError, Result};

/// Domain model for a hardware brand
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: String,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new brand
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBrand {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
}

impl NewBrand {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::InvalidData(
                "Brand name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Input model for updating a brand
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandUpdate {
    #[serde(default)]
    pub id: String,
    pub name: String,
}

impl BrandUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(CatalogError::InvalidData(
                "Brand id is required for updates".to_string(),
            ));
        }
        if self.name.trim().is_empty() {
            return Err(CatalogError::InvalidData(
                "Brand name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Database model for brands
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::brands)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BrandDB {
    pub id: String,
    pub name: String,
    #[diesel(skip_insertion)]
    pub created_at: NaiveDateTime,
    #[diesel(skip_insertion)]
    pub updated_at: NaiveDateTime,
}

impl From<BrandDB> for Brand {
    fn from(db: BrandDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<NewBrand> for BrandDB {
    fn from(domain: NewBrand) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: domain.id.unwrap_or_default(),
            name: domain.name,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Domain model for a hardware model belonging to a brand
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: String,
    pub brand_id: String,
    pub name: String,
    pub category: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub brand_id: String,
    pub name: String,
    pub category: String,
}

impl NewModel {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::InvalidData(
                "Model name cannot be empty".to_string(),
            ));
        }
        if self.brand_id.trim().is_empty() {
            return Err(CatalogError::InvalidData(
                "Brand id cannot be empty".to_string(),
            ));
        }
        if self.category.trim().is_empty() {
            return Err(CatalogError::InvalidData(
                "Category cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Input model for updating a model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelUpdate {
    #[serde(default)]
    pub id: String,
    pub brand_id: String,
    pub name: String,
    pub category: String,
}

impl ModelUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(CatalogError::InvalidData(
                "Model id is required for updates".to_string(),
            ));
        }
        if self.name.trim().is_empty() {
            return Err(CatalogError::InvalidData(
                "Model name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Database model for models
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::models)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ModelDB {
    pub id: String,
    pub brand_id: String,
    pub name: String,
    pub category: String,
    #[diesel(skip_insertion)]
    pub created_at: NaiveDateTime,
    #[diesel(skip_insertion)]
    pub updated_at: NaiveDateTime,
}

impl From<ModelDB> for Model {
    fn from(db: ModelDB) -> Self {
        Self {
            id: db.id,
            brand_id: db.brand_id,
            name: db.name,
            category: db.category,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<NewModel> for ModelDB {
    fn from(domain: NewModel) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: domain.id.unwrap_or_default(),
            brand_id: domain.brand_id,
            name: domain.name,
            category: domain.category,
            created_at: now,
            updated_at: now,
        }
    }
}
