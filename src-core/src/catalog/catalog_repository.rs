use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::get_connection;
use crate::schema::{brands, models};

use super::catalog_errors::{CatalogError, Result};
use super::catalog_model::*;

/// Repository for managing brand and model data in the database
pub struct CatalogRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl CatalogRepository {
    /// Creates a new CatalogRepository instance
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    pub fn create_brand(&self, new_brand: NewBrand) -> Result<Brand> {
        new_brand.validate()?;

        let mut brand_db: BrandDB = new_brand.into();
        brand_db.id = Uuid::new_v4().to_string();

        let mut conn = get_connection(&self.pool)
            .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        diesel::insert_into(brands::table)
            .values(&brand_db)
            .execute(&mut conn)
            .map_err(CatalogError::from)?;

        Ok(brand_db.into())
    }

    pub fn update_brand(&self, update: BrandUpdate) -> Result<Brand> {
        update.validate()?;

        let mut conn = get_connection(&self.pool)
            .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        let affected = diesel::update(brands::table.find(&update.id))
            .set((
                brands::name.eq(&update.name),
                brands::updated_at.eq(chrono::Utc::now().naive_utc()),
            ))
            .execute(&mut conn)
            .map_err(CatalogError::from)?;

        if affected == 0 {
            return Err(CatalogError::NotFound(format!(
                "Brand with id {} not found",
                update.id
            )));
        }

        self.get_brand(&update.id)
    }

    pub fn get_brand(&self, brand_id: &str) -> Result<Brand> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        brands::table
            .find(brand_id)
            .first::<BrandDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    CatalogError::NotFound(format!("Brand with id {} not found", brand_id))
                }
                _ => CatalogError::DatabaseError(e.to_string()),
            })
            .map(Brand::from)
    }

    pub fn list_brands(&self) -> Result<Vec<Brand>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        brands::table
            .order(brands::name.asc())
            .load::<BrandDB>(&mut conn)
            .map_err(CatalogError::from)
            .map(|rows| rows.into_iter().map(Brand::from).collect())
    }

    pub fn delete_brand(&self, brand_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        let affected = diesel::delete(brands::table.find(brand_id))
            .execute(&mut conn)
            .map_err(CatalogError::from)?;

        if affected == 0 {
            return Err(CatalogError::NotFound(format!(
                "Brand with id {} not found",
                brand_id
            )));
        }

        Ok(affected)
    }

    pub fn create_model(&self, new_model: NewModel) -> Result<Model> {
        new_model.validate()?;

        let mut model_db: ModelDB = new_model.into();
        model_db.id = Uuid::new_v4().to_string();

        let mut conn = get_connection(&self.pool)
            .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        diesel::insert_into(models::table)
            .values(&model_db)
            .execute(&mut conn)
            .map_err(CatalogError::from)?;

        Ok(model_db.into())
    }

    pub fn update_model(&self, update: ModelUpdate) -> Result<Model> {
        update.validate()?;

        let mut conn = get_connection(&self.pool)
            .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        let affected = diesel::update(models::table.find(&update.id))
            .set((
                models::brand_id.eq(&update.brand_id),
                models::name.eq(&update.name),
                models::category.eq(&update.category),
                models::updated_at.eq(chrono::Utc::now().naive_utc()),
            ))
            .execute(&mut conn)
            .map_err(CatalogError::from)?;

        if affected == 0 {
            return Err(CatalogError::NotFound(format!(
                "Model with id {} not found",
                update.id
            )));
        }

        self.get_model(&update.id)
    }

    pub fn get_model(&self, model_id: &str) -> Result<Model> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        models::table
            .find(model_id)
            .first::<ModelDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    CatalogError::NotFound(format!("Model with id {} not found", model_id))
                }
                _ => CatalogError::DatabaseError(e.to_string()),
            })
            .map(Model::from)
    }

    /// Lists models, optionally scoped to one brand
    pub fn list_models(&self, brand_filter: Option<&str>) -> Result<Vec<Model>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        let mut query = models::table.into_boxed();
        if let Some(brand) = brand_filter {
            query = query.filter(models::brand_id.eq(brand));
        }

        query
            .order(models::name.asc())
            .load::<ModelDB>(&mut conn)
            .map_err(CatalogError::from)
            .map(|rows| rows.into_iter().map(Model::from).collect())
    }

    pub fn delete_model(&self, model_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        let affected = diesel::delete(models::table.find(model_id))
            .execute(&mut conn)
            .map_err(CatalogError::from)?;

        if affected == 0 {
            return Err(CatalogError::NotFound(format!(
                "Model with id {} not found",
                model_id
            )));
        }

        Ok(affected)
    }
}
