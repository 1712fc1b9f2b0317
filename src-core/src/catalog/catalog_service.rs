use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use super::catalog_errors::Result;
use super::catalog_model::*;
use super::catalog_repository::CatalogRepository;

/// Service for managing the brand/model catalog
pub struct CatalogService {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl CatalogService {
    /// Creates a new CatalogService instance
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    pub fn create_brand(&self, new_brand: NewBrand) -> Result<Brand> {
        CatalogRepository::new(self.pool.clone()).create_brand(new_brand)
    }

    pub fn update_brand(&self, update: BrandUpdate) -> Result<Brand> {
        CatalogRepository::new(self.pool.clone()).update_brand(update)
    }

    pub fn get_brand(&self, brand_id: &str) -> Result<Brand> {
        CatalogRepository::new(self.pool.clone()).get_brand(brand_id)
    }

    pub fn list_brands(&self) -> Result<Vec<Brand>> {
        CatalogRepository::new(self.pool.clone()).list_brands()
    }

    pub fn delete_brand(&self, brand_id: &str) -> Result<()> {
        CatalogRepository::new(self.pool.clone()).delete_brand(brand_id)?;
        Ok(())
    }

    pub fn create_model(&self, new_model: NewModel) -> Result<Model> {
        CatalogRepository::new(self.pool.clone()).create_model(new_model)
    }

    pub fn update_model(&self, update: ModelUpdate) -> Result<Model> {
        CatalogRepository::new(self.pool.clone()).update_model(update)
    }

    pub fn get_model(&self, model_id: &str) -> Result<Model> {
        CatalogRepository::new(self.pool.clone()).get_model(model_id)
    }

    pub fn list_models(&self, brand_filter: Option<&str>) -> Result<Vec<Model>> {
        CatalogRepository::new(self.pool.clone()).list_models(brand_filter)
    }

    pub fn delete_model(&self, model_id: &str) -> Result<()> {
        CatalogRepository::new(self.pool.clone()).delete_model(model_id)?;
        Ok(())
    }
}
