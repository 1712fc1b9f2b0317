use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use super::users_errors::Result;
use super::users_model::*;
use super::users_repository::UserRepository;

/// Service for managing users
pub struct UserService {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl UserService {
    /// Creates a new UserService instance
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    pub fn create_user(&self, new_user: NewUser) -> Result<User> {
        UserRepository::new(self.pool.clone()).create(new_user)
    }

    pub fn update_user(&self, update: UserUpdate) -> Result<User> {
        UserRepository::new(self.pool.clone()).update(update)
    }

    pub fn get_user(&self, user_id: &str) -> Result<User> {
        UserRepository::new(self.pool.clone()).get_by_id(user_id)
    }

    pub fn list_users(
        &self,
        is_active_filter: Option<bool>,
        department_filter: Option<&str>,
    ) -> Result<Vec<User>> {
        UserRepository::new(self.pool.clone()).list(is_active_filter, department_filter)
    }

    pub fn delete_user(&self, user_id: &str) -> Result<()> {
        UserRepository::new(self.pool.clone()).delete(user_id)?;
        Ok(())
    }
}
