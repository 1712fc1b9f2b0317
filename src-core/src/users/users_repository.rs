use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::get_connection;
use crate::schema::users;

use super::users_errors::{Result, UserError};
use super::users_model::*;

/// Repository for managing user data in the database
pub struct UserRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl UserRepository {
    /// Creates a new UserRepository instance
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    /// Creates a new user in the database
    pub fn create(&self, new_user: NewUser) -> Result<User> {
        new_user.validate()?;

        let mut user_db: UserDB = new_user.into();
        user_db.id = Uuid::new_v4().to_string();

        let mut conn =
            get_connection(&self.pool).map_err(|e| UserError::DatabaseError(e.to_string()))?;

        diesel::insert_into(users::table)
            .values(&user_db)
            .execute(&mut conn)
            .map_err(UserError::from)?;

        Ok(user_db.into())
    }

    /// Updates an existing user
    pub fn update(&self, update: UserUpdate) -> Result<User> {
        update.validate()?;

        let mut conn =
            get_connection(&self.pool).map_err(|e| UserError::DatabaseError(e.to_string()))?;

        let affected = diesel::update(users::table.find(&update.id))
            .set((
                users::first_name.eq(&update.first_name),
                users::last_name.eq(&update.last_name),
                users::email.eq(&update.email),
                users::department_id.eq(&update.department_id),
                users::is_active.eq(update.is_active),
                users::updated_at.eq(chrono::Utc::now().naive_utc()),
            ))
            .execute(&mut conn)
            .map_err(UserError::from)?;

        if affected == 0 {
            return Err(UserError::NotFound(format!(
                "User with id {} not found",
                update.id
            )));
        }

        self.get_by_id(&update.id)
    }

    /// Retrieves a user by its ID
    pub fn get_by_id(&self, user_id: &str) -> Result<User> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| UserError::DatabaseError(e.to_string()))?;

        users::table
            .find(user_id)
            .first::<UserDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    UserError::NotFound(format!("User with id {} not found", user_id))
                }
                _ => UserError::DatabaseError(e.to_string()),
            })
            .map(User::from)
    }

    /// Lists users, optionally filtering by active status and department
    pub fn list(
        &self,
        is_active_filter: Option<bool>,
        department_filter: Option<&str>,
    ) -> Result<Vec<User>> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| UserError::DatabaseError(e.to_string()))?;

        let mut query = users::table.into_boxed();

        if let Some(active) = is_active_filter {
            query = query.filter(users::is_active.eq(active));
        }
        if let Some(department) = department_filter {
            query = query.filter(users::department_id.eq(department));
        }

        query
            .order((users::last_name.asc(), users::first_name.asc()))
            .load::<UserDB>(&mut conn)
            .map_err(UserError::from)
            .map(|rows| rows.into_iter().map(User::from).collect())
    }

    /// Deletes a user by its ID
    pub fn delete(&self, user_id: &str) -> Result<usize> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| UserError::DatabaseError(e.to_string()))?;

        let affected = diesel::delete(users::table.find(user_id))
            .execute(&mut conn)
            .map_err(UserError::from)?;

        if affected == 0 {
            return Err(UserError::NotFound(format!(
                "User with id {} not found",
                user_id
            )));
        }

        Ok(affected)
    }

    /// Resolves "{first} {last}" labels for a set of user ids
    pub fn full_names_by_ids(&self, ids: &[String]) -> Result<HashMap<String, String>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let mut conn =
            get_connection(&self.pool).map_err(|e| UserError::DatabaseError(e.to_string()))?;

        let rows = users::table
            .filter(users::id.eq_any(ids))
            .select((users::id, users::first_name, users::last_name))
            .load::<(String, String, String)>(&mut conn)
            .map_err(UserError::from)?;

        Ok(rows
            .into_iter()
            .map(|(id, first, last)| (id, format!("{} {}", first, last)))
            .collect())
    }

    /// Counts users
    pub fn count(&self) -> Result<i64> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| UserError::DatabaseError(e.to_string()))?;

        users::table
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(UserError::from)
    }
}
