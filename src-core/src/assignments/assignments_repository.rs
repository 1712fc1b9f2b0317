use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::assets::AssetKind;
use crate::assignments::assignments_errors::{AssignmentError, Result};
use crate::assignments::assignments_model::*;
use crate::db::get_connection;
use crate::schema::assignments;

/// Repository for the append-only assignment ledger. Rows are only ever
/// inserted; there is no update or delete path.
pub struct AssignmentRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl AssignmentRepository {
    /// Creates a new AssignmentRepository instance
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    /// Appends a ledger entry using the given connection, so the caller can
    /// scope the insert to an open transaction.
    pub fn append_with_conn(
        &self,
        conn: &mut SqliteConnection,
        new_assignment: NewAssignment,
    ) -> Result<Assignment> {
        let mut assignment_db: AssignmentDB = new_assignment.into();
        assignment_db.id = Uuid::new_v4().to_string();

        diesel::insert_into(assignments::table)
            .values(&assignment_db)
            .get_result::<AssignmentDB>(conn)
            .map_err(AssignmentError::from)?
            .try_into()
    }

    /// Retrieves ledger entries, newest first
    pub fn list(&self, limit: Option<i64>) -> Result<Vec<Assignment>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| AssignmentError::DatabaseError(e.to_string()))?;

        let mut query = assignments::table
            .order((assignments::recorded_at.desc(), assignments::id.desc()))
            .into_boxed();

        if let Some(limit) = limit {
            query = query.limit(limit);
        }

        query
            .load::<AssignmentDB>(&mut conn)
            .map_err(AssignmentError::from)?
            .into_iter()
            .map(Assignment::try_from)
            .collect()
    }

    /// Retrieves the ledger history for one asset, newest first
    pub fn history_for_asset(&self, kind: AssetKind, asset_id: &str) -> Result<Vec<Assignment>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| AssignmentError::DatabaseError(e.to_string()))?;

        assignments::table
            .filter(assignments::asset_type.eq(kind.as_str()))
            .filter(assignments::asset_id.eq(asset_id))
            .order((assignments::recorded_at.desc(), assignments::id.desc()))
            .load::<AssignmentDB>(&mut conn)
            .map_err(AssignmentError::from)?
            .into_iter()
            .map(Assignment::try_from)
            .collect()
    }

    /// Retrieves the latest ledger entry for one asset. Ties on
    /// `recorded_at` are broken by the highest id so the result is
    /// deterministic.
    pub fn latest_for_asset_with_conn(
        &self,
        conn: &mut SqliteConnection,
        kind: AssetKind,
        asset_id: &str,
    ) -> Result<Option<AssignmentDB>> {
        assignments::table
            .filter(assignments::asset_type.eq(kind.as_str()))
            .filter(assignments::asset_id.eq(asset_id))
            .order((assignments::recorded_at.desc(), assignments::id.desc()))
            .first::<AssignmentDB>(conn)
            .optional()
            .map_err(AssignmentError::from)
    }

    /// Retrieves the latest ledger entry per asset of the given kind,
    /// keyed by asset id. Used by the ledger-path availability strategy.
    pub fn latest_per_asset(&self, kind: AssetKind) -> Result<HashMap<String, AssignmentDB>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| AssignmentError::DatabaseError(e.to_string()))?;

        let rows = assignments::table
            .filter(assignments::asset_type.eq(kind.as_str()))
            .order((assignments::recorded_at.desc(), assignments::id.desc()))
            .load::<AssignmentDB>(&mut conn)
            .map_err(AssignmentError::from)?;

        // Rows arrive newest first; keep the first one seen per asset.
        let mut latest: HashMap<String, AssignmentDB> = HashMap::new();
        for row in rows {
            latest.entry(row.asset_id.clone()).or_insert(row);
        }
        Ok(latest)
    }

    /// Counts ledger entries, optionally per action
    pub fn count(&self, action: Option<AssignmentAction>) -> Result<i64> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| AssignmentError::DatabaseError(e.to_string()))?;

        let mut query = assignments::table.into_boxed();
        if let Some(action) = action {
            query = query.filter(assignments::action.eq(action.as_str()));
        }

        query
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(AssignmentError::from)
    }
}
