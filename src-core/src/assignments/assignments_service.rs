use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use log::debug;
use std::sync::Arc;

use crate::assets::{AssetKind, AssetRef, AssetState};
use crate::db::{DbPool, DbTransactionExecutor};
use crate::schema::{computers, departments, devices, phone_lines, users};

use super::assignments_errors::{AssignmentError, Result};
use super::assignments_model::*;
use super::assignments_repository::AssignmentRepository;
use super::assignments_traits::AssignmentServiceTrait;

/// The single authorized write path for holder changes.
///
/// Each assign/unassign mutates the asset row (where one exists) and
/// appends exactly one ledger entry, inside one transaction. No other
/// code path may touch holder pointers, the assigned state or the lock
/// version.
pub struct AssignmentService {
    pool: Arc<DbPool>,
    repository: AssignmentRepository,
}

impl AssignmentService {
    /// Creates a new AssignmentService instance
    pub fn new(pool: Arc<DbPool>) -> Self {
        let repository = AssignmentRepository::new(pool.clone());
        Self { pool, repository }
    }

    /// Assigns an asset to a user or a department.
    ///
    /// Rejects with `AlreadyAssigned` when the asset currently has a
    /// holder; the caller must unassign first.
    pub fn assign(
        &self,
        asset: AssetRef,
        target: TargetRef,
        notes: Option<String>,
        delivery: Option<DeliveryMetadata>,
    ) -> Result<Assignment> {
        debug!(
            "Assigning {} {} to {} {}",
            asset.kind().as_str(),
            asset.id(),
            target.kind().as_str(),
            target.id()
        );

        self.pool.execute(|conn| {
            let target_label = resolve_target_label(conn, &target)?;

            match &asset {
                AssetRef::Computer(id) => claim_computer(conn, id, &target)?,
                AssetRef::Device(id) => claim_device(conn, id, &target)?,
                AssetRef::PhoneLine(id) => self.claim_phone_line(conn, id)?,
            }

            self.repository.append_with_conn(
                conn,
                NewAssignment {
                    asset: asset.clone(),
                    action: AssignmentAction::Assignment,
                    target: target.clone(),
                    target_label,
                    notes: notes.clone(),
                    delivery: delivery.clone(),
                },
            )
        })
    }

    /// Returns an asset to storage.
    ///
    /// The appended Return entry records the holder that was cleared.
    /// Rejects with `NotAssigned` when the asset has no current holder,
    /// so the ledger never carries sentinel-target no-op entries.
    pub fn unassign(&self, asset: AssetRef, notes: Option<String>) -> Result<Assignment> {
        debug!("Unassigning {} {}", asset.kind().as_str(), asset.id());

        self.pool.execute(|conn| {
            let prior = match &asset {
                AssetRef::Computer(id) => release_computer(conn, id)?,
                AssetRef::Device(id) => release_device(conn, id)?,
                AssetRef::PhoneLine(id) => self.release_phone_line(conn, id)?,
            };

            self.repository.append_with_conn(
                conn,
                NewAssignment {
                    asset: asset.clone(),
                    action: AssignmentAction::Return,
                    target: prior.target,
                    target_label: prior.label,
                    notes: notes.clone(),
                    delivery: None,
                },
            )
        })
    }

    /// Validates and dispatches a wire request
    pub fn apply(&self, request: AssignmentRequest) -> Result<Assignment> {
        let target = request.validate()?;
        let asset = AssetRef::new(request.item_type, request.item_id.clone());

        match request.action {
            RequestedAction::Assign => {
                // validate() guarantees a target for assign actions
                let target = target.ok_or_else(|| {
                    AssignmentError::InvalidData("Missing target for assign action".to_string())
                })?;
                self.assign(asset, target, request.notes, request.delivery)
            }
            RequestedAction::Unassign => self.unassign(asset, request.notes),
        }
    }

    /// Retrieves ledger entries, newest first
    pub fn list_assignments(&self, limit: Option<i64>) -> Result<Vec<Assignment>> {
        self.repository.list(limit)
    }

    /// Retrieves one asset's ledger history, newest first
    pub fn history_for_asset(&self, kind: AssetKind, asset_id: &str) -> Result<Vec<Assignment>> {
        self.repository.history_for_asset(kind, asset_id)
    }

    /// Phone lines carry no holder pointers; the current holder is the
    /// latest ledger entry, checked inside the open transaction.
    fn claim_phone_line(&self, conn: &mut SqliteConnection, line_id: &str) -> Result<()> {
        let exists: Option<String> = phone_lines::table
            .find(line_id)
            .select(phone_lines::id)
            .first::<String>(conn)
            .optional()?;
        if exists.is_none() {
            return Err(AssignmentError::NotFound(format!(
                "Phone line with id {} not found",
                line_id
            )));
        }

        let latest =
            self.repository
                .latest_for_asset_with_conn(conn, AssetKind::PhoneLine, line_id)?;
        if latest.map(|record| record.is_assignment()).unwrap_or(false) {
            return Err(AssignmentError::AlreadyAssigned(format!(
                "Phone line {} is already assigned",
                line_id
            )));
        }

        Ok(())
    }

    fn release_phone_line(
        &self,
        conn: &mut SqliteConnection,
        line_id: &str,
    ) -> Result<PriorHolder> {
        let exists: Option<String> = phone_lines::table
            .find(line_id)
            .select(phone_lines::id)
            .first::<String>(conn)
            .optional()?;
        if exists.is_none() {
            return Err(AssignmentError::NotFound(format!(
                "Phone line with id {} not found",
                line_id
            )));
        }

        let latest =
            self.repository
                .latest_for_asset_with_conn(conn, AssetKind::PhoneLine, line_id)?;
        match latest {
            Some(record) if record.is_assignment() => Ok(PriorHolder {
                target: TargetRef::new(TargetKind::parse(&record.target_type)?, record.target_id),
                label: record.target_label,
            }),
            _ => Err(AssignmentError::NotAssigned(format!(
                "Phone line {} has no current holder",
                line_id
            ))),
        }
    }
}

impl AssignmentServiceTrait for AssignmentService {
    fn assign(
        &self,
        asset: AssetRef,
        target: TargetRef,
        notes: Option<String>,
        delivery: Option<DeliveryMetadata>,
    ) -> Result<Assignment> {
        AssignmentService::assign(self, asset, target, notes, delivery)
    }

    fn unassign(&self, asset: AssetRef, notes: Option<String>) -> Result<Assignment> {
        AssignmentService::unassign(self, asset, notes)
    }

    fn apply(&self, request: AssignmentRequest) -> Result<Assignment> {
        AssignmentService::apply(self, request)
    }

    fn list_assignments(&self, limit: Option<i64>) -> Result<Vec<Assignment>> {
        AssignmentService::list_assignments(self, limit)
    }

    fn history_for_asset(&self, kind: AssetKind, asset_id: &str) -> Result<Vec<Assignment>> {
        AssignmentService::history_for_asset(self, kind, asset_id)
    }
}

/// The holder recorded on a Return entry
struct PriorHolder {
    target: TargetRef,
    label: String,
}

/// Resolves the human-readable label for a target, verifying it exists
fn resolve_target_label(conn: &mut SqliteConnection, target: &TargetRef) -> Result<String> {
    match target {
        TargetRef::User(id) => users::table
            .find(id)
            .select((users::first_name, users::last_name))
            .first::<(String, String)>(conn)
            .optional()?
            .map(|(first, last)| format!("{} {}", first, last))
            .ok_or_else(|| AssignmentError::NotFound(format!("User with id {} not found", id))),
        TargetRef::Department(id) => department_label(conn, id),
    }
}

fn department_label(conn: &mut SqliteConnection, id: &str) -> Result<String> {
    departments::table
        .find(id)
        .select(departments::name)
        .first::<String>(conn)
        .optional()?
        .ok_or_else(|| AssignmentError::NotFound(format!("Department with id {} not found", id)))
}

fn claim_computer(conn: &mut SqliteConnection, computer_id: &str, target: &TargetRef) -> Result<()> {
    let row: Option<(Option<String>, Option<String>, i32, String)> = computers::table
        .find(computer_id)
        .select((
            computers::assigned_user_id,
            computers::assigned_department_id,
            computers::lock_version,
            computers::serial_number,
        ))
        .first(conn)
        .optional()?;

    let (user_ptr, department_ptr, seen_version, serial) = row.ok_or_else(|| {
        AssignmentError::NotFound(format!("Computer with id {} not found", computer_id))
    })?;

    if user_ptr.is_some() || department_ptr.is_some() {
        return Err(AssignmentError::AlreadyAssigned(format!(
            "Computer {} is already assigned",
            serial
        )));
    }

    let (new_user_ptr, new_department_ptr) = pointer_pair(target);
    let affected = diesel::update(
        computers::table
            .find(computer_id)
            .filter(computers::lock_version.eq(seen_version)),
    )
    .set((
        computers::assigned_user_id.eq(new_user_ptr),
        computers::assigned_department_id.eq(new_department_ptr),
        computers::state.eq(AssetState::Assigned.as_str()),
        computers::lock_version.eq(seen_version + 1),
        computers::updated_at.eq(chrono::Utc::now().naive_utc()),
    ))
    .execute(conn)?;

    if affected == 0 {
        return Err(AssignmentError::ConcurrentModification(format!(
            "Computer {} was modified concurrently",
            serial
        )));
    }

    Ok(())
}

fn release_computer(conn: &mut SqliteConnection, computer_id: &str) -> Result<PriorHolder> {
    let row: Option<(Option<String>, Option<String>, i32, String)> = computers::table
        .find(computer_id)
        .select((
            computers::assigned_user_id,
            computers::assigned_department_id,
            computers::lock_version,
            computers::serial_number,
        ))
        .first(conn)
        .optional()?;

    let (user_ptr, department_ptr, seen_version, serial) = row.ok_or_else(|| {
        AssignmentError::NotFound(format!("Computer with id {} not found", computer_id))
    })?;

    let prior = prior_holder(conn, user_ptr, department_ptr).ok_or_else(|| {
        AssignmentError::NotAssigned(format!("Computer {} has no current holder", serial))
    })??;

    let affected = diesel::update(
        computers::table
            .find(computer_id)
            .filter(computers::lock_version.eq(seen_version)),
    )
    .set((
        computers::assigned_user_id.eq(None::<String>),
        computers::assigned_department_id.eq(None::<String>),
        computers::state.eq(AssetState::InStorage.as_str()),
        computers::lock_version.eq(seen_version + 1),
        computers::updated_at.eq(chrono::Utc::now().naive_utc()),
    ))
    .execute(conn)?;

    if affected == 0 {
        return Err(AssignmentError::ConcurrentModification(format!(
            "Computer {} was modified concurrently",
            serial
        )));
    }

    Ok(prior)
}

fn claim_device(conn: &mut SqliteConnection, device_id: &str, target: &TargetRef) -> Result<()> {
    let row: Option<(Option<String>, Option<String>, i32, String)> = devices::table
        .find(device_id)
        .select((
            devices::assigned_user_id,
            devices::assigned_department_id,
            devices::lock_version,
            devices::serial_number,
        ))
        .first(conn)
        .optional()?;

    let (user_ptr, department_ptr, seen_version, serial) = row.ok_or_else(|| {
        AssignmentError::NotFound(format!("Device with id {} not found", device_id))
    })?;

    if user_ptr.is_some() || department_ptr.is_some() {
        return Err(AssignmentError::AlreadyAssigned(format!(
            "Device {} is already assigned",
            serial
        )));
    }

    let (new_user_ptr, new_department_ptr) = pointer_pair(target);
    let affected = diesel::update(
        devices::table
            .find(device_id)
            .filter(devices::lock_version.eq(seen_version)),
    )
    .set((
        devices::assigned_user_id.eq(new_user_ptr),
        devices::assigned_department_id.eq(new_department_ptr),
        devices::state.eq(AssetState::Assigned.as_str()),
        devices::lock_version.eq(seen_version + 1),
        devices::updated_at.eq(chrono::Utc::now().naive_utc()),
    ))
    .execute(conn)?;

    if affected == 0 {
        return Err(AssignmentError::ConcurrentModification(format!(
            "Device {} was modified concurrently",
            serial
        )));
    }

    Ok(())
}

fn release_device(conn: &mut SqliteConnection, device_id: &str) -> Result<PriorHolder> {
    let row: Option<(Option<String>, Option<String>, i32, String)> = devices::table
        .find(device_id)
        .select((
            devices::assigned_user_id,
            devices::assigned_department_id,
            devices::lock_version,
            devices::serial_number,
        ))
        .first(conn)
        .optional()?;

    let (user_ptr, department_ptr, seen_version, serial) = row.ok_or_else(|| {
        AssignmentError::NotFound(format!("Device with id {} not found", device_id))
    })?;

    let prior = prior_holder(conn, user_ptr, department_ptr).ok_or_else(|| {
        AssignmentError::NotAssigned(format!("Device {} has no current holder", serial))
    })??;

    let affected = diesel::update(
        devices::table
            .find(device_id)
            .filter(devices::lock_version.eq(seen_version)),
    )
    .set((
        devices::assigned_user_id.eq(None::<String>),
        devices::assigned_department_id.eq(None::<String>),
        devices::state.eq(AssetState::InStorage.as_str()),
        devices::lock_version.eq(seen_version + 1),
        devices::updated_at.eq(chrono::Utc::now().naive_utc()),
    ))
    .execute(conn)?;

    if affected == 0 {
        return Err(AssignmentError::ConcurrentModification(format!(
            "Device {} was modified concurrently",
            serial
        )));
    }

    Ok(prior)
}

fn pointer_pair(target: &TargetRef) -> (Option<String>, Option<String>) {
    match target {
        TargetRef::User(id) => (Some(id.clone()), None),
        TargetRef::Department(id) => (None, Some(id.clone())),
    }
}

/// Resolves the current holder from a pointer pair, labeled
fn prior_holder(
    conn: &mut SqliteConnection,
    user_ptr: Option<String>,
    department_ptr: Option<String>,
) -> Option<Result<PriorHolder>> {
    let target = if let Some(user_id) = user_ptr {
        TargetRef::User(user_id)
    } else if let Some(department_id) = department_ptr {
        TargetRef::Department(department_id)
    } else {
        return None;
    };

    Some(resolve_target_label(conn, &target).map(|label| PriorHolder { target, label }))
}
