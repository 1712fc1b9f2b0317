use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use log::debug;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::assignments::{AssignmentDB, AssignmentRepository, TargetKind};
use crate::org::OrgRepository;
use crate::users::UserRepository;

use super::assets_errors::{AssetError, Result};
use super::assets_model::*;
use super::assets_repository::{ComputerRepository, DeviceRepository, PhoneLineRepository};
use super::assets_traits::AssetResolverTrait;

/// Read-side classification of assets as available or assigned.
///
/// Computers and devices are classified from their denormalized holder
/// pointers; phone lines from the latest ledger entry per line. The
/// strategy per kind is fixed here rather than scattered across call
/// sites.
pub struct AssetResolver {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl AssetResolver {
    /// Creates a new AssetResolver instance
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    /// Answers `GET /api/assets`. At least one of state, model or
    /// provider must be supplied.
    pub fn search(&self, query: AssetQuery) -> Result<Vec<AssetSummary>> {
        if query.state.is_none() && query.model_id.is_none() && query.provider.is_none() {
            return Err(AssetError::InvalidFilter(
                "At least one of state, modelId or provider is required".to_string(),
            ));
        }

        let filter = query.filter();
        match query.state {
            Some(AvailabilityState::Assigned) => self.list_assigned(&filter),
            // A bare model/provider filter asks for available stock.
            Some(AvailabilityState::Available) | None => self.list_available(&filter),
        }
    }

    /// Lists assets with no current holder
    pub fn list_available(&self, filter: &AssetFilter) -> Result<Vec<AssetSummary>> {
        debug!("Listing available assets, filter: {:?}", filter);

        let mut summaries = Vec::new();
        for kind in Self::kinds_for(filter) {
            match kind {
                AssetKind::Computer => {
                    let computers = ComputerRepository::new(self.pool.clone())
                        .list_available(filter.model_id.as_deref())?;
                    summaries.extend(computers.into_iter().map(|c| computer_summary(c, None)));
                }
                AssetKind::Device => {
                    let devices = DeviceRepository::new(self.pool.clone())
                        .list_available(filter.model_id.as_deref())?;
                    summaries.extend(devices.into_iter().map(|d| device_summary(d, None)));
                }
                AssetKind::PhoneLine => {
                    let lines = PhoneLineRepository::new(self.pool.clone())
                        .list(filter.provider.as_deref())?;
                    let latest = self.latest_ledger_entries()?;
                    summaries.extend(
                        lines
                            .into_iter()
                            .filter(|line| {
                                latest
                                    .get(&line.id)
                                    .map(|record| !record.is_assignment())
                                    .unwrap_or(true)
                            })
                            .map(|line| phone_line_summary(line, None)),
                    );
                }
            }
        }
        Ok(summaries)
    }

    /// Lists assets with a current holder, annotated with a readable
    /// holder label
    pub fn list_assigned(&self, filter: &AssetFilter) -> Result<Vec<AssetSummary>> {
        debug!("Listing assigned assets, filter: {:?}", filter);

        let mut summaries = Vec::new();
        let mut user_ids: HashSet<String> = HashSet::new();
        let mut department_ids: HashSet<String> = HashSet::new();

        let mut computers = Vec::new();
        let mut devices = Vec::new();
        let mut assigned_lines = Vec::new();

        for kind in Self::kinds_for(filter) {
            match kind {
                AssetKind::Computer => {
                    computers = ComputerRepository::new(self.pool.clone())
                        .list_assigned(filter.model_id.as_deref())?;
                    for computer in &computers {
                        if let Some(id) = &computer.assigned_user_id {
                            user_ids.insert(id.clone());
                        }
                        if let Some(id) = &computer.assigned_department_id {
                            department_ids.insert(id.clone());
                        }
                    }
                }
                AssetKind::Device => {
                    devices = DeviceRepository::new(self.pool.clone())
                        .list_assigned(filter.model_id.as_deref())?;
                    for device in &devices {
                        if let Some(id) = &device.assigned_user_id {
                            user_ids.insert(id.clone());
                        }
                        if let Some(id) = &device.assigned_department_id {
                            department_ids.insert(id.clone());
                        }
                    }
                }
                AssetKind::PhoneLine => {
                    let lines = PhoneLineRepository::new(self.pool.clone())
                        .list(filter.provider.as_deref())?;
                    let latest = self.latest_ledger_entries()?;
                    for line in lines {
                        if let Some(record) = latest.get(&line.id) {
                            if record.is_assignment() {
                                match record.target_type.as_str() {
                                    "USER" => user_ids.insert(record.target_id.clone()),
                                    _ => department_ids.insert(record.target_id.clone()),
                                };
                                assigned_lines.push((line, record.clone()));
                            }
                        }
                    }
                }
            }
        }

        let user_ids: Vec<String> = user_ids.into_iter().collect();
        let department_ids: Vec<String> = department_ids.into_iter().collect();
        let user_names = UserRepository::new(self.pool.clone())
            .full_names_by_ids(&user_ids)
            .map_err(|e| AssetError::DatabaseError(e.to_string()))?;
        let department_names = OrgRepository::new(self.pool.clone())
            .department_names_by_ids(&department_ids)
            .map_err(|e| AssetError::DatabaseError(e.to_string()))?;

        for computer in computers {
            let holder =
                pointer_holder(
                    computer.assigned_user_id.clone(),
                    computer.assigned_department_id.clone(),
                    &user_names,
                    &department_names,
                );
            summaries.push(computer_summary(computer, holder));
        }
        for device in devices {
            let holder = pointer_holder(
                device.assigned_user_id.clone(),
                device.assigned_department_id.clone(),
                &user_names,
                &department_names,
            );
            summaries.push(device_summary(device, holder));
        }
        for (line, record) in assigned_lines {
            let holder = ledger_holder(&record, &user_names, &department_names)?;
            summaries.push(phone_line_summary(line, Some(holder)));
        }

        Ok(summaries)
    }

    /// Latest ledger entry per phone line, newest wins
    fn latest_ledger_entries(&self) -> Result<HashMap<String, AssignmentDB>> {
        AssignmentRepository::new(self.pool.clone())
            .latest_per_asset(AssetKind::PhoneLine)
            .map_err(|e| AssetError::DatabaseError(e.to_string()))
    }

    fn kinds_for(filter: &AssetFilter) -> Vec<AssetKind> {
        if let Some(kind) = filter.kind {
            return vec![kind];
        }
        if filter.provider.is_some() {
            return vec![AssetKind::PhoneLine];
        }
        if filter.model_id.is_some() {
            return vec![AssetKind::Computer, AssetKind::Device];
        }
        vec![AssetKind::Computer, AssetKind::Device, AssetKind::PhoneLine]
    }
}

impl AssetResolverTrait for AssetResolver {
    fn search(&self, query: AssetQuery) -> Result<Vec<AssetSummary>> {
        AssetResolver::search(self, query)
    }

    fn list_available(&self, filter: &AssetFilter) -> Result<Vec<AssetSummary>> {
        AssetResolver::list_available(self, filter)
    }

    fn list_assigned(&self, filter: &AssetFilter) -> Result<Vec<AssetSummary>> {
        AssetResolver::list_assigned(self, filter)
    }
}

fn computer_summary(computer: Computer, holder: Option<HolderSummary>) -> AssetSummary {
    AssetSummary {
        id: computer.id,
        kind: AssetKind::Computer,
        label: computer.serial_number,
        model_id: Some(computer.model_id),
        provider: None,
        state: Some(computer.state),
        holder,
    }
}

fn device_summary(device: Device, holder: Option<HolderSummary>) -> AssetSummary {
    AssetSummary {
        id: device.id,
        kind: AssetKind::Device,
        label: device.serial_number,
        model_id: Some(device.model_id),
        provider: None,
        state: Some(device.state),
        holder,
    }
}

fn phone_line_summary(line: PhoneLine, holder: Option<HolderSummary>) -> AssetSummary {
    AssetSummary {
        id: line.id,
        kind: AssetKind::PhoneLine,
        label: line.line_number,
        model_id: None,
        provider: Some(line.provider),
        state: None,
        holder,
    }
}

fn pointer_holder(
    assigned_user_id: Option<String>,
    assigned_department_id: Option<String>,
    user_names: &HashMap<String, String>,
    department_names: &HashMap<String, String>,
) -> Option<HolderSummary> {
    if let Some(user_id) = assigned_user_id {
        let name = user_names.get(&user_id).cloned().unwrap_or_default();
        return Some(HolderSummary {
            target_type: TargetKind::User,
            target_id: user_id,
            name,
        });
    }
    if let Some(department_id) = assigned_department_id {
        let name = department_names
            .get(&department_id)
            .cloned()
            .unwrap_or_default();
        return Some(HolderSummary {
            target_type: TargetKind::Department,
            target_id: department_id,
            name,
        });
    }
    None
}

fn ledger_holder(
    record: &AssignmentDB,
    user_names: &HashMap<String, String>,
    department_names: &HashMap<String, String>,
) -> Result<HolderSummary> {
    let target_type = TargetKind::parse(&record.target_type)
        .map_err(|e| AssetError::InvalidData(e.to_string()))?;
    // Prefer the live name; fall back to the label captured when the
    // assignment was recorded (the holder may have been deleted since).
    let name = match target_type {
        TargetKind::User => user_names.get(&record.target_id),
        TargetKind::Department => department_names.get(&record.target_id),
    }
    .cloned()
    .unwrap_or_else(|| record.target_label.clone());

    Ok(HolderSummary {
        target_type,
        target_id: record.target_id.clone(),
        name,
    })
}
