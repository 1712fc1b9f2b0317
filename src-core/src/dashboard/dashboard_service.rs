use std::collections::HashMap;
use std::sync::Arc;

use crate::assets::{AssetKind, ComputerRepository, DeviceRepository, PhoneLineRepository};
use crate::assignments::{AssignmentRepository, TargetKind};
use crate::db::DbPool;
use crate::errors::Result;
use crate::org::OrgRepository;
use crate::users::UserRepository;

use super::dashboard_model::{DashboardSummary, DepartmentSlice, KindCounts};

const RECENT_ACTIVITY_LIMIT: i64 = 10;

/// Aggregates inventory counts and recent ledger activity. Read-only;
/// every figure is derived from the stores the write paths maintain.
pub struct DashboardService {
    pool: Arc<DbPool>,
}

impl DashboardService {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    pub fn summary(&self) -> Result<DashboardSummary> {
        let computers = ComputerRepository::new(self.pool.clone());
        let devices = DeviceRepository::new(self.pool.clone());
        let phone_lines = PhoneLineRepository::new(self.pool.clone());
        let assignments = AssignmentRepository::new(self.pool.clone());
        let users = UserRepository::new(self.pool.clone());
        let org = OrgRepository::new(self.pool.clone());

        let computer_counts = KindCounts::new(computers.count(false)?, computers.count(true)?);
        let device_counts = KindCounts::new(devices.count(false)?, devices.count(true)?);

        // Phone lines have no holder pointers; their assigned count
        // comes from the latest ledger entry per line.
        let line_ledger = assignments.latest_per_asset(AssetKind::PhoneLine)?;
        let lines_assigned = line_ledger
            .values()
            .filter(|record| record.is_assignment())
            .count() as i64;
        let line_counts = KindCounts::new(phone_lines.count()?, lines_assigned);

        let mut held_by_department: HashMap<String, i64> = HashMap::new();
        for computer in computers.list_assigned(None)? {
            if let Some(department_id) = computer.assigned_department_id {
                *held_by_department.entry(department_id).or_insert(0) += 1;
            }
        }
        for device in devices.list_assigned(None)? {
            if let Some(department_id) = device.assigned_department_id {
                *held_by_department.entry(department_id).or_insert(0) += 1;
            }
        }
        for record in line_ledger.values() {
            if record.is_assignment() && record.target_type == TargetKind::Department.as_str() {
                *held_by_department.entry(record.target_id.clone()).or_insert(0) += 1;
            }
        }

        let department_ids: Vec<String> = held_by_department.keys().cloned().collect();
        let department_names = org.department_names_by_ids(&department_ids)?;
        let mut department_distribution: Vec<DepartmentSlice> = held_by_department
            .into_iter()
            .map(|(department_id, assets)| DepartmentSlice {
                department_name: department_names
                    .get(&department_id)
                    .cloned()
                    .unwrap_or_else(|| department_id.clone()),
                department_id,
                assets,
            })
            .collect();
        department_distribution.sort_by(|a, b| {
            b.assets
                .cmp(&a.assets)
                .then_with(|| a.department_name.cmp(&b.department_name))
        });

        Ok(DashboardSummary {
            users: users.count()?,
            departments: org.count_departments()?,
            computers: computer_counts,
            devices: device_counts,
            phone_lines: line_counts,
            department_distribution,
            recent_activity: assignments.list(Some(RECENT_ACTIVITY_LIMIT))?,
        })
    }
}
