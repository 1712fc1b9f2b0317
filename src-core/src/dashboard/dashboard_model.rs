use serde::Serialize;

use crate::assignments::Assignment;

/// Total/assigned/available counts for one asset kind
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KindCounts {
    pub total: i64,
    pub assigned: i64,
    pub available: i64,
}

impl KindCounts {
    pub fn new(total: i64, assigned: i64) -> Self {
        Self {
            total,
            assigned,
            available: total - assigned,
        }
    }
}

/// Number of assets currently held by one department
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentSlice {
    pub department_id: String,
    pub department_name: String,
    pub assets: i64,
}

/// Read-side aggregate served by `GET /api/dashboard`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub users: i64,
    pub departments: i64,
    pub computers: KindCounts,
    pub devices: KindCounts,
    pub phone_lines: KindCounts,
    pub department_distribution: Vec<DepartmentSlice>,
    pub recent_activity: Vec<Assignment>,
}
