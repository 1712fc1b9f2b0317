use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::assignments::TargetKind;

use super::assets_errors::{AssetError, Result};

/// The asset kinds trackable through the assignment lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    Computer,
    Device,
    PhoneLine,
}

impl AssetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Computer => "COMPUTER",
            AssetKind::Device => "DEVICE",
            AssetKind::PhoneLine => "PHONE_LINE",
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "COMPUTER" => Ok(AssetKind::Computer),
            "DEVICE" => Ok(AssetKind::Device),
            "PHONE_LINE" => Ok(AssetKind::PhoneLine),
            other => Err(AssetError::InvalidData(format!(
                "Unknown asset kind: {}",
                other
            ))),
        }
    }

    /// Computers and devices carry denormalized holder pointers; phone
    /// lines are classified from the ledger alone.
    pub fn has_holder_pointers(&self) -> bool {
        !matches!(self, AssetKind::PhoneLine)
    }
}

/// A polymorphic reference to a single asset record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetRef {
    Computer(String),
    Device(String),
    PhoneLine(String),
}

impl AssetRef {
    pub fn new(kind: AssetKind, id: impl Into<String>) -> Self {
        match kind {
            AssetKind::Computer => AssetRef::Computer(id.into()),
            AssetKind::Device => AssetRef::Device(id.into()),
            AssetKind::PhoneLine => AssetRef::PhoneLine(id.into()),
        }
    }

    pub fn kind(&self) -> AssetKind {
        match self {
            AssetRef::Computer(_) => AssetKind::Computer,
            AssetRef::Device(_) => AssetKind::Device,
            AssetRef::PhoneLine(_) => AssetKind::PhoneLine,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            AssetRef::Computer(id) | AssetRef::Device(id) | AssetRef::PhoneLine(id) => id,
        }
    }
}

/// Lifecycle state of a computer or device. `UnderRepair` and
/// `Decommissioned` are set through the normal update path, outside the
/// assign/return cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetState {
    InStorage,
    Assigned,
    UnderRepair,
    Decommissioned,
}

impl AssetState {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetState::InStorage => "IN_STORAGE",
            AssetState::Assigned => "ASSIGNED",
            AssetState::UnderRepair => "UNDER_REPAIR",
            AssetState::Decommissioned => "DECOMMISSIONED",
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "IN_STORAGE" => Ok(AssetState::InStorage),
            "ASSIGNED" => Ok(AssetState::Assigned),
            "UNDER_REPAIR" => Ok(AssetState::UnderRepair),
            "DECOMMISSIONED" => Ok(AssetState::Decommissioned),
            other => Err(AssetError::InvalidData(format!(
                "Unknown asset state: {}",
                other
            ))),
        }
    }
}

/// Domain model for a computer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Computer {
    pub id: String,
    pub serial_number: String,
    pub model_id: String,
    pub state: AssetState,
    pub assigned_user_id: Option<String>,
    pub assigned_department_id: Option<String>,
    pub lock_version: i32,
    pub cpu: Option<String>,
    pub ram: Option<String>,
    pub storage: Option<String>,
    pub charger_serial: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new computer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComputer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub serial_number: String,
    pub model_id: String,
    pub cpu: Option<String>,
    pub ram: Option<String>,
    pub storage: Option<String>,
    pub charger_serial: Option<String>,
    pub notes: Option<String>,
}

impl NewComputer {
    pub fn validate(&self) -> Result<()> {
        if self.serial_number.trim().is_empty() {
            return Err(AssetError::InvalidData(
                "Serial number cannot be empty".to_string(),
            ));
        }
        if self.model_id.trim().is_empty() {
            return Err(AssetError::InvalidData(
                "Model id cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Input model for updating a computer. Holder pointers and the lock
/// version are owned by the transition service and cannot be set here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputerUpdate {
    #[serde(default)]
    pub id: String,
    pub serial_number: String,
    pub model_id: String,
    pub state: Option<AssetState>,
    pub cpu: Option<String>,
    pub ram: Option<String>,
    pub storage: Option<String>,
    pub charger_serial: Option<String>,
    pub notes: Option<String>,
}

impl ComputerUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(AssetError::InvalidData(
                "Computer id is required for updates".to_string(),
            ));
        }
        if self.serial_number.trim().is_empty() {
            return Err(AssetError::InvalidData(
                "Serial number cannot be empty".to_string(),
            ));
        }
        if self.state == Some(AssetState::Assigned) {
            return Err(AssetError::InvalidData(
                "The assigned state can only be set by an assignment".to_string(),
            ));
        }
        Ok(())
    }
}

/// Database model for computers
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::computers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ComputerDB {
    pub id: String,
    pub serial_number: String,
    pub model_id: String,
    pub state: String,
    pub assigned_user_id: Option<String>,
    pub assigned_department_id: Option<String>,
    pub lock_version: i32,
    pub cpu: Option<String>,
    pub ram: Option<String>,
    pub storage: Option<String>,
    pub charger_serial: Option<String>,
    pub notes: Option<String>,
    #[diesel(skip_insertion)]
    pub created_at: NaiveDateTime,
    #[diesel(skip_insertion)]
    pub updated_at: NaiveDateTime,
}

impl TryFrom<ComputerDB> for Computer {
    type Error = AssetError;

    fn try_from(db: ComputerDB) -> Result<Self> {
        Ok(Self {
            state: AssetState::parse(&db.state)?,
            id: db.id,
            serial_number: db.serial_number,
            model_id: db.model_id,
            assigned_user_id: db.assigned_user_id,
            assigned_department_id: db.assigned_department_id,
            lock_version: db.lock_version,
            cpu: db.cpu,
            ram: db.ram,
            storage: db.storage,
            charger_serial: db.charger_serial,
            notes: db.notes,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

impl From<NewComputer> for ComputerDB {
    fn from(domain: NewComputer) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: domain.id.unwrap_or_default(),
            serial_number: domain.serial_number,
            model_id: domain.model_id,
            state: AssetState::InStorage.as_str().to_string(),
            assigned_user_id: None,
            assigned_department_id: None,
            lock_version: 0,
            cpu: domain.cpu,
            ram: domain.ram,
            storage: domain.storage,
            charger_serial: domain.charger_serial,
            notes: domain.notes,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Domain model for a peripheral device
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: String,
    pub serial_number: String,
    pub model_id: String,
    pub state: AssetState,
    pub assigned_user_id: Option<String>,
    pub assigned_department_id: Option<String>,
    pub lock_version: i32,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new device
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDevice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub serial_number: String,
    pub model_id: String,
    pub notes: Option<String>,
}

impl NewDevice {
    pub fn validate(&self) -> Result<()> {
        if self.serial_number.trim().is_empty() {
            return Err(AssetError::InvalidData(
                "Serial number cannot be empty".to_string(),
            ));
        }
        if self.model_id.trim().is_empty() {
            return Err(AssetError::InvalidData(
                "Model id cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Input model for updating a device
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceUpdate {
    #[serde(default)]
    pub id: String,
    pub serial_number: String,
    pub model_id: String,
    pub state: Option<AssetState>,
    pub notes: Option<String>,
}

impl DeviceUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(AssetError::InvalidData(
                "Device id is required for updates".to_string(),
            ));
        }
        if self.serial_number.trim().is_empty() {
            return Err(AssetError::InvalidData(
                "Serial number cannot be empty".to_string(),
            ));
        }
        if self.state == Some(AssetState::Assigned) {
            return Err(AssetError::InvalidData(
                "The assigned state can only be set by an assignment".to_string(),
            ));
        }
        Ok(())
    }
}

/// Database model for devices
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::devices)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DeviceDB {
    pub id: String,
    pub serial_number: String,
    pub model_id: String,
    pub state: String,
    pub assigned_user_id: Option<String>,
    pub assigned_department_id: Option<String>,
    pub lock_version: i32,
    pub notes: Option<String>,
    #[diesel(skip_insertion)]
    pub created_at: NaiveDateTime,
    #[diesel(skip_insertion)]
    pub updated_at: NaiveDateTime,
}

impl TryFrom<DeviceDB> for Device {
    type Error = AssetError;

    fn try_from(db: DeviceDB) -> Result<Self> {
        Ok(Self {
            state: AssetState::parse(&db.state)?,
            id: db.id,
            serial_number: db.serial_number,
            model_id: db.model_id,
            assigned_user_id: db.assigned_user_id,
            assigned_department_id: db.assigned_department_id,
            lock_version: db.lock_version,
            notes: db.notes,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

impl From<NewDevice> for DeviceDB {
    fn from(domain: NewDevice) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: domain.id.unwrap_or_default(),
            serial_number: domain.serial_number,
            model_id: domain.model_id,
            state: AssetState::InStorage.as_str().to_string(),
            assigned_user_id: None,
            assigned_department_id: None,
            lock_version: 0,
            notes: domain.notes,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Domain model for a phone line. Lines carry no denormalized holder
/// pointers; their assignment state lives in the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneLine {
    pub id: String,
    pub line_number: String,
    pub provider: String,
    pub sim_serial: Option<String>,
    pub plan: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new phone line
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPhoneLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub line_number: String,
    pub provider: String,
    pub sim_serial: Option<String>,
    pub plan: Option<String>,
    pub notes: Option<String>,
}

impl NewPhoneLine {
    pub fn validate(&self) -> Result<()> {
        if self.line_number.trim().is_empty() {
            return Err(AssetError::InvalidData(
                "Line number cannot be empty".to_string(),
            ));
        }
        if self.provider.trim().is_empty() {
            return Err(AssetError::InvalidData(
                "Provider cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Input model for updating a phone line
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneLineUpdate {
    #[serde(default)]
    pub id: String,
    pub line_number: String,
    pub provider: String,
    pub sim_serial: Option<String>,
    pub plan: Option<String>,
    pub notes: Option<String>,
}

impl PhoneLineUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(AssetError::InvalidData(
                "Phone line id is required for updates".to_string(),
            ));
        }
        if self.line_number.trim().is_empty() {
            return Err(AssetError::InvalidData(
                "Line number cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Database model for phone lines
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::phone_lines)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PhoneLineDB {
    pub id: String,
    pub line_number: String,
    pub provider: String,
    pub sim_serial: Option<String>,
    pub plan: Option<String>,
    pub notes: Option<String>,
    #[diesel(skip_insertion)]
    pub created_at: NaiveDateTime,
    #[diesel(skip_insertion)]
    pub updated_at: NaiveDateTime,
}

impl From<PhoneLineDB> for PhoneLine {
    fn from(db: PhoneLineDB) -> Self {
        Self {
            id: db.id,
            line_number: db.line_number,
            provider: db.provider,
            sim_serial: db.sim_serial,
            plan: db.plan,
            notes: db.notes,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<NewPhoneLine> for PhoneLineDB {
    fn from(domain: NewPhoneLine) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: domain.id.unwrap_or_default(),
            line_number: domain.line_number,
            provider: domain.provider,
            sim_serial: domain.sim_serial,
            plan: domain.plan,
            notes: domain.notes,
            created_at: now,
            updated_at: now,
        }
    }
}

/// The current holder of an assigned asset, resolved to a readable name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolderSummary {
    pub target_type: TargetKind,
    pub target_id: String,
    pub name: String,
}

/// A classified asset as returned by the availability queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetSummary {
    pub id: String,
    pub kind: AssetKind,
    /// Serial number for computers/devices, line number for phone lines.
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<AssetState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holder: Option<HolderSummary>,
}

/// Filter dimensions for the availability queries.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetFilter {
    pub kind: Option<AssetKind>,
    pub model_id: Option<String>,
    pub provider: Option<String>,
}

impl AssetFilter {
    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.model_id.is_none() && self.provider.is_none()
    }
}

/// Requested classification for `GET /api/assets`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AvailabilityState {
    Assigned,
    Available,
}

/// Query for the asset classification endpoint. At least one of the
/// recognized dimensions (state, model, provider) must be present.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetQuery {
    pub state: Option<AvailabilityState>,
    pub kind: Option<AssetKind>,
    pub model_id: Option<String>,
    pub provider: Option<String>,
}

impl AssetQuery {
    pub fn filter(&self) -> AssetFilter {
        AssetFilter {
            kind: self.kind,
            model_id: self.model_id.clone(),
            provider: self.provider.clone(),
        }
    }
}
