use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::assets::{AssetKind, AssetRef};
use crate::assignments::assignments_errors::AssignmentError;

use super::assignments_errors::Result;

/// The kind of entity that can hold an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetKind {
    User,
    Department,
}

impl TargetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::User => "USER",
            TargetKind::Department => "DEPARTMENT",
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "USER" => Ok(TargetKind::User),
            "DEPARTMENT" => Ok(TargetKind::Department),
            other => Err(AssignmentError::InvalidData(format!(
                "Unknown target type: {}",
                other
            ))),
        }
    }
}

/// A polymorphic reference to the holder of an asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetRef {
    User(String),
    Department(String),
}

impl TargetRef {
    pub fn new(kind: TargetKind, id: impl Into<String>) -> Self {
        match kind {
            TargetKind::User => TargetRef::User(id.into()),
            TargetKind::Department => TargetRef::Department(id.into()),
        }
    }

    pub fn kind(&self) -> TargetKind {
        match self {
            TargetRef::User(_) => TargetKind::User,
            TargetRef::Department(_) => TargetKind::Department,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            TargetRef::User(id) | TargetRef::Department(id) => id,
        }
    }
}

/// The two ledger event kinds. A Return records who *was* holding the
/// asset, not a new holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssignmentAction {
    Assignment,
    Return,
}

impl AssignmentAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentAction::Assignment => "ASSIGNMENT",
            AssignmentAction::Return => "RETURN",
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "ASSIGNMENT" => Ok(AssignmentAction::Assignment),
            "RETURN" => Ok(AssignmentAction::Return),
            other => Err(AssignmentError::InvalidData(format!(
                "Unknown assignment action: {}",
                other
            ))),
        }
    }
}

/// Optional delivery-note details captured alongside an assignment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryMetadata {
    pub manager_name: Option<String>,
    pub reason: Option<String>,
    pub locality: Option<String>,
    pub charger_model: Option<String>,
    pub charger_serial: Option<String>,
}

impl DeliveryMetadata {
    pub fn is_empty(&self) -> bool {
        self.manager_name.is_none()
            && self.reason.is_none()
            && self.locality.is_none()
            && self.charger_model.is_none()
            && self.charger_serial.is_none()
    }
}

/// Domain model for a ledger entry. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: String,
    pub asset_id: String,
    pub asset_type: AssetKind,
    pub action: AssignmentAction,
    pub target_type: TargetKind,
    pub target_id: String,
    pub target_label: String,
    pub recorded_at: NaiveDateTime,
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery: Option<DeliveryMetadata>,
}

/// Input model for appending a ledger entry. Built by the transition
/// service, never from the wire directly.
#[derive(Debug, Clone)]
pub struct NewAssignment {
    pub asset: AssetRef,
    pub action: AssignmentAction,
    pub target: TargetRef,
    pub target_label: String,
    pub notes: Option<String>,
    pub delivery: Option<DeliveryMetadata>,
}

/// Database model for the assignments ledger
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::assignments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AssignmentDB {
    pub id: String,
    pub asset_id: String,
    pub asset_type: String,
    pub action: String,
    pub target_type: String,
    pub target_id: String,
    pub target_label: String,
    pub recorded_at: NaiveDateTime,
    pub notes: Option<String>,
    pub manager_name: Option<String>,
    pub reason: Option<String>,
    pub locality: Option<String>,
    pub charger_model: Option<String>,
    pub charger_serial: Option<String>,
    #[diesel(skip_insertion)]
    pub created_at: NaiveDateTime,
}

impl AssignmentDB {
    pub fn is_assignment(&self) -> bool {
        self.action == AssignmentAction::Assignment.as_str()
    }
}

impl TryFrom<AssignmentDB> for Assignment {
    type Error = AssignmentError;

    fn try_from(db: AssignmentDB) -> Result<Self> {
        let delivery = DeliveryMetadata {
            manager_name: db.manager_name,
            reason: db.reason,
            locality: db.locality,
            charger_model: db.charger_model,
            charger_serial: db.charger_serial,
        };
        Ok(Self {
            id: db.id,
            asset_id: db.asset_id,
            asset_type: AssetKind::parse(&db.asset_type)
                .map_err(|e| AssignmentError::InvalidData(e.to_string()))?,
            action: AssignmentAction::parse(&db.action)?,
            target_type: TargetKind::parse(&db.target_type)?,
            target_id: db.target_id,
            target_label: db.target_label,
            recorded_at: db.recorded_at,
            notes: db.notes,
            delivery: if delivery.is_empty() {
                None
            } else {
                Some(delivery)
            },
        })
    }
}

impl From<NewAssignment> for AssignmentDB {
    fn from(domain: NewAssignment) -> Self {
        let delivery = domain.delivery.unwrap_or_default();
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: String::new(), // Filled by the repository
            asset_id: domain.asset.id().to_string(),
            asset_type: domain.asset.kind().as_str().to_string(),
            action: domain.action.as_str().to_string(),
            target_type: domain.target.kind().as_str().to_string(),
            target_id: domain.target.id().to_string(),
            target_label: domain.target_label,
            recorded_at: now,
            notes: domain.notes,
            manager_name: delivery.manager_name,
            reason: delivery.reason,
            locality: delivery.locality,
            charger_model: delivery.charger_model,
            charger_serial: delivery.charger_serial,
            created_at: now,
        }
    }
}

/// The action requested over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RequestedAction {
    Assign,
    Unassign,
}

/// Wire model for `POST /api/assignments`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentRequest {
    pub item_id: String,
    pub item_type: AssetKind,
    pub action: RequestedAction,
    pub target_type: Option<TargetKind>,
    pub target_id: Option<String>,
    pub notes: Option<String>,
    pub delivery: Option<DeliveryMetadata>,
}

impl AssignmentRequest {
    /// Validates the request shape and extracts the target for an assign action
    pub fn validate(&self) -> Result<Option<TargetRef>> {
        if self.item_id.trim().is_empty() {
            return Err(AssignmentError::InvalidData(
                "Item id cannot be empty".to_string(),
            ));
        }
        match self.action {
            RequestedAction::Assign => match (self.target_type, &self.target_id) {
                (Some(kind), Some(id)) if !id.trim().is_empty() => {
                    Ok(Some(TargetRef::new(kind, id.clone())))
                }
                _ => Err(AssignmentError::InvalidData(
                    "An assign action requires targetType and targetId".to_string(),
                )),
            },
            RequestedAction::Unassign => Ok(None),
        }
    }
}
