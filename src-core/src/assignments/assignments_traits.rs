use crate::assets::{AssetKind, AssetRef};

use super::assignments_errors::Result;
use super::assignments_model::{
    Assignment, AssignmentRequest, DeliveryMetadata, TargetRef,
};

/// Trait defining the contract for asset holder transitions.
pub trait AssignmentServiceTrait: Send + Sync {
    fn assign(
        &self,
        asset: AssetRef,
        target: TargetRef,
        notes: Option<String>,
        delivery: Option<DeliveryMetadata>,
    ) -> Result<Assignment>;
    fn unassign(&self, asset: AssetRef, notes: Option<String>) -> Result<Assignment>;
    fn apply(&self, request: AssignmentRequest) -> Result<Assignment>;
    fn list_assignments(&self, limit: Option<i64>) -> Result<Vec<Assignment>>;
    fn history_for_asset(&self, kind: AssetKind, asset_id: &str) -> Result<Vec<Assignment>>;
}
