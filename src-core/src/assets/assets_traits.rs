use super::assets_errors::Result;
use super::assets_model::{AssetFilter, AssetQuery, AssetSummary};

/// Trait defining the contract for availability/holder resolution.
pub trait AssetResolverTrait: Send + Sync {
    fn search(&self, query: AssetQuery) -> Result<Vec<AssetSummary>>;
    fn list_available(&self, filter: &AssetFilter) -> Result<Vec<AssetSummary>>;
    fn list_assigned(&self, filter: &AssetFilter) -> Result<Vec<AssetSummary>>;
}
