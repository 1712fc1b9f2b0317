use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use assetdesk_core::assets::{AssetQuery, AssetSummary};

use crate::{error::ApiResult, main_lib::AppState};

async fn search_assets(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AssetQuery>,
) -> ApiResult<Json<Vec<AssetSummary>>> {
    let summaries = state.asset_resolver.search(query)?;
    Ok(Json(summaries))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/assets", get(search_assets))
}
