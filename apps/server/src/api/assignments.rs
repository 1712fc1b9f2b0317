use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use assetdesk_core::assets::AssetKind;
use assetdesk_core::assignments::{Assignment, AssignmentRequest};

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
struct LedgerQuery {
    limit: Option<i64>,
}

async fn list_assignments(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LedgerQuery>,
) -> ApiResult<Json<Vec<Assignment>>> {
    let entries = state.assignment_service.list_assignments(query.limit)?;
    Ok(Json(entries))
}

async fn create_assignment(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AssignmentRequest>,
) -> ApiResult<Json<Assignment>> {
    let entry = state.assignment_service.apply(request)?;
    Ok(Json(entry))
}

async fn asset_history(
    Path((kind, id)): Path<(AssetKind, String)>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Assignment>>> {
    let entries = state.assignment_service.history_for_asset(kind, &id)?;
    Ok(Json(entries))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/assignments",
            get(list_assignments).post(create_assignment),
        )
        .route("/assignments/{kind}/{id}", get(asset_history))
}
