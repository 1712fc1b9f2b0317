use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use assetdesk_core::assets::{Computer, ComputerUpdate, NewComputer};

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListQuery {
    model_id: Option<String>,
}

async fn list_computers(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Vec<Computer>>> {
    let computers = state.asset_service.list_computers(query.model_id.as_deref())?;
    Ok(Json(computers))
}

async fn create_computer(
    State(state): State<Arc<AppState>>,
    Json(new_computer): Json<NewComputer>,
) -> ApiResult<Json<Computer>> {
    let computer = state.asset_service.create_computer(new_computer)?;
    Ok(Json(computer))
}

async fn get_computer(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Computer>> {
    let computer = state.asset_service.get_computer(&id)?;
    Ok(Json(computer))
}

async fn update_computer(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(mut update): Json<ComputerUpdate>,
) -> ApiResult<Json<Computer>> {
    update.id = id;
    let computer = state.asset_service.update_computer(update)?;
    Ok(Json(computer))
}

async fn delete_computer(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.asset_service.delete_computer(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/computers", get(list_computers).post(create_computer))
        .route(
            "/computers/{id}",
            get(get_computer).put(update_computer).delete(delete_computer),
        )
}
