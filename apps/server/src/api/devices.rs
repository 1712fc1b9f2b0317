use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use assetdesk_core::assets::{Device, DeviceUpdate, NewDevice};

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListQuery {
    model_id: Option<String>,
}

async fn list_devices(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Vec<Device>>> {
    let devices = state.asset_service.list_devices(query.model_id.as_deref())?;
    Ok(Json(devices))
}

async fn create_device(
    State(state): State<Arc<AppState>>,
    Json(new_device): Json<NewDevice>,
) -> ApiResult<Json<Device>> {
    let device = state.asset_service.create_device(new_device)?;
    Ok(Json(device))
}

async fn get_device(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Device>> {
    let device = state.asset_service.get_device(&id)?;
    Ok(Json(device))
}

async fn update_device(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(mut update): Json<DeviceUpdate>,
) -> ApiResult<Json<Device>> {
    update.id = id;
    let device = state.asset_service.update_device(update)?;
    Ok(Json(device))
}

async fn delete_device(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.asset_service.delete_device(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/devices", get(list_devices).post(create_device))
        .route(
            "/devices/{id}",
            get(get_device).put(update_device).delete(delete_device),
        )
}
