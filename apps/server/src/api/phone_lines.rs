use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use assetdesk_core::assets::{NewPhoneLine, PhoneLine, PhoneLineUpdate};

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
struct ListQuery {
    provider: Option<String>,
}

async fn list_phone_lines(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Vec<PhoneLine>>> {
    let lines = state
        .asset_service
        .list_phone_lines(query.provider.as_deref())?;
    Ok(Json(lines))
}

async fn create_phone_line(
    State(state): State<Arc<AppState>>,
    Json(new_line): Json<NewPhoneLine>,
) -> ApiResult<Json<PhoneLine>> {
    let line = state.asset_service.create_phone_line(new_line)?;
    Ok(Json(line))
}

async fn get_phone_line(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PhoneLine>> {
    let line = state.asset_service.get_phone_line(&id)?;
    Ok(Json(line))
}

async fn update_phone_line(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(mut update): Json<PhoneLineUpdate>,
) -> ApiResult<Json<PhoneLine>> {
    update.id = id;
    let line = state.asset_service.update_phone_line(update)?;
    Ok(Json(line))
}

async fn delete_phone_line(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.asset_service.delete_phone_line(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/phone-lines", get(list_phone_lines).post(create_phone_line))
        .route(
            "/phone-lines/{id}",
            get(get_phone_line)
                .put(update_phone_line)
                .delete(delete_phone_line),
        )
}
