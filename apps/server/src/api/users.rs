use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use assetdesk_core::users::{NewUser, User, UserUpdate};

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListQuery {
    is_active: Option<bool>,
    department_id: Option<String>,
}

async fn list_users(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Vec<User>>> {
    let users = state
        .user_service
        .list_users(query.is_active, query.department_id.as_deref())?;
    Ok(Json(users))
}

async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(new_user): Json<NewUser>,
) -> ApiResult<Json<User>> {
    let user = state.user_service.create_user(new_user)?;
    Ok(Json(user))
}

async fn get_user(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<User>> {
    let user = state.user_service.get_user(&id)?;
    Ok(Json(user))
}

async fn update_user(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(mut update): Json<UserUpdate>,
) -> ApiResult<Json<User>> {
    update.id = id;
    let user = state.user_service.update_user(update)?;
    Ok(Json(user))
}

async fn delete_user(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.user_service.delete_user(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}
