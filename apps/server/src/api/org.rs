use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use assetdesk_core::org::{
    Department, DepartmentUpdate, ManagementArea, ManagementAreaUpdate, NewDepartment,
    NewManagementArea,
};

use crate::{error::ApiResult, main_lib::AppState};

async fn list_management_areas(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<ManagementArea>>> {
    let areas = state.org_service.list_management_areas()?;
    Ok(Json(areas))
}

async fn create_management_area(
    State(state): State<Arc<AppState>>,
    Json(new_area): Json<NewManagementArea>,
) -> ApiResult<Json<ManagementArea>> {
    let area = state.org_service.create_management_area(new_area)?;
    Ok(Json(area))
}

async fn get_management_area(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ManagementArea>> {
    let area = state.org_service.get_management_area(&id)?;
    Ok(Json(area))
}

async fn update_management_area(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(mut update): Json<ManagementAreaUpdate>,
) -> ApiResult<Json<ManagementArea>> {
    update.id = id;
    let area = state.org_service.update_management_area(update)?;
    Ok(Json(area))
}

async fn delete_management_area(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.org_service.delete_management_area(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DepartmentListQuery {
    management_area_id: Option<String>,
}

async fn list_departments(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DepartmentListQuery>,
) -> ApiResult<Json<Vec<Department>>> {
    let departments = state
        .org_service
        .list_departments(query.management_area_id.as_deref())?;
    Ok(Json(departments))
}

async fn create_department(
    State(state): State<Arc<AppState>>,
    Json(new_department): Json<NewDepartment>,
) -> ApiResult<Json<Department>> {
    let department = state.org_service.create_department(new_department)?;
    Ok(Json(department))
}

async fn get_department(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Department>> {
    let department = state.org_service.get_department(&id)?;
    Ok(Json(department))
}

async fn update_department(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(mut update): Json<DepartmentUpdate>,
) -> ApiResult<Json<Department>> {
    update.id = id;
    let department = state.org_service.update_department(update)?;
    Ok(Json(department))
}

async fn delete_department(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.org_service.delete_department(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/management-areas",
            get(list_management_areas).post(create_management_area),
        )
        .route(
            "/management-areas/{id}",
            get(get_management_area)
                .put(update_management_area)
                .delete(delete_management_area),
        )
        .route("/departments", get(list_departments).post(create_department))
        .route(
            "/departments/{id}",
            get(get_department)
                .put(update_department)
                .delete(delete_department),
        )
}
