use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use assetdesk_core::catalog::{Brand, BrandUpdate, Model, ModelUpdate, NewBrand, NewModel};

use crate::{error::ApiResult, main_lib::AppState};

async fn list_brands(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Brand>>> {
    let brands = state.catalog_service.list_brands()?;
    Ok(Json(brands))
}

async fn create_brand(
    State(state): State<Arc<AppState>>,
    Json(new_brand): Json<NewBrand>,
) -> ApiResult<Json<Brand>> {
    let brand = state.catalog_service.create_brand(new_brand)?;
    Ok(Json(brand))
}

async fn get_brand(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Brand>> {
    let brand = state.catalog_service.get_brand(&id)?;
    Ok(Json(brand))
}

async fn update_brand(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(mut update): Json<BrandUpdate>,
) -> ApiResult<Json<Brand>> {
    update.id = id;
    let brand = state.catalog_service.update_brand(update)?;
    Ok(Json(brand))
}

async fn delete_brand(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.catalog_service.delete_brand(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelListQuery {
    brand_id: Option<String>,
}

async fn list_models(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ModelListQuery>,
) -> ApiResult<Json<Vec<Model>>> {
    let models = state.catalog_service.list_models(query.brand_id.as_deref())?;
    Ok(Json(models))
}

async fn create_model(
    State(state): State<Arc<AppState>>,
    Json(new_model): Json<NewModel>,
) -> ApiResult<Json<Model>> {
    let model = state.catalog_service.create_model(new_model)?;
    Ok(Json(model))
}

async fn get_model(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Model>> {
    let model = state.catalog_service.get_model(&id)?;
    Ok(Json(model))
}

async fn update_model(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(mut update): Json<ModelUpdate>,
) -> ApiResult<Json<Model>> {
    update.id = id;
    let model = state.catalog_service.update_model(update)?;
    Ok(Json(model))
}

async fn delete_model(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.catalog_service.delete_model(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/brands", get(list_brands).post(create_brand))
        .route(
            "/brands/{id}",
            get(get_brand).put(update_brand).delete(delete_brand),
        )
        .route("/models", get(list_models).post(create_model))
        .route(
            "/models/{id}",
            get(get_model).put(update_model).delete(delete_model),
        )
}
