use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::main_lib::AppState;

mod assets;
mod assignments;
mod catalog;
mod computers;
mod dashboard;
mod devices;
mod health;
mod org;
mod phone_lines;
mod users;

pub fn app_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .merge(health::router())
        .merge(assignments::router())
        .merge(assets::router())
        .merge(dashboard::router())
        .merge(computers::router())
        .merge(devices::router())
        .merge(phone_lines::router())
        .merge(catalog::router())
        .merge(org::router())
        .merge(users::router());

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
