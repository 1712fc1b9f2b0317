use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use assetdesk_core::assets::{AssetResolver, AssetResolverTrait, AssetService};
use assetdesk_core::assignments::{AssignmentService, AssignmentServiceTrait};
use assetdesk_core::catalog::CatalogService;
use assetdesk_core::dashboard::DashboardService;
use assetdesk_core::db;
use assetdesk_core::org::OrgService;
use assetdesk_core::users::UserService;

use crate::config::Config;

pub struct AppState {
    pub assignment_service: Arc<dyn AssignmentServiceTrait>,
    pub asset_resolver: Arc<dyn AssetResolverTrait>,
    pub asset_service: Arc<AssetService>,
    pub catalog_service: Arc<CatalogService>,
    pub org_service: Arc<OrgService>,
    pub user_service: Arc<UserService>,
    pub dashboard_service: Arc<DashboardService>,
    pub db_path: String,
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.data_dir)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;

    Ok(Arc::new(AppState {
        assignment_service: Arc::new(AssignmentService::new(pool.clone())),
        asset_resolver: Arc::new(AssetResolver::new(pool.clone())),
        asset_service: Arc::new(AssetService::new(pool.clone())),
        catalog_service: Arc::new(CatalogService::new(pool.clone())),
        org_service: Arc::new(OrgService::new(pool.clone())),
        user_service: Arc::new(UserService::new(pool.clone())),
        dashboard_service: Arc::new(DashboardService::new(pool)),
        db_path,
    }))
}
