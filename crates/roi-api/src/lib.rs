//! ROI API /v1: REST endpoints over the calculator engine
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;

pub use config::ApiConfig;
pub use error::ApiError;

use axum::{
    routing::{get, post},
    Router,
};
use roi_catalog::{Catalog, SliderTable};
use roi_core::RoiError;
use roi_profile::{PresetGenerator, ProfileCoordinator, ProfileGenerator};
use roi_render::ReportRenderer;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::metrics::Metrics;

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub sliders: &'static SliderTable,
    pub coordinator: Arc<ProfileCoordinator>,
    pub renderer: Arc<ReportRenderer>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    /// State with the offline preset generator
    pub fn new(catalog: Arc<Catalog>) -> Result<Self, RoiError> {
        Self::with_generator(catalog, Arc::new(PresetGenerator::new()))
    }

    pub fn with_generator(
        catalog: Arc<Catalog>,
        generator: Arc<dyn ProfileGenerator>,
    ) -> Result<Self, RoiError> {
        Ok(Self {
            catalog,
            sliders: SliderTable::builtin(),
            coordinator: Arc::new(ProfileCoordinator::new(generator)),
            renderer: Arc::new(ReportRenderer::builtin()?),
            metrics: Arc::new(
                Metrics::new().map_err(|e| RoiError::ConfigError(format!("metrics: {}", e)))?,
            ),
        })
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/v1/health", get(handlers::health))
        .route("/v1/catalog", get(handlers::catalog))
        .route("/v1/sliders", get(handlers::sliders))
        .route("/v1/defaults", get(handlers::defaults))
        .route("/v1/compute", post(handlers::compute))
        .route("/v1/selection/toggle", post(handlers::toggle_selection))
        .route("/v1/profile", post(handlers::profile))
        .route("/v1/render", post(handlers::render))
        .route("/metrics", get(handlers::metrics))
        .layer(axum::middleware::from_fn(middleware::trace_id))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors())
        .with_state(state)
}

/// Serve until the listener fails.
///
/// Startup and server failures come back as `RoiError`, the catalog and
/// template errors converted from their crate error types.
pub async fn run(config: &ApiConfig) -> Result<(), RoiError> {
    let state = AppState::new(config.load_catalog()?)?;
    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(&config.addr)
        .await
        .map_err(|e| RoiError::ConfigError(format!("cannot bind {}: {}", config.addr, e)))?;

    tracing::info!(addr = %config.addr, "ROI API listening");
    axum::serve(listener, app)
        .await
        .map_err(|e| RoiError::ServerError(e.to_string()))
}
