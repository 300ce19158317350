pub mod backend;
pub mod config;
pub mod error;
pub mod logging;
pub mod routes;

use std::sync::Arc;

use axum::{routing::get, Router};
use lambda_http::{run, Error};
use tracing::info;

use crate::backend::{BackendClient, HttpBackend};
use crate::config::{BackendUrl, Config};
use crate::routes::{health, number, root};

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn BackendClient>,
    pub backend_url: BackendUrl,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root::handler))
        .route("/health", get(health::health))
        .route("/api/number", get(number::handler))
        .with_state(state)
}

pub fn create_app(config: Config) -> Router {
    create_router(AppState {
        client: Arc::new(HttpBackend::default()),
        backend_url: config.backend_url,
    })
}

pub async fn run_app(config: Config) -> Result<(), Error> {
    logging::init_logger(&config);
    info!(environment = %config.environment, "Starting number relay");
    let app = create_app(config);
    run(app).await
}
