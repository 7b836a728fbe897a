mod catalog;
mod config;
mod pages;
mod views;

pub use catalog::{CatalogClient, CatalogError, GameFilter};
pub use config::Config;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::services::ServeDir;

async fn health() -> &'static str {
    "ok"
}

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogClient>,
}

pub fn app(config: &Config) -> Router {
    let catalog = CatalogClient::new(
        &config.catalog_base_url,
        &config.api_key,
        config.upstream_timeout,
    );
    let state = AppState {
        catalog: Arc::new(catalog),
    };

    Router::new()
        .route("/", get(pages::index).post(pages::pick))
        .route("/health", get(health))
        .fallback_service(ServeDir::new("public"))
        .with_state(state)
}
