use std::path::Path;

use axum::{Router, routing::get};
use tower_http::services::ServeDir;

use crate::state::AppState;

pub mod body;
pub mod doc;
pub mod health;
pub mod products;
pub mod sales;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(products::router())
        .merge(sales::router())
}

/// API routes, the docs viewer, and the catalog UI served from `static_dir`
/// for every other path.
pub fn create_app(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    create_api_router()
        .merge(doc::scalar_docs())
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .with_state(state)
}
