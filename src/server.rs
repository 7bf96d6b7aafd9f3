//! HTTP router wiring the catalog and search handlers together.

use crate::catalog::handlers::{handle_list_products, handle_reload_catalog};
use crate::catalog::store::CatalogStore;
use crate::search::handlers::handle_search;
use axum::http::Method;
use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn build_router(store: Arc<CatalogStore>) -> Router {
    // Browsers call the API straight from the storefront page
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST]);

    Router::new()
        .route("/api/products", get(handle_list_products))
        .route("/api/search", get(handle_search))
        .route("/api/catalog/reload", post(handle_reload_catalog))
        .layer(Extension(store))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
