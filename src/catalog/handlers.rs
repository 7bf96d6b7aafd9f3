use super::store::CatalogStore;
use super::types::{ProductView, ReloadResponse};
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_list_products(
    Extension(store): Extension<Arc<CatalogStore>>,
) -> Json<Vec<ProductView>> {
    let snapshot = store.list_all();
    Json(snapshot.iter().map(ProductView::from).collect())
}

pub async fn handle_reload_catalog(
    Extension(store): Extension<Arc<CatalogStore>>,
) -> (StatusCode, Json<ReloadResponse>) {
    match store.reload().await {
        Ok(count) => (
            StatusCode::OK,
            Json(ReloadResponse {
                status: "reloaded".to_string(),
                count: Some(count),
                error: None,
            }),
        ),
        Err(err) => {
            tracing::error!("Failed to reload catalog: {:#}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ReloadResponse {
                    status: "reload_failed".to_string(),
                    count: None,
                    error: Some(err.to_string()),
                }),
            )
        }
    }
}
