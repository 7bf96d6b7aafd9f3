use super::engine::search_scored;
use super::types::{ScoredName, SearchParams};
use crate::catalog::store::CatalogStore;
use crate::catalog::types::ProductView;
use axum::extract::Query;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(store): Extension<Arc<CatalogStore>>,
) -> Json<Vec<ProductView>> {
    let snapshot = store.snapshot();

    if params.q.trim().is_empty() {
        return Json(snapshot.iter().map(ProductView::from).collect());
    }

    let ranked = search_scored(&params.q, &snapshot);

    tracing::debug!(
        "Search {:?}: {} of {} products, ranking {:?}",
        params.q,
        ranked.len(),
        snapshot.len(),
        ranked.iter().map(ScoredName::from).collect::<Vec<_>>()
    );

    Json(
        ranked
            .iter()
            .map(|scored| ProductView::from(scored.record))
            .collect(),
    )
}
