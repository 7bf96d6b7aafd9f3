use anyhow::Context;
use appliance_catalog::catalog::store::CatalogStore;
use appliance_catalog::config::ServerConfig;
use appliance_catalog::server::build_router;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    // 1. Catalog snapshot:
    let store = CatalogStore::open(&config.catalog_path)
        .await
        .with_context(|| format!("cannot start without catalog {}", config.catalog_path.display()))?;
    tracing::info!("Catalog ready: {} products", store.len());

    // 2. HTTP Router:
    let app = build_router(Arc::new(store));

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind);
    tracing::info!("  - GET  /api/products");
    tracing::info!("  - GET  /api/search?q={{query}}");
    tracing::info!("  - POST /api/catalog/reload");

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
