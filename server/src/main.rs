use std::sync::Arc;

use anyhow::{Context, Result};
use axum::response::Json;
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use product_catalog_core::config::ThumbnailConfig;
use product_catalog_core::fetch::ReqwestClient;
use product_catalog_core::pipeline::ThumbnailPipeline;
use product_catalog_core::storage::memory::MemoryBlobStore;
use product_catalog_core::storage::s3::{S3BlobStore, S3Config};
use product_catalog_core::storage::BlobStore;

mod handlers;
mod store;

use handlers::AppState;
use store::MemoryProductStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Construct the shared clients once; everything downstream borrows them.
    let http = Arc::new(
        ReqwestClient::new().context("failed to create HTTP client")?,
    );

    let blobs: Arc<dyn BlobStore> = match S3Config::from_env() {
        Some(config) => {
            log::info!("publishing thumbnails to s3://{}", config.bucket);
            Arc::new(S3BlobStore::from_config(&config).await)
        }
        None => {
            log::warn!("S3_BUCKET not set, keeping thumbnails in memory");
            Arc::new(MemoryBlobStore::new())
        }
    };

    let pipeline = Arc::new(ThumbnailPipeline::new(http, blobs, ThumbnailConfig::default()));

    let state = AppState {
        products: Arc::new(MemoryProductStore::new()),
        pipeline,
    };

    // Build router
    let app = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/products", post(handlers::create_product).get(handlers::list_products))
        .route("/products/:id", delete(handlers::delete_product))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Server address
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    log::info!("Product Catalog Server running on http://{}", addr);
    log::info!("API endpoints:");
    log::info!("   POST   /products - Create a product (thumbnail generated best-effort)");
    log::info!("   GET    /products - List all products");
    log::info!("   DELETE /products/:id - Delete a product");
    log::info!("   GET    /health - Health check");

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

async fn root() -> &'static str {
    "Product Catalog Server v0.1.0\n\nAPI Endpoints:\n  POST   /products\n  GET    /products\n  DELETE /products/:id\n  GET    /health\n"
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": "0.1.0"
    }))
}
