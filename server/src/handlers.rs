use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use uuid::Uuid;

use product_catalog_core::pipeline::ThumbnailPipeline;
use product_catalog_core::product::Product;

use crate::store::ProductStore;

/// Shared state built once at startup and handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductStore>,
    pub pipeline: Arc<ThumbnailPipeline>,
}

#[derive(Debug, Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: Option<T>,
    error: Option<String>,
}

/// POST /products
///
/// Create a product. The id is assigned here, never taken from the client.
/// Thumbnail generation runs after the record is stored and its outcome
/// never changes the response: the product is created either way.
pub async fn create_product(
    State(state): State<AppState>,
    Json(mut product): Json<Product>,
) -> Response {
    if product.name.is_empty() || product.price <= 0 {
        let response = ApiResponse::<()> {
            success: false,
            data: None,
            error: Some("invalid product data: name and a positive price are required".to_string()),
        };
        return (StatusCode::BAD_REQUEST, Json(response)).into_response();
    }

    product.id = Uuid::new_v4().to_string();

    if let Err(e) = state.products.put(product.clone()).await {
        log::error!("failed to store product {}: {}", product.id, e);
        let response = ApiResponse::<()> {
            success: false,
            data: None,
            error: Some("error creating product".to_string()),
        };
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
    }

    // Best-effort: failures are logged inside the pipeline and deliberately
    // not reported to the API caller.
    if product.source_url().is_some() {
        log::info!("generating thumbnail for product {}", product.id);
        let _ = state.pipeline.run(&product).await;
    }

    let response = ApiResponse {
        success: true,
        data: Some(product),
        error: None,
    };
    (StatusCode::CREATED, Json(response)).into_response()
}

/// GET /products
///
/// List all products via a full scan.
pub async fn list_products(State(state): State<AppState>) -> Response {
    match state.products.scan().await {
        Ok(products) => {
            let response = ApiResponse {
                success: true,
                data: Some(products),
                error: None,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            log::error!("failed to list products: {}", e);
            let response = ApiResponse::<()> {
                success: false,
                data: None,
                error: Some("error listing products".to_string()),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response()
        }
    }
}

/// DELETE /products/:id
///
/// Remove a product record. The thumbnail object, if any, is left behind;
/// it is a regenerable derivative with no independent identity.
pub async fn delete_product(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    if id.is_empty() {
        let response = ApiResponse::<()> {
            success: false,
            data: None,
            error: Some("invalid product ID".to_string()),
        };
        return (StatusCode::BAD_REQUEST, Json(response)).into_response();
    }

    match state.products.delete(&id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            log::error!("failed to delete product {}: {}", id, e);
            let response = ApiResponse::<()> {
                success: false,
                data: None,
                error: Some("error deleting product".to_string()),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response()
        }
    }
}
