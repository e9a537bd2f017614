// ABOUTME: HTTP request handlers for product operations
// ABOUTME: Handles CRUD operations for products with database integration

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::response::{ApiError, ApiResponse};
use crate::AppState;
use shelf_products::pagination::{DEFAULT_PAGE_SIZE, MIN_PAGE};
use shelf_products::{PaginationParams, ProductCreateInput, ProductUpdateInput};

/// Look up a product by barcode or serial
pub async fn get_product(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> impl IntoResponse {
    info!("Looking up product: {}", identifier);

    match state.products.get_product_by_ident(&identifier).await {
        Ok(Some(product)) => {
            (StatusCode::OK, ResponseJson(ApiResponse::success(product))).into_response()
        }
        Ok(None) => {
            info!("Product not found: {}", identifier);
            (
                StatusCode::NOT_FOUND,
                ResponseJson(ApiResponse::<()>::failure("Product not found")),
            )
                .into_response()
        }
        Err(e) => ApiError(e).into_response(),
    }
}

/// Create a new product
pub async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<ProductCreateInput>,
) -> impl IntoResponse {
    info!("Creating product: {:?}", input.name);

    match state.products.create_product(input).await {
        Ok(product) => (
            StatusCode::CREATED,
            ResponseJson(ApiResponse::success_with_message(
                "Product added successfully",
                product,
            )),
        )
            .into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}

/// Query parameters for the product listing
#[derive(Debug, Deserialize)]
pub struct ProductListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    #[serde(default)]
    pub search: String,
}

/// List products with pagination and optional search
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> impl IntoResponse {
    let params = PaginationParams::with_page_and_limit(
        query.page.unwrap_or(MIN_PAGE),
        query.limit.unwrap_or(DEFAULT_PAGE_SIZE),
    );
    info!(
        "Listing products (page {}, limit {}, search '{}')",
        params.page(),
        params.limit(),
        query.search
    );

    match state.products.list_products(&params, &query.search).await {
        Ok(page) => (StatusCode::OK, ResponseJson(ApiResponse::paginated(page))).into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}

/// Update an existing product
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(updates): Json<ProductUpdateInput>,
) -> impl IntoResponse {
    info!("Updating product: {}", id);

    match state.products.update_product(&id, updates).await {
        Ok(_) => (
            StatusCode::OK,
            ResponseJson(ApiResponse::<()>::message("Product updated successfully")),
        )
            .into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}

/// Delete a product
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    info!("Deleting product: {}", id);

    match state.products.delete_product(&id).await {
        Ok(true) => (
            StatusCode::OK,
            ResponseJson(ApiResponse::<()>::message("Product deleted successfully")),
        )
            .into_response(),
        Ok(false) => {
            info!("Product not found for deletion: {}", id);
            (
                StatusCode::NOT_FOUND,
                ResponseJson(ApiResponse::<()>::failure("Product not found")),
            )
                .into_response()
        }
        Err(e) => ApiError(e).into_response(),
    }
}
