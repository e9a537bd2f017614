// ABOUTME: HTTP API layer for Shelf providing REST endpoints and routing
// ABOUTME: Integration layer that depends on the products domain package

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use shelf_products::ProductsManager;

pub mod handlers;
pub mod health;
pub mod response;

/// Shared application state for API handlers
#[derive(Clone)]
pub struct AppState {
    pub products: ProductsManager,
}

/// Creates the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/product", post(handlers::create_product))
        .route("/api/product/{id}", get(handlers::get_product))
        .route("/api/product/{id}", put(handlers::update_product))
        .route("/api/product/{id}", delete(handlers::delete_product))
        .route("/api/products", get(handlers::list_products))
        .with_state(state)
}
