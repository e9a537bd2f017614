use axum::http::Method;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;

use config::Config;
use shelf_api::AppState;
use shelf_products::{ProductStorage, ProductsManager, SqliteProductStorage, StorageConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    println!("🚀 Starting Shelf server...");
    println!("📡 Server will run on http://localhost:{}", config.port);
    println!("🗄️  Database: {}", config.database_path.display());

    // Storage is a readiness gate: if the database cannot be opened and
    // migrated, the process exits instead of serving requests that can
    // only fail.
    let storage = SqliteProductStorage::new(StorageConfig {
        path: config.database_path.clone(),
        ..StorageConfig::default()
    })
    .await?;
    storage.initialize().await?;

    let products = ProductsManager::new(Arc::new(storage));
    let seeded = products.seed_if_empty().await?;
    if seeded > 0 {
        info!("Sample data created ({} products)", seeded);
    }

    // Create CORS layer (any origin, matching the public read/write API)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    // Create the router with CORS
    let app = shelf_api::create_router(AppState { products }).layer(cors);

    // Create socket address
    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));

    println!("✅ Server listening on {}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
