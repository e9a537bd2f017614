use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::types::{NewProduct, Product, ProductUpdateInput};

// Re-export modules
pub mod sqlite;

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Database error: {0}")]
    Database(String),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Product not found")]
    NotFound,
    #[error("Duplicate barcode: {0}")]
    DuplicateBarcode(String),
    #[error("Duplicate serial: {0}")]
    DuplicateSerial(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub path: PathBuf,
    pub enable_wal: bool,
    pub max_connections: u32,
    pub busy_timeout_seconds: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("shelf.db"),
            enable_wal: true,
            max_connections: 10,
            busy_timeout_seconds: 30,
        }
    }
}

impl StorageConfig {
    /// Configuration for an in-memory database, used by tests.
    pub fn in_memory() -> Self {
        Self {
            path: PathBuf::from(":memory:"),
            enable_wal: false, // WAL mode doesn't work with :memory:
            max_connections: 1, // Single connection for in-memory
            busy_timeout_seconds: 10,
        }
    }
}

/// A page of products to fetch: SQL-ready limit and offset.
#[derive(Debug, Clone, Copy)]
pub struct PageWindow {
    pub limit: i64,
    pub offset: i64,
}

/// Main storage trait that all product storage implementations must implement
#[async_trait]
pub trait ProductStorage: Send + Sync {
    // Initialization
    async fn initialize(&self) -> StorageResult<()>;

    // Core CRUD operations
    async fn create_product(&self, product: NewProduct) -> StorageResult<Product>;
    async fn get_product(&self, id: &str) -> StorageResult<Option<Product>>;
    /// Looks a product up by barcode or serial, whichever matches first.
    async fn get_product_by_ident(&self, ident: &str) -> StorageResult<Option<Product>>;
    async fn update_product(&self, id: &str, input: ProductUpdateInput) -> StorageResult<Product>;
    async fn delete_product(&self, id: &str) -> StorageResult<()>;

    // Paginated search: a page of matches newest-first, and the total
    // count over the same predicate. An empty search matches everything.
    async fn search_products(&self, search: &str, window: PageWindow)
        -> StorageResult<Vec<Product>>;
    async fn count_products(&self, search: &str) -> StorageResult<i64>;
}

/// Generate a unique product ID
pub fn generate_product_id() -> String {
    use uuid::Uuid;
    Uuid::new_v4().to_string()
}
