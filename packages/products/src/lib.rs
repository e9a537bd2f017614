//! # Shelf Products
//!
//! A product catalog library for Shelf that provides CRUD operations
//! for managing product records with persistent storage.

pub mod manager;
pub mod pagination;
pub mod seed;
pub mod storage;
pub mod types;
pub mod validator;

// Re-export main types
pub use types::{NewProduct, NumericInput, Product, ProductCreateInput, ProductUpdateInput};

// Re-export manager types
pub use manager::{ManagerError, ManagerResult, ProductsManager};

// Re-export storage types and traits
pub use storage::{
    generate_product_id, sqlite::SqliteProductStorage, PageWindow, ProductStorage, StorageConfig,
    StorageError, StorageResult,
};

// Re-export validator functions
pub use validator::{validate_product_data, validate_product_update, ValidationError};

// Re-export pagination types
pub use pagination::{PaginatedResponse, PaginationMeta, PaginationParams};
