use crate::pagination::{PaginatedResponse, PaginationParams};
use crate::storage::{ProductStorage, StorageError};
use crate::types::{Product, ProductCreateInput, ProductUpdateInput};
use crate::validator::{validate_product_data, validate_product_update, ValidationError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Manager errors
#[derive(Error, Debug)]
pub enum ManagerError {
    #[error("Storage error: {0}")]
    Storage(StorageError),
    #[error("Validation errors: {0:?}")]
    Validation(Vec<ValidationError>),
    #[error("Product not found: {0}")]
    NotFound(String),
    #[error("Product with barcode '{0}' already exists")]
    DuplicateBarcode(String),
    #[error("Product with serial '{0}' already exists")]
    DuplicateSerial(String),
}

impl From<StorageError> for ManagerError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound => ManagerError::NotFound("product".to_string()),
            StorageError::DuplicateBarcode(barcode) => ManagerError::DuplicateBarcode(barcode),
            StorageError::DuplicateSerial(serial) => ManagerError::DuplicateSerial(serial),
            other => ManagerError::Storage(other),
        }
    }
}

pub type ManagerResult<T> = Result<T, ManagerError>;

/// The repository operations over an injected storage handle.
///
/// The handle is passed in explicitly so tests (and alternative
/// deployments) can substitute their own store.
#[derive(Clone)]
pub struct ProductsManager {
    storage: Arc<dyn ProductStorage>,
}

impl ProductsManager {
    pub fn new(storage: Arc<dyn ProductStorage>) -> Self {
        Self { storage }
    }

    /// Looks a product up by barcode or serial.
    pub async fn get_product_by_ident(&self, ident: &str) -> ManagerResult<Option<Product>> {
        let product = self.storage.get_product_by_ident(ident).await?;
        Ok(product)
    }

    /// Creates a new product after validating and coercing the input.
    pub async fn create_product(&self, data: ProductCreateInput) -> ManagerResult<Product> {
        let new_product =
            validate_product_data(&data).map_err(ManagerError::Validation)?;

        let product = self.storage.create_product(new_product).await?;

        info!("Created product '{}' with ID {}", product.name, product.id);
        Ok(product)
    }

    /// Returns one page of products matching `search`, newest first,
    /// along with the total matching count. The count is a second query
    /// over the same predicate: a snapshot, not a transactional total.
    pub async fn list_products(
        &self,
        params: &PaginationParams,
        search: &str,
    ) -> ManagerResult<PaginatedResponse<Product>> {
        let products = self.storage.search_products(search, params.window()).await?;
        let total = self.storage.count_products(search).await?;

        debug!(
            "Retrieved {} of {} products (search: '{}')",
            products.len(),
            total,
            search
        );
        Ok(PaginatedResponse::new(products, params, total))
    }

    /// Updates an existing product, refreshing its `updatedAt`.
    pub async fn update_product(
        &self,
        id: &str,
        updates: ProductUpdateInput,
    ) -> ManagerResult<Product> {
        let validation_errors = validate_product_update(&updates);
        if !validation_errors.is_empty() {
            return Err(ManagerError::Validation(validation_errors));
        }

        let product = self.storage.update_product(id, updates).await?;

        info!("Updated product '{}' (ID: {})", product.name, product.id);
        Ok(product)
    }

    /// Deletes a product. Returns false when no product matched.
    pub async fn delete_product(&self, id: &str) -> ManagerResult<bool> {
        match self.storage.delete_product(id).await {
            Ok(()) => {
                info!("Deleted product with ID {}", id);
                Ok(true)
            }
            Err(StorageError::NotFound) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Seeds the sample catalog when the store is empty. Runs once at
    /// startup; a non-empty store is never reseeded.
    pub async fn seed_if_empty(&self) -> ManagerResult<usize> {
        if self.storage.count_products("").await? > 0 {
            debug!("Store already has products, skipping sample data");
            return Ok(0);
        }

        let samples = crate::seed::sample_products();
        let count = samples.len();
        for product in samples {
            self.storage.create_product(product).await?;
        }

        info!("Seeded {} sample products", count);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::sqlite::SqliteProductStorage;
    use crate::storage::StorageConfig;
    use crate::types::NumericInput;

    async fn create_test_manager() -> ProductsManager {
        let storage = SqliteProductStorage::new(StorageConfig::in_memory())
            .await
            .unwrap();
        storage.initialize().await.unwrap();
        ProductsManager::new(Arc::new(storage))
    }

    fn widget_input() -> ProductCreateInput {
        ProductCreateInput {
            barcode: Some("123".to_string()),
            serial: Some("S1".to_string()),
            name: Some("Widget".to_string()),
            price: Some(NumericInput::Number(10.0)),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_created_product_is_retrievable_by_both_keys() {
        let manager = create_test_manager().await;
        let product = manager.create_product(widget_input()).await.unwrap();

        let by_barcode = manager.get_product_by_ident("123").await.unwrap().unwrap();
        let by_serial = manager.get_product_by_ident("S1").await.unwrap().unwrap();
        assert_eq!(by_barcode.id, product.id);
        assert_eq!(by_serial.id, product.id);
        assert_eq!(by_barcode.name, "Widget");
    }

    #[tokio::test]
    async fn test_create_with_missing_fields_inserts_nothing() {
        let manager = create_test_manager().await;

        let result = manager
            .create_product(ProductCreateInput {
                barcode: Some("123".to_string()),
                serial: Some("S1".to_string()),
                price: Some(NumericInput::Number(10.0)),
                ..Default::default()
            })
            .await;
        assert!(matches!(result.unwrap_err(), ManagerError::Validation(_)));

        let listing = manager
            .list_products(&PaginationParams::default(), "")
            .await
            .unwrap();
        assert_eq!(listing.pagination.total, 0);
    }

    #[tokio::test]
    async fn test_duplicate_create_yields_conflict() {
        let manager = create_test_manager().await;
        manager.create_product(widget_input()).await.unwrap();

        let mut second = widget_input();
        second.serial = Some("S2".to_string());
        let result = manager.create_product(second).await;
        assert!(matches!(
            result.unwrap_err(),
            ManagerError::DuplicateBarcode(_)
        ));
    }

    #[tokio::test]
    async fn test_update_nonexistent_is_not_found() {
        let manager = create_test_manager().await;
        let result = manager
            .update_product(
                "missing",
                ProductUpdateInput {
                    stock: Some(3),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result.unwrap_err(), ManagerError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_then_operations_are_not_found() {
        let manager = create_test_manager().await;
        let product = manager.create_product(widget_input()).await.unwrap();

        assert!(manager.delete_product(&product.id).await.unwrap());
        assert!(!manager.delete_product(&product.id).await.unwrap());
        assert!(manager
            .get_product_by_ident("123")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_seed_if_empty_runs_once() {
        let manager = create_test_manager().await;

        let seeded = manager.seed_if_empty().await.unwrap();
        assert_eq!(seeded, 3);

        // Second call is a no-op.
        assert_eq!(manager.seed_if_empty().await.unwrap(), 0);

        let listing = manager
            .list_products(&PaginationParams::default(), "")
            .await
            .unwrap();
        assert_eq!(listing.pagination.total, 3);
    }

    #[tokio::test]
    async fn test_seed_skips_non_empty_store() {
        let manager = create_test_manager().await;
        manager.create_product(widget_input()).await.unwrap();

        assert_eq!(manager.seed_if_empty().await.unwrap(), 0);
        let listing = manager
            .list_products(&PaginationParams::default(), "")
            .await
            .unwrap();
        assert_eq!(listing.pagination.total, 1);
    }

    #[tokio::test]
    async fn test_list_products_pagination_block() {
        let manager = create_test_manager().await;
        manager.seed_if_empty().await.unwrap();

        let params = PaginationParams::with_page_and_limit(2, 1);
        let listing = manager.list_products(&params, "").await.unwrap();

        assert_eq!(listing.data.len(), 1);
        assert_eq!(listing.pagination.page, 2);
        assert_eq!(listing.pagination.limit, 1);
        assert_eq!(listing.pagination.total, 3);
        assert_eq!(listing.pagination.pages, 3);
    }

    #[tokio::test]
    async fn test_search_matches_brand_case_insensitively() {
        let manager = create_test_manager().await;
        manager.seed_if_empty().await.unwrap();

        let listing = manager
            .list_products(&PaginationParams::default(), "samsung")
            .await
            .unwrap();
        assert_eq!(listing.pagination.total, 1);
        assert_eq!(listing.data[0].brand, "Samsung");
    }
}
