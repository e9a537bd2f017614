use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::{migrate::MigrateDatabase, Row};
use tracing::{debug, info};

use async_trait::async_trait;

use super::{
    generate_product_id, PageWindow, ProductStorage, StorageConfig, StorageError, StorageResult,
};
use crate::types::{NewProduct, Product, ProductUpdateInput};

/// SQLite implementation of ProductStorage
pub struct SqliteProductStorage {
    pool: SqlitePool,
}

impl SqliteProductStorage {
    /// Create a new SqliteProductStorage instance
    pub async fn new(config: StorageConfig) -> StorageResult<Self> {
        // Ensure parent directory exists
        if let Some(parent) = config.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(StorageError::Io)?;
            }
        }

        let database_url = format!("sqlite:{}", config.path.display());

        // Create database if it doesn't exist
        if !sqlx::Sqlite::database_exists(&database_url)
            .await
            .map_err(StorageError::Sqlx)?
        {
            debug!("Creating database at: {}", database_url);
            sqlx::Sqlite::create_database(&database_url)
                .await
                .map_err(StorageError::Sqlx)?;
        }

        // Configure connection pool
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(std::time::Duration::from_secs(config.busy_timeout_seconds))
            .connect(&database_url)
            .await
            .map_err(StorageError::Sqlx)?;

        // Configure SQLite settings (after pool creation, before migrations)
        if config.enable_wal {
            sqlx::query("PRAGMA journal_mode = WAL")
                .execute(&pool)
                .await
                .map_err(StorageError::Sqlx)?;
        }

        sqlx::query("PRAGMA foreign_keys = ON")
            .execute(&pool)
            .await
            .map_err(StorageError::Sqlx)?;

        sqlx::query("PRAGMA synchronous = NORMAL")
            .execute(&pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(Self { pool })
    }

    /// Convert a database row to a Product
    fn row_to_product(&self, row: &SqliteRow) -> StorageResult<Product> {
        let created_at_str: String = row.try_get("created_at")?;
        let updated_at_str: String = row.try_get("updated_at")?;

        let created_at = DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|_| StorageError::Database("Invalid created_at timestamp".to_string()))?
            .with_timezone(&Utc);

        let updated_at = DateTime::parse_from_rfc3339(&updated_at_str)
            .map_err(|_| StorageError::Database("Invalid updated_at timestamp".to_string()))?
            .with_timezone(&Utc);

        Ok(Product {
            id: row.try_get("id")?,
            barcode: row.try_get("barcode")?,
            serial: row.try_get("serial")?,
            name: row.try_get("name")?,
            brand: row.try_get("brand")?,
            category: row.try_get("category")?,
            price: row.try_get("price")?,
            description: row.try_get("description")?,
            stock: row.try_get("stock")?,
            created_at,
            updated_at,
        })
    }

    /// Map a UNIQUE constraint violation to the duplicate-key error for
    /// the offending column. SQLite reports the column in the message
    /// ("UNIQUE constraint failed: products.barcode").
    fn map_unique_violation(
        db_err: Box<dyn sqlx::error::DatabaseError>,
        barcode: &str,
        serial: &str,
    ) -> StorageError {
        if let Some(code) = db_err.code() {
            if code == "2067" || code == "1555" {
                // SQLITE_CONSTRAINT_UNIQUE
                let message = db_err.message();
                if message.contains("barcode") {
                    return StorageError::DuplicateBarcode(barcode.to_string());
                } else if message.contains("serial") {
                    return StorageError::DuplicateSerial(serial.to_string());
                }
            }
        }
        StorageError::Sqlx(sqlx::Error::Database(db_err))
    }
}

#[async_trait]
impl ProductStorage for SqliteProductStorage {
    async fn initialize(&self) -> StorageResult<()> {
        info!("Initializing SQLite storage with migrations");

        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(StorageError::Migration)?;

        info!("SQLite storage initialized successfully");
        Ok(())
    }

    async fn create_product(&self, product: NewProduct) -> StorageResult<Product> {
        let id = generate_product_id();
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO products (
                id, barcode, serial, name, brand, category,
                price, description, stock, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&product.barcode)
        .bind(&product.serial)
        .bind(&product.name)
        .bind(&product.brand)
        .bind(&product.category)
        .bind(product.price)
        .bind(&product.description)
        .bind(product.stock)
        .bind(now.to_rfc3339())
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => {
                debug!("Created product '{}' with ID {}", product.name, id);
                self.get_product(&id).await?.ok_or(StorageError::NotFound)
            }
            Err(sqlx::Error::Database(db_err)) => Err(Self::map_unique_violation(
                db_err,
                &product.barcode,
                &product.serial,
            )),
            Err(e) => Err(StorageError::Sqlx(e)),
        }
    }

    async fn get_product(&self, id: &str) -> StorageResult<Option<Product>> {
        let row = sqlx::query("SELECT * FROM products WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        match row {
            Some(row) => Ok(Some(self.row_to_product(&row)?)),
            None => Ok(None),
        }
    }

    async fn get_product_by_ident(&self, ident: &str) -> StorageResult<Option<Product>> {
        let row = sqlx::query("SELECT * FROM products WHERE barcode = ? OR serial = ?")
            .bind(ident)
            .bind(ident)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        match row {
            Some(row) => Ok(Some(self.row_to_product(&row)?)),
            None => Ok(None),
        }
    }

    async fn update_product(&self, id: &str, input: ProductUpdateInput) -> StorageResult<Product> {
        let mut query_parts = Vec::new();

        if input.barcode.is_some() {
            query_parts.push("barcode = ?");
        }
        if input.serial.is_some() {
            query_parts.push("serial = ?");
        }
        if input.name.is_some() {
            query_parts.push("name = ?");
        }
        if input.brand.is_some() {
            query_parts.push("brand = ?");
        }
        if input.category.is_some() {
            query_parts.push("category = ?");
        }
        if input.price.is_some() {
            query_parts.push("price = ?");
        }
        if input.description.is_some() {
            query_parts.push("description = ?");
        }
        if input.stock.is_some() {
            query_parts.push("stock = ?");
        }

        // updatedAt is refreshed even when the body names no fields.
        query_parts.push("updated_at = ?");

        let query_str = format!("UPDATE products SET {} WHERE id = ?", query_parts.join(", "));

        let mut query = sqlx::query(&query_str);

        if let Some(ref barcode) = input.barcode {
            query = query.bind(barcode);
        }
        if let Some(ref serial) = input.serial {
            query = query.bind(serial);
        }
        if let Some(ref name) = input.name {
            query = query.bind(name);
        }
        if let Some(ref brand) = input.brand {
            query = query.bind(brand);
        }
        if let Some(ref category) = input.category {
            query = query.bind(category);
        }
        if let Some(price) = input.price {
            query = query.bind(price);
        }
        if let Some(ref description) = input.description {
            query = query.bind(description);
        }
        if let Some(stock) = input.stock {
            query = query.bind(stock);
        }

        query = query.bind(Utc::now().to_rfc3339()).bind(id);

        let result = query.execute(&self.pool).await;

        match result {
            Ok(result) => {
                if result.rows_affected() == 0 {
                    return Err(StorageError::NotFound);
                }
                debug!("Updated product with ID {}", id);
                self.get_product(id).await?.ok_or(StorageError::NotFound)
            }
            Err(sqlx::Error::Database(db_err)) => Err(Self::map_unique_violation(
                db_err,
                input.barcode.as_deref().unwrap_or_default(),
                input.serial.as_deref().unwrap_or_default(),
            )),
            Err(e) => Err(StorageError::Sqlx(e)),
        }
    }

    async fn delete_product(&self, id: &str) -> StorageResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        debug!("Deleted product with ID {}", id);
        Ok(())
    }

    async fn search_products(
        &self,
        search: &str,
        window: PageWindow,
    ) -> StorageResult<Vec<Product>> {
        let rows = if search.is_empty() {
            sqlx::query(
                r#"
                SELECT * FROM products
                ORDER BY created_at DESC
                LIMIT ? OFFSET ?
                "#,
            )
            .bind(window.limit)
            .bind(window.offset)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?
        } else {
            // SQLite LIKE is case-insensitive for ASCII.
            let pattern = format!("%{}%", search);
            sqlx::query(
                r#"
                SELECT * FROM products
                WHERE name LIKE ? OR brand LIKE ? OR category LIKE ?
                   OR barcode LIKE ? OR serial LIKE ?
                ORDER BY created_at DESC
                LIMIT ? OFFSET ?
                "#,
            )
            .bind(&pattern)
            .bind(&pattern)
            .bind(&pattern)
            .bind(&pattern)
            .bind(&pattern)
            .bind(window.limit)
            .bind(window.offset)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?
        };

        let mut products = Vec::new();
        for row in rows {
            products.push(self.row_to_product(&row)?);
        }

        debug!(
            "Retrieved {} products for search '{}'",
            products.len(),
            search
        );
        Ok(products)
    }

    async fn count_products(&self, search: &str) -> StorageResult<i64> {
        let row = if search.is_empty() {
            sqlx::query("SELECT COUNT(*) as count FROM products")
                .fetch_one(&self.pool)
                .await
                .map_err(StorageError::Sqlx)?
        } else {
            let pattern = format!("%{}%", search);
            sqlx::query(
                r#"
                SELECT COUNT(*) as count FROM products
                WHERE name LIKE ? OR brand LIKE ? OR category LIKE ?
                   OR barcode LIKE ? OR serial LIKE ?
                "#,
            )
            .bind(&pattern)
            .bind(&pattern)
            .bind(&pattern)
            .bind(&pattern)
            .bind(&pattern)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?
        };

        let count: i64 = row.try_get("count")?;
        Ok(count)
    }
}
