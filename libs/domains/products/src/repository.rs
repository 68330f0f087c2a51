use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::Product;

/// Repository trait for Product persistence
///
/// Absence is reported as `None` / `false`; `Err` is reserved for backend
/// faults.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products in ascending id order
    async fn get_all(&self) -> ProductResult<Vec<Product>>;

    /// Get a product by ID
    async fn get_by_id(&self, id: u64) -> ProductResult<Option<Product>>;

    /// Get a product by name, ignoring case
    async fn get_by_name(&self, name: &str) -> ProductResult<Option<Product>>;

    /// Store a new product. The id is assigned here; any id on the input is
    /// overwritten.
    async fn create(&self, product: Product) -> ProductResult<Product>;

    /// Replace the product with the same id. `false` if there is none.
    async fn update(&self, product: Product) -> ProductResult<bool>;

    /// Delete a product by ID. `false` if there is none.
    async fn delete_by_id(&self, id: u64) -> ProductResult<bool>;
}
