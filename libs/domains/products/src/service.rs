//! Product Service - Business logic layer

use axum_helpers::Notifications;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::instrument;

use crate::error::ProductResult;
use crate::models::{Product, ProductInput};
use crate::repository::ProductRepository;

pub const NAME_REQUIRED: &str = "Name is required";

/// Product service providing business logic operations
///
/// Rule violations are recorded in the caller's [`Notifications`] and
/// reported as `None` / `false`; only repository faults come back as `Err`.
///
/// Writes that depend on name uniqueness hold `writes` from the lookup to the
/// store, so concurrent requests cannot both claim the same name.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
    writes: Arc<Mutex<()>>,
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            writes: Arc::clone(&self.writes),
        }
    }
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            writes: Arc::new(Mutex::new(())),
        }
    }

    /// List all products
    #[instrument(skip(self))]
    pub async fn get_all(&self) -> ProductResult<Vec<Product>> {
        self.repository.get_all().await
    }

    /// Get a product by ID
    #[instrument(skip(self, notifications))]
    pub async fn get_by_id(
        &self,
        id: u64,
        notifications: &mut Notifications,
    ) -> ProductResult<Option<Product>> {
        let product = self.repository.get_by_id(id).await?;
        if product.is_none() {
            notifications.add(not_found(id));
        }
        Ok(product)
    }

    /// Create a new product
    ///
    /// Refused when the name is blank or already taken (case-insensitive);
    /// the repository is not touched in either case.
    #[instrument(skip(self, input, notifications), fields(product_name = ?input.name))]
    pub async fn create(
        &self,
        input: ProductInput,
        notifications: &mut Notifications,
    ) -> ProductResult<Option<Product>> {
        let Some(name) = input.name() else {
            notifications.add(NAME_REQUIRED);
            return Ok(None);
        };

        let _guard = self.writes.lock().await;
        if self.repository.get_by_name(name).await?.is_some() {
            notifications.add(already_registered(name));
            return Ok(None);
        }

        let product = self.repository.create(Product::from(input)).await?;
        tracing::info!(product_id = product.id, "Product created");
        Ok(Some(product))
    }

    /// Replace an existing product
    ///
    /// Renaming to a name owned by another product is refused.
    #[instrument(skip(self, input, notifications), fields(product_id = input.id))]
    pub async fn update(
        &self,
        input: ProductInput,
        notifications: &mut Notifications,
    ) -> ProductResult<bool> {
        let Some(name) = input.name() else {
            notifications.add(NAME_REQUIRED);
            return Ok(false);
        };

        let id = input.id;
        let _guard = self.writes.lock().await;
        if self.repository.get_by_id(id).await?.is_none() {
            notifications.add(not_found(id));
            return Ok(false);
        }

        if let Some(owner) = self.repository.get_by_name(name).await? {
            if owner.id != id {
                notifications.add(already_registered(name));
                return Ok(false);
            }
        }

        let updated = self.repository.update(Product::from(input)).await?;
        if !updated {
            notifications.add(format!("Failed to update product {}", id));
        }
        Ok(updated)
    }

    /// Delete a product
    #[instrument(skip(self, notifications))]
    pub async fn delete_by_id(
        &self,
        id: u64,
        notifications: &mut Notifications,
    ) -> ProductResult<bool> {
        if self.repository.get_by_id(id).await?.is_none() {
            notifications.add(not_found(id));
            return Ok(false);
        }

        let deleted = self.repository.delete_by_id(id).await?;
        if !deleted {
            notifications.add(format!("Failed to delete product {}", id));
        }
        Ok(deleted)
    }
}

fn not_found(id: u64) -> String {
    format!("Product {} not found", id)
}

fn already_registered(name: &str) -> String {
    format!("Product '{}' is already registered", name)
}
