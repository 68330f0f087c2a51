use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::Product;
use crate::repository::ProductRepository;

/// In-process product store.
///
/// Ids come from a counter that starts at the highest seeded id and only
/// grows, so ids are never reused after a delete. Ids are handed out while
/// the write lock is held.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<BTreeMap<u64, Product>>,
    last_id: AtomicU64,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with existing records. Seeded ids are kept as-is.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let products: BTreeMap<u64, Product> = products.into_iter().map(|p| (p.id, p)).collect();
        let last_id = products.keys().next_back().copied().unwrap_or(0);

        Self {
            products: RwLock::new(products),
            last_id: AtomicU64::new(last_id),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_all(&self) -> ProductResult<Vec<Product>> {
        Ok(self.products.read().await.values().cloned().collect())
    }

    async fn get_by_id(&self, id: u64) -> ProductResult<Option<Product>> {
        Ok(self.products.read().await.get(&id).cloned())
    }

    async fn get_by_name(&self, name: &str) -> ProductResult<Option<Product>> {
        let name = name.trim().to_lowercase();
        Ok(self
            .products
            .read()
            .await
            .values()
            .find(|p| p.name.to_lowercase() == name)
            .cloned())
    }

    async fn create(&self, mut product: Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        product.id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        products.insert(product.id, product.clone());

        tracing::debug!(product_id = product.id, "Product stored");
        Ok(product)
    }

    async fn update(&self, product: Product) -> ProductResult<bool> {
        let mut products = self.products.write().await;

        match products.get_mut(&product.id) {
            Some(existing) => {
                *existing = product;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: u64) -> ProductResult<bool> {
        Ok(self.products.write().await.remove(&id).is_some())
    }
}
