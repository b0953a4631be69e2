use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductRecord};
use business::domain::product::pagination::PageWindow;
use business::domain::product::predicate::ProductPredicate;
use business::domain::product::repository::ProductRepository;
use business::domain::product::sort::ProductOrdering;
use business::domain::shared::value_objects::ProductId;

/// Process-local catalog store.
///
/// Ids come from a monotonic counter and are never handed out twice, even
/// after the product holding one is deleted.
pub struct ProductRepositoryInMemory {
    products: RwLock<BTreeMap<ProductId, Product>>,
    next_id: AtomicI64,
}

impl ProductRepositoryInMemory {
    pub fn new() -> Self {
        Self {
            products: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for ProductRepositoryInMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn count_matching(&self, predicate: &ProductPredicate) -> Result<u64, RepositoryError> {
        let products = self.products.read().await;
        Ok(products.values().filter(|p| predicate.matches(p)).count() as u64)
    }

    async fn fetch_matching(
        &self,
        predicate: &ProductPredicate,
        ordering: &ProductOrdering,
        window: PageWindow,
    ) -> Result<Vec<Product>, RepositoryError> {
        let mut matching: Vec<Product> = {
            let products = self.products.read().await;
            products
                .values()
                .filter(|p| predicate.matches(p))
                .cloned()
                .collect()
        };
        ordering.sort(&mut matching);
        Ok(window.slice(matching))
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        Ok(self.products.read().await.get(&id).cloned())
    }

    async fn insert(&self, record: &ProductRecord) -> Result<ProductId, RepositoryError> {
        let id = ProductId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.products
            .write()
            .await
            .insert(id, Product::from_record(id, record.clone()));
        Ok(id)
    }

    async fn replace(&self, id: ProductId, record: &ProductRecord) -> Result<(), RepositoryError> {
        let mut products = self.products.write().await;
        match products.get_mut(&id) {
            Some(slot) => {
                *slot = Product::from_record(id, record.clone());
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        self.products
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}
