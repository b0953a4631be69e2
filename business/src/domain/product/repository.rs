use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::ProductId;

use super::model::{Product, ProductRecord};
use super::pagination::PageWindow;
use super::predicate::ProductPredicate;
use super::sort::ProductOrdering;

/// Record store capability the catalog runs against.
///
/// `replace` and `delete` return `RepositoryError::NotFound` when no record
/// has the given id. Every other failure means the store could not serve the
/// call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn count_matching(&self, predicate: &ProductPredicate) -> Result<u64, RepositoryError>;
    async fn fetch_matching(
        &self,
        predicate: &ProductPredicate,
        ordering: &ProductOrdering,
        window: PageWindow,
    ) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;
    async fn insert(&self, record: &ProductRecord) -> Result<ProductId, RepositoryError>;
    async fn replace(&self, id: ProductId, record: &ProductRecord) -> Result<(), RepositoryError>;
    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
}
