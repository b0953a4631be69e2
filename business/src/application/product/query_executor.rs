use std::sync::Arc;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::pagination::PageWindow;
use crate::domain::product::predicate::ProductPredicate;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::sort::ProductOrdering;

/// Rows matching a predicate plus the size of the whole match, before windowing.
#[derive(Debug)]
pub struct QueryResult {
    pub total: u64,
    pub items: Vec<Product>,
}

/// Runs a composed query as one count and one fetch against the store.
/// Both calls receive the same predicate. Failures are not retried.
#[derive(Clone)]
pub struct ProductQueryExecutor {
    repository: Arc<dyn ProductRepository>,
}

impl ProductQueryExecutor {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(
        &self,
        predicate: &ProductPredicate,
        ordering: &ProductOrdering,
        window: PageWindow,
    ) -> Result<QueryResult, ProductError> {
        let total = self
            .repository
            .count_matching(predicate)
            .await
            .map_err(ProductError::StoreUnavailable)?;

        let items = self
            .repository
            .fetch_matching(predicate, ordering, window)
            .await
            .map_err(ProductError::StoreUnavailable)?;

        Ok(QueryResult { total, items })
    }
}
