use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::query_executor::ProductQueryExecutor;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::pagination::PageWindow;
use crate::domain::product::predicate::{ProductClause, ProductPredicate};
use crate::domain::product::sort::ProductOrdering;
use crate::domain::product::use_cases::list_featured::ListFeaturedProductsUseCase;

pub struct ListFeaturedProductsUseCaseImpl {
    pub executor: ProductQueryExecutor,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListFeaturedProductsUseCase for ListFeaturedProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, ProductError> {
        self.logger.info("Fetching featured products");

        let predicate = ProductPredicate::match_all().and(ProductClause::Featured(true));
        let result = self
            .executor
            .execute(&predicate, &ProductOrdering::default(), PageWindow::unbounded())
            .await?;

        self.logger
            .info(&format!("Found {} featured products", result.items.len()));
        Ok(result.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::logger::silent_logger;
    use crate::domain::product::model::fixtures::product;
    use crate::domain::product::repository::MockProductRepository;

    #[tokio::test]
    async fn should_fetch_featured_products_without_a_limit() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_count_matching()
            .withf(|predicate| predicate.clauses() == [ProductClause::Featured(true)])
            .returning(|_| Ok(2));
        mock_repo
            .expect_fetch_matching()
            .withf(|predicate, ordering, window| {
                predicate.clauses() == [ProductClause::Featured(true)]
                    && *ordering == ProductOrdering::default()
                    && *window == PageWindow::unbounded()
            })
            .returning(|_, _, _| {
                Ok(vec![
                    product(2, "Colombian Supremo", 60),
                    product(1, "Ethiopian Yirgacheffe", 85),
                ])
            });

        let use_case = ListFeaturedProductsUseCaseImpl {
            executor: ProductQueryExecutor::new(Arc::new(mock_repo)),
            logger: silent_logger(),
        };

        let products = use_case.execute().await.unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].details.name, "Colombian Supremo");
    }

    #[tokio::test]
    async fn should_propagate_store_failure() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_count_matching()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = ListFeaturedProductsUseCaseImpl {
            executor: ProductQueryExecutor::new(Arc::new(mock_repo)),
            logger: silent_logger(),
        };

        let result = use_case.execute().await;
        assert!(matches!(result, Err(ProductError::StoreUnavailable(_))));
    }
}
