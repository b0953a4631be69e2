use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Option<Product>, ProductError> {
        self.logger
            .info(&format!("Fetching product by id: {}", params.id));

        let product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(ProductError::StoreUnavailable)?;

        if product.is_none() {
            self.logger
                .debug(&format!("No product with id: {}", params.id));
        }
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::logger::silent_logger;
    use crate::domain::product::model::fixtures::product;
    use crate::domain::product::repository::MockProductRepository;
    use crate::domain::shared::value_objects::ProductId;

    #[tokio::test]
    async fn should_return_product_when_exists() {
        let product_id = ProductId::new(12);
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .withf(move |id| *id == product_id)
            .returning(|id| Ok(Some(product(id.value(), "House Blend", 55))));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: silent_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams { id: product_id })
            .await;

        let product = result.unwrap().unwrap();
        assert_eq!(product.id, product_id);
        assert_eq!(product.details.name, "House Blend");
    }

    #[tokio::test]
    async fn should_return_none_when_product_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: silent_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams {
                id: ProductId::new(404),
            })
            .await;

        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn should_return_unavailable_when_store_fails() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::Unavailable));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: silent_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams {
                id: ProductId::new(1),
            })
            .await;

        assert!(matches!(result, Err(ProductError::StoreUnavailable(_))));
    }
}
