use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductRecord};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

/// Full-replace update. Concurrent updates or deletes of the same id are not
/// detected and their outcome is unspecified.
pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let record = ProductRecord::new(params.details)?;

        // Verify product exists
        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(ProductError::StoreUnavailable)?
            .ok_or(ProductError::NotFound)?;

        let record = record.replacing(&existing);
        self.repository.replace(existing.id, &record).await?;

        self.logger
            .info(&format!("Product updated: {}", existing.id));
        Ok(Product::from_record(existing.id, record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::logger::silent_logger;
    use crate::domain::product::model::fixtures::{details, product};
    use crate::domain::product::repository::MockProductRepository;
    use crate::domain::shared::value_objects::ProductId;
    use bigdecimal::BigDecimal;
    use std::str::FromStr;

    #[tokio::test]
    async fn should_update_product_when_exists() {
        let existing = product(8, "Old Name", 40);
        let created_at = existing.created_at;
        let mut mock_repo = MockProductRepository::new();

        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo
            .expect_replace()
            .withf(|id, record| *id == ProductId::new(8) && record.details.name == "Colombian Supremo")
            .times(1)
            .returning(|_, _| Ok(()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: silent_logger(),
        };

        let product = use_case
            .execute(UpdateProductParams {
                id: ProductId::new(8),
                details: details("Colombian Supremo", 60),
            })
            .await
            .unwrap();

        assert_eq!(product.id, ProductId::new(8));
        assert_eq!(product.details.name, "Colombian Supremo");
        assert_eq!(product.details.acidity_level, 60);
        assert_eq!(product.created_at, created_at);
    }

    #[tokio::test]
    async fn should_replace_with_normalized_record_keeping_creation_time() {
        let existing = product(5, "Old Name", 40);
        let created_at = existing.created_at;
        let mut mock_repo = MockProductRepository::new();

        mock_repo
            .expect_get_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo
            .expect_replace()
            .withf(move |_, record| {
                record.details.price.to_string() == "7.50"
                    && record.created_at == created_at
                    && record.updated_at >= created_at
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: silent_logger(),
        };

        let mut body = details("Cheaper Blend", 50);
        body.price = BigDecimal::from_str("7.5").unwrap();

        let product = use_case
            .execute(UpdateProductParams {
                id: ProductId::new(5),
                details: body,
            })
            .await
            .unwrap();

        assert_eq!(product.details.price.to_string(), "7.50");
        assert_eq!(product.created_at, created_at);
    }

    #[tokio::test]
    async fn should_reject_update_when_invalid() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_get_by_id().never();
        mock_repo.expect_replace().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: silent_logger(),
        };

        let mut invalid = details("Heavy", 50);
        invalid.body_level = 101;

        let result = use_case
            .execute(UpdateProductParams {
                id: ProductId::new(1),
                details: invalid,
            })
            .await;

        assert!(matches!(
            result,
            Err(ProductError::InvalidEntity("product.body_out_of_range"))
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_nonexistent_product() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));
        mock_repo.expect_replace().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: silent_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: ProductId::new(999),
                details: details("Something", 50),
            })
            .await;

        assert!(matches!(result, Err(ProductError::NotFound)));
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleted_before_replace() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(Some(product(id.value(), "Racing", 50))));
        mock_repo
            .expect_replace()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: silent_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: ProductId::new(5),
                details: details("Racing", 50),
            })
            .await;

        assert!(matches!(result, Err(ProductError::NotFound)));
    }
}
