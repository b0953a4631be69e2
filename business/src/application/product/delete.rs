use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        // The store reports a missing id, so a repeated delete surfaces as NotFound.
        self.repository.delete(params.id).await.inspect_err(|e| {
            self.logger
                .warn(&format!("Could not delete product {}: {}", params.id, e));
        })?;

        self.logger.info(&format!("Product deleted: {}", params.id));
        Ok(())
    }
}
