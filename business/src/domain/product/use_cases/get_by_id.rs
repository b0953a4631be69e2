use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::ProductId;

pub struct GetProductByIdParams {
    pub id: ProductId,
}

#[async_trait]
pub trait GetProductByIdUseCase: Send + Sync {
    /// Returns `Ok(None)` when no product has the id.
    async fn execute(&self, params: GetProductByIdParams) -> Result<Option<Product>, ProductError>;
}
