use async_trait::async_trait;

use crate::domain::product::criteria::RawProductFilter;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::pagination::Page;

pub struct ListProductsParams {
    pub filter: RawProductFilter,
}

#[async_trait]
pub trait ListProductsUseCase: Send + Sync {
    async fn execute(&self, params: ListProductsParams) -> Result<Page<Product>, ProductError>;
}
