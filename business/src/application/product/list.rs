use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::query_executor::ProductQueryExecutor;
use crate::domain::logger::Logger;
use crate::domain::product::criteria::FilterCriteria;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::pagination::Page;
use crate::domain::product::predicate::ProductPredicate;
use crate::domain::product::use_cases::list::{ListProductsParams, ListProductsUseCase};

pub struct ListProductsUseCaseImpl {
    pub executor: ProductQueryExecutor,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListProductsUseCase for ListProductsUseCaseImpl {
    async fn execute(&self, params: ListProductsParams) -> Result<Page<Product>, ProductError> {
        self.logger
            .debug(&format!("Listing products with filter: {:?}", params.filter));

        let criteria = FilterCriteria::parse(params.filter).inspect_err(|e| {
            self.logger
                .warn(&format!("Rejected product listing criteria: {:?}", e));
        })?;

        let predicate = ProductPredicate::from_criteria(&criteria);
        if predicate.is_match_all() {
            self.logger.debug("Listing without filters");
        }
        let result = self
            .executor
            .execute(&predicate, &criteria.ordering, criteria.page.window())
            .await?;

        let page = Page::new(result.items, result.total, criteria.page);
        if page.is_past_end() {
            self.logger.debug(&format!(
                "Page {} is past the last page ({} total)",
                page.page, page.total_pages
            ));
        }
        self.logger.info(&format!(
            "Found {} products, returning page {} with {} items sorted by {}",
            page.total_elements,
            page.page,
            page.items.len(),
            criteria.ordering.field.as_str()
        ));
        Ok(page)
    }
}
