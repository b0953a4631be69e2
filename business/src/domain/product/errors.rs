use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.invalid_criterion")]
    InvalidCriterion { field: &'static str, value: String },
    #[error("product.invalid_range")]
    InvalidRange { field: &'static str },
    #[error("product.invalid_pagination")]
    InvalidPagination,
    #[error("product.invalid_sort")]
    InvalidSort(String),
    /// Write-time validation failure. Carries the code of the violated rule.
    #[error("{0}")]
    InvalidEntity(&'static str),
    #[error("product.not_found")]
    NotFound,
    #[error("product.store_unavailable")]
    StoreUnavailable(RepositoryError),
}

impl From<RepositoryError> for ProductError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => ProductError::NotFound,
            other => ProductError::StoreUnavailable(other),
        }
    }
}
