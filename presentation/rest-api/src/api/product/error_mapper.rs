use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        let (status, name) = match &self {
            ProductError::InvalidCriterion { field, value } => {
                return (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(
                        "InvalidCriterion",
                        format!("{}: {}={}", message, field, value),
                    ),
                );
            }
            ProductError::InvalidRange { field } => {
                return (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new("InvalidRange", format!("{}: {}", message, field)),
                );
            }
            ProductError::InvalidSort(value) => {
                return (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new("InvalidSort", format!("{}: {}", message, value)),
                );
            }
            ProductError::InvalidPagination => (StatusCode::BAD_REQUEST, "InvalidPagination"),
            ProductError::InvalidEntity(_) => (StatusCode::BAD_REQUEST, "ValidationError"),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            ProductError::StoreUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "StoreUnavailable")
            }
        };

        (status, ErrorResponse::new(name, message))
    }
}
