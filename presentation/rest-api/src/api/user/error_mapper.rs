use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::user::errors::UserError;
use business::domain::user::validation::FieldError;

use crate::api::error::{ErrorDetail, ErrorResponse, IntoErrorResponse};

impl From<FieldError> for ErrorDetail {
    fn from(error: FieldError) -> Self {
        Self {
            field: error.field,
            message: error.message,
        }
    }
}

impl IntoErrorResponse for UserError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, body) = match self {
            UserError::InvalidId => (StatusCode::BAD_REQUEST, ErrorResponse::new("invalid_id")),
            UserError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::with_details(
                    "invalid_request",
                    errors.into_iter().map(ErrorDetail::from).collect(),
                ),
            ),
            UserError::NotFound => (StatusCode::NOT_FOUND, ErrorResponse::new("not_found")),
            UserError::StorageNotConfigured => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorResponse::new("database_not_configured"),
            ),
            UserError::StorageUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorResponse::new("database_unavailable"),
            ),
            UserError::PasswordHash | UserError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("internal_server_error"),
            ),
        };

        (status, Json(body))
    }
}
