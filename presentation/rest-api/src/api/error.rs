use poem::http::StatusCode;
use poem::{IntoResponse, Response};
use poem_openapi::error::ParseRequestPayloadError;
use poem_openapi::{Object, payload::Json};

/// One failing field of a rejected request.
#[derive(Object, Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    pub field: String,
    pub message: String,
}

/// Body of every non-2xx response.
#[derive(Object, Debug, Clone)]
pub struct ErrorResponse {
    /// Always `error`
    pub status: String,
    /// Machine-readable error code
    pub error: String,
    /// Per-field failures, present for request validation errors
    #[oai(skip_serializing_if_is_none)]
    pub details: Option<Vec<ErrorDetail>>,
}

impl ErrorResponse {
    pub fn new(code: &str) -> Self {
        Self {
            status: "error".to_string(),
            error: code.to_string(),
            details: None,
        }
    }

    pub fn with_details(code: &str, details: Vec<ErrorDetail>) -> Self {
        Self {
            details: Some(details),
            ..Self::new(code)
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Renders request bodies the framework could not parse in the API's error shape.
pub async fn malformed_body(err: ParseRequestPayloadError) -> Response {
    tracing::debug!(reason = %err, "malformed request body");
    let body = ErrorResponse::with_details(
        "malformed_body",
        vec![ErrorDetail {
            field: "body".to_string(),
            message: "Invalid format".to_string(),
        }],
    );
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}
