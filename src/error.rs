use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ApiError {
    #[error("A 'text' property is required.")]
    MissingText,
    #[error("Paste id not found: {0}")]
    PasteNotFound(String),
    #[error("Not found: {0}")]
    RouteNotFound(String),
}

/// Terminal error handler: every failure is logged server-side and echoed to
/// the caller verbatim as the response body.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            ApiError::MissingText => StatusCode::BAD_REQUEST,
            ApiError::PasteNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::RouteNotFound(_) => StatusCode::NOT_FOUND,
        };

        error!("{self}");

        (status_code, format!("{self}")).into_response()
    }
}
