use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::db::RepositoryError;

/// Failures a handler can report to the client.
///
/// Bodies are fixed plain-text messages; store errors are logged here and
/// never echoed back.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("method not allowed")]
    MethodNotAllowed,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed").into_response()
            }
            ApiError::Repository(err) => {
                tracing::error!(error = %err, "Store query failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}
