use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// The two ways a request can fail; everything else is total.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// Malformed or out-of-range input
    #[error("{0}")]
    Validation(String),
    /// Query against empty state
    #[error("{0}")]
    NotFound(String),
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let status = match self {
            RequestError::Validation(_) => StatusCode::BAD_REQUEST,
            RequestError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        (status, self.to_string()).into_response()
    }
}
