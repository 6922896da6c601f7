use std::fmt::Display;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// An error answered to the client as a plain-text body with `status`.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// A 500 whose body reads `"<context>: <err>"`. Logged on creation.
    pub fn internal(context: &str, err: impl Display) -> Self {
        let message = format!("{context}: {err}");
        tracing::error!("{message}");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

pub trait OrInternal<T> {
    fn or_internal(self, context: &str) -> ApiResult<T>;
}

impl<T, E> OrInternal<T> for Result<T, E>
where
    E: Display,
{
    fn or_internal(self, context: &str) -> ApiResult<T> {
        self.map_err(|err| ApiError::internal(context, err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_prefixes_the_context() {
        let err = ApiError::internal("Error retrieving movies", "connection reset");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Error retrieving movies: connection reset");
    }

    #[test]
    fn response_carries_status() {
        let response = ApiError::not_found("Movie not found with id: 7").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
