use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error;

use crate::dao::storage::StorageError;

/// Message sent to clients when a write could not be persisted.
const PERSISTENCE_FAILURE_MESSAGE: &str = "failed to persist games";

/// Errors that can occur in service layer operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The collection could not be persisted; nothing was changed.
    #[error("storage failure")]
    Storage(#[from] StorageError),
    /// Invalid input provided by the client.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),
}

/// Application-level errors that are converted to HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad request with invalid input.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Requested resource not found.
    #[error("not found: {0}")]
    NotFound(String),
    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Storage(source) => {
                tracing::error!(error = %source, "failed to persist games");
                AppError::Internal(PERSISTENCE_FAILURE_MESSAGE.into())
            }
            ServiceError::InvalidInput(message) => AppError::BadRequest(message),
            ServiceError::NotFound(message) => AppError::NotFound(message),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            AppError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        let payload = Json(ErrorBody { message });

        (status, payload).into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::{io, path::PathBuf};

    use http_body_util::BodyExt;

    use super::*;

    async fn message(err: ServiceError) -> String {
        let response = AppError::from(err).into_response();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        body["message"].as_str().unwrap().to_owned()
    }

    #[tokio::test]
    async fn body_carries_the_bare_message() {
        assert_eq!(
            message(ServiceError::InvalidInput("ID could not be converted to integer".into())).await,
            "ID could not be converted to integer"
        );
        assert_eq!(
            message(ServiceError::NotFound("No game found with specified ID".into())).await,
            "No game found with specified ID"
        );
    }

    #[tokio::test]
    async fn storage_details_stay_out_of_the_body() {
        let err = ServiceError::Storage(StorageError::Write {
            path: PathBuf::from("/srv/data/games.json.tmp"),
            source: io::Error::other("disk full"),
        });

        let body = message(err).await;
        assert_eq!(body, "failed to persist games");
        assert!(!body.contains("/srv/data"));
    }

    #[test]
    fn service_errors_map_to_http_statuses() {
        let cases = [
            (
                ServiceError::InvalidInput("bad".into()),
                StatusCode::BAD_REQUEST,
            ),
            (ServiceError::NotFound("gone".into()), StatusCode::NOT_FOUND),
            (
                ServiceError::Storage(StorageError::Unavailable("disk full".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            let response = AppError::from(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }
}
