use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use crate::application::errors::UseCaseError;

/// Body for 400 and 500 responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body for 404 responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl From<UseCaseError> for AppError {
    fn from(value: UseCaseError) -> Self {
        match value {
            UseCaseError::NotFound(message) => AppError::NotFound(message.to_string()),
            UseCaseError::Invalid(message) => AppError::BadRequest(message),
            UseCaseError::Storage(err) => AppError::Internal(err),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(value: JsonRejection) -> Self {
        AppError::BadRequest(value.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(MessageResponse { message })).into_response()
            }
            AppError::BadRequest(error) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response()
            }
            AppError::Internal(err) => {
                error!(error = ?err, "http: request failed with storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: err.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Parses a `:id` path segment. Anything that is not a positive integer
/// cannot name a row, so it is reported as `not_found`.
pub fn parse_path_id(raw: &str, not_found: &'static str) -> Result<i32, AppError> {
    raw.parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::NotFound(not_found.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_uses_message_key() {
        let response = AppError::from(UseCaseError::NotFound("Product not found")).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "message": "Product not found" })
        );
    }

    #[tokio::test]
    async fn invalid_input_is_bad_request_with_error_key() {
        let response =
            AppError::from(UseCaseError::Invalid("name must not be empty".into())).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "name must not be empty" })
        );
    }

    #[tokio::test]
    async fn storage_error_text_is_surfaced() {
        let response =
            AppError::from(UseCaseError::Storage(anyhow::anyhow!("relation does not exist")))
                .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "relation does not exist" })
        );
    }

    #[test]
    fn path_ids_must_be_positive_integers() {
        assert_eq!(parse_path_id("12", "Product not found").unwrap(), 12);

        for raw in ["0", "-3", "abc", "1.5", ""] {
            assert!(matches!(
                parse_path_id(raw, "Product not found"),
                Err(AppError::NotFound(_))
            ));
        }
    }
}
