use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";
pub const PROVIDER_FAILURE_MESSAGE: &str = "Failed to generate job description";
pub const UNEXPECTED_FAILURE_MESSAGE: &str = "An unexpected error occurred";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{}", MISSING_FIELDS_MESSAGE)]
    MissingFields,

    /// The text-generation provider rejected or failed the call.
    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Api { message, .. } => AppError::Provider(message),
            LlmError::Http(e) => AppError::Provider(e.to_string()),
            LlmError::Parse(e) => AppError::Provider(e.to_string()),
            // The provider answered, but with nothing usable in it.
            other @ (LlmError::NoChoices | LlmError::EmptyContent) => {
                AppError::Unexpected(other.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::MissingFields => {
                tracing::warn!("Rejected request: {MISSING_FIELDS_MESSAGE}");
                (
                    StatusCode::BAD_REQUEST,
                    json!({ "error": MISSING_FIELDS_MESSAGE }),
                )
            }
            AppError::Provider(details) => {
                tracing::error!("Provider error: {details}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": PROVIDER_FAILURE_MESSAGE, "details": details }),
                )
            }
            AppError::Unexpected(details) => {
                tracing::error!("Unexpected error: {details}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": UNEXPECTED_FAILURE_MESSAGE, "details": details }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_missing_fields_maps_to_400_without_details() {
        let response = AppError::MissingFields.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Missing required fields" })
        );
    }

    #[tokio::test]
    async fn test_provider_error_forwards_details() {
        let response = AppError::Provider("Incorrect API key provided".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({
                "error": "Failed to generate job description",
                "details": "Incorrect API key provided"
            })
        );
    }

    #[tokio::test]
    async fn test_unexpected_error_uses_generic_message() {
        let response = AppError::Unexpected("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "An unexpected error occurred");
        assert_eq!(body["details"], "boom");
    }

    #[test]
    fn test_missing_fields_display_matches_envelope_message() {
        assert_eq!(AppError::MissingFields.to_string(), MISSING_FIELDS_MESSAGE);
    }

    #[test]
    fn test_api_error_becomes_provider_error_with_raw_message() {
        let err = AppError::from(LlmError::Api {
            status: 429,
            message: "You exceeded your current quota".to_string(),
        });
        assert!(matches!(err, AppError::Provider(ref m) if m == "You exceeded your current quota"));
    }

    #[test]
    fn test_missing_choices_is_unexpected() {
        let err = AppError::from(LlmError::NoChoices);
        assert!(matches!(err, AppError::Unexpected(_)));
    }

    #[test]
    fn test_undecodable_provider_body_is_provider_error() {
        let parse_err = serde_json::from_str::<Value>("not json").unwrap_err();
        let err = AppError::from(LlmError::Parse(parse_err));
        assert!(matches!(err, AppError::Provider(_)));
    }
}
