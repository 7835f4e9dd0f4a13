use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use storage::error::{ScoutError, StorageError};
use validator::ValidationErrors;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    Scout(ScoutError),
    Validation(ValidationErrors),
    BadRequest(String),
    /// The last refresh failed; carries its message until a refresh succeeds.
    DataUnavailable(String),
    NotFound,
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Scout(e) => write!(f, "{}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::DataUnavailable(msg) => write!(f, "Scouting data unavailable: {}", msg),
            Self::NotFound => write!(f, "Resource not found"),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Self::Storage(StorageError::NotFound) => StatusCode::NOT_FOUND,
            Self::Storage(StorageError::ConstraintViolation(_)) => StatusCode::CONFLICT,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Scout(ScoutError::Fetch(_)) => StatusCode::BAD_GATEWAY,
            Self::Scout(ScoutError::Save(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::DataUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::NotFound => StatusCode::NOT_FOUND,
        };

        let body = match &self {
            Self::Storage(StorageError::NotFound) | Self::NotFound => {
                json!({
                    "error": "Resource not found"
                })
            }
            Self::Storage(StorageError::ConstraintViolation(msg)) => {
                json!({
                    "error": msg
                })
            }
            Self::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                json!({
                    "error": "An internal error occurred"
                })
            }
            Self::Scout(ScoutError::Fetch(e)) => {
                tracing::error!("Fetch error: {:?}", e);
                json!({
                    "error": "Failed to fetch scouting data"
                })
            }
            Self::Scout(ScoutError::Save(e)) => {
                tracing::error!("Session save error: {:?}", e);
                json!({
                    "error": "Failed to save scouting session"
                })
            }
            Self::Validation(errors) => {
                let field_errors: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errors)| {
                        errors.iter().map(move |e| {
                            format!(
                                "{}: {}",
                                field,
                                e.message
                                    .as_ref()
                                    .map(|m| m.to_string())
                                    .unwrap_or_else(|| e.code.to_string())
                            )
                        })
                    })
                    .collect();

                json!({
                    "error": "Validation failed",
                    "details": field_errors
                })
            }
            Self::BadRequest(msg) => {
                json!({
                    "error": msg
                })
            }
            Self::DataUnavailable(msg) => {
                json!({
                    "error": "Scouting data unavailable",
                    "details": msg
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<ScoutError> for WebError {
    fn from(error: ScoutError) -> Self {
        Self::Scout(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn error_to_response(err: WebError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn test_fetch_and_save_failures_map_to_different_statuses() {
        let (status, json) =
            error_to_response(WebError::Scout(ScoutError::Fetch(StorageError::NotFound))).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json["error"], "Failed to fetch scouting data");

        let (status, json) =
            error_to_response(WebError::Scout(ScoutError::Save(StorageError::NotFound))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Failed to save scouting session");
    }

    #[tokio::test]
    async fn test_constraint_violation_is_conflict() {
        let err = WebError::Storage(StorageError::ConstraintViolation(
            "duplicate session".to_string(),
        ));
        let (status, json) = error_to_response(err).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["error"], "duplicate session");
    }

    #[tokio::test]
    async fn test_data_unavailable_carries_message() {
        let err = WebError::DataUnavailable("connection refused".to_string());
        let (status, json) = error_to_response(err).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json["details"], "connection refused");
    }
}
