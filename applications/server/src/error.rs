/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mixtape_core::{MixtapeError, ValidationErrors};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

/// Every way an action can fail, each mapped to one status code
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Malformed input: missing parameter envelope, bad id, unparsable body
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(MixtapeError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<MixtapeError> for ServerError {
    fn from(err: MixtapeError) -> Self {
        match err {
            MixtapeError::PlaylistNotFound(id) => {
                ServerError::NotFound(format!("Playlist not found: {}", id))
            }
            MixtapeError::Validation(errors) => ServerError::Validation(errors),
            other => ServerError::Database(other),
        }
    }
}

impl From<ValidationErrors> for ServerError {
    fn from(errors: ValidationErrors) -> Self {
        ServerError::Validation(errors)
    }
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServerError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ServerError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ServerError::Internal(_)
            | ServerError::Database(_)
            | ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            ServerError::NotFound(msg)
            | ServerError::BadRequest(msg)
            | ServerError::UnsupportedMediaType(msg)
            | ServerError::PayloadTooLarge(msg) => {
                tracing::warn!(status = status.as_u16(), "Rejected request: {}", msg);
                json!({ "error": msg })
            }
            ServerError::Validation(errors) => {
                tracing::warn!("Validation failed: {}", errors);
                json!({
                    "error": format!("Validation failed: {}", errors),
                    "fields": errors,
                })
            }
            ServerError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                json!({ "error": "Database error" })
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                json!({ "error": "Configuration error" })
            }
            ServerError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                json!({ "error": "Internal server error" })
            }
        };

        (status, Json(body)).into_response()
    }
}
