//! API errors and their HTTP mapping.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use roi_profile::GenerationError;
use roi_render::RenderError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Unknown product '{0}'")]
    UnknownProduct(String),
    #[error("Profile generation failed: {0}")]
    Generation(#[from] GenerationError),
    #[error("Request superseded by a newer one")]
    Superseded,
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::UnknownProduct(_) => StatusCode::NOT_FOUND,
            ApiError::Generation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Superseded => StatusCode::CONFLICT,
            ApiError::Render(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::UnknownProduct(_) => "UNKNOWN_PRODUCT",
            ApiError::Generation(_) => "GENERATION_FAILED",
            ApiError::Superseded => "SUPERSEDED",
            ApiError::Render(_) => "RENDER_FAILED",
            ApiError::Internal(_) => "INTERNAL",
        }
    }

    /// Message safe to show an end user
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Generation(err) => err.user_message().to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(json!({
            "error": self.code(),
            "message": self.public_message(),
            "detail": self.to_string(),
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roi_profile::error::USER_MESSAGE;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::BadRequest("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(GenerationError::NoMatch("x".into())).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(ApiError::Superseded.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_generation_errors_use_user_message() {
        let err = ApiError::from(GenerationError::Malformed("eof".into()));
        assert_eq!(err.public_message(), USER_MESSAGE);
        assert!(err.to_string().contains("eof"));
    }
}
