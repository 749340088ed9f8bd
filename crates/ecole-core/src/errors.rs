//! Application error type with HTTP response conversion.
//!
//! Every guard rejection is terminal for the request and is rendered as a JSON body
//! carrying a single `message` field:
//!
//! | Variant | Status | Message |
//! |---------|--------|---------|
//! | [`AppError::MissingToken`] | 403 | `No token provided!` |
//! | [`AppError::InvalidToken`] | 401 | `Unauthorized!` |
//! | [`AppError::RoleRequired`] | 403 | gate specific, e.g. `Role admin requis!` |
//! | [`AppError::LookupFailed`] | 500 | `Role lookup failed!` |
//! | [`AppError::LookupTimedOut`] | 503 | `Role lookup timed out!` |
//! | [`AppError::Internal`] | 500 | `Internal server error` |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("No token provided!")]
    MissingToken,

    #[error("Unauthorized!")]
    InvalidToken,

    #[error("{0}")]
    RoleRequired(&'static str),

    #[error("role lookup failed: {0}")]
    LookupFailed(anyhow::Error),

    #[error("role lookup timed out")]
    LookupTimedOut,

    #[error("internal error: {0}")]
    Internal(anyhow::Error),
}

impl AppError {
    pub fn lookup_failed<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::LookupFailed(err.into())
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::Internal(err.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingToken | AppError::RoleRequired(_) => StatusCode::FORBIDDEN,
            AppError::InvalidToken => StatusCode::UNAUTHORIZED,
            AppError::LookupTimedOut => StatusCode::SERVICE_UNAVAILABLE,
            AppError::LookupFailed(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message sent to the client. Storage details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            AppError::LookupFailed(_) => "Role lookup failed!".to_string(),
            AppError::LookupTimedOut => "Role lookup timed out!".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::LookupFailed(err) | AppError::Internal(err) => {
                tracing::error!(error = %err, "request failed");
            }
            AppError::LookupTimedOut => tracing::warn!("role lookup timed out"),
            _ => {}
        }

        let body = Json(json!({
            "message": self.public_message()
        }));

        (self.status(), body).into_response()
    }
}
