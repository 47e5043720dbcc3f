//! Application error type mapping to HTTP responses.
//!
//! Every failure surfaces to the browser as `500 {"error": "<message>"}`.
//! Vendor details are logged here and kept out of the body, except for the
//! OAuth callback whose error text is shown as is.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use pipechat_types::error::{AuthError, CrmError, LlmError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// CRM call failed; `message` is the route's generic error text.
    Crm {
        message: &'static str,
        source: CrmError,
    },
    /// OAuth callback failed.
    Auth(AuthError),
    /// Language-model call failed.
    Llm(LlmError),
    /// Request could not be interpreted (bad id, bad body).
    BadInput {
        message: &'static str,
        detail: String,
    },
    /// Generic internal error.
    Internal(String),
}

impl AppError {
    pub fn crm(message: &'static str) -> impl FnOnce(CrmError) -> AppError {
        move |source| AppError::Crm { message, source }
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        AppError::Auth(e)
    }
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        AppError::Llm(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Crm { message, source } => {
                tracing::error!(error = %source, "{message}");
                (*message).to_string()
            }
            AppError::Auth(e) => {
                tracing::error!(error = %e, "OAuth callback failed");
                e.to_string()
            }
            AppError::Llm(e) => {
                tracing::error!(error = %e, "chat request failed");
                "Internal server error".to_string()
            }
            AppError::BadInput { message, detail } => {
                tracing::error!(error = %detail, "{message}");
                (*message).to_string()
            }
            AppError::Internal(detail) => {
                tracing::error!(error = %detail, "internal error");
                "Internal server error".to_string()
            }
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": message })),
        )
            .into_response()
    }
}
