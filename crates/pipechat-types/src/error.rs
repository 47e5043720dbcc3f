use thiserror::Error;

/// Errors from the OAuth2 session lifecycle.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid session token: {0}")]
    InvalidToken(String),

    #[error("missing authorization code")]
    MissingCode,

    #[error("authorization denied: {0}")]
    Denied(String),

    #[error("token request failed: {0}")]
    Request(String),

    #[error("token endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

/// Errors from CRM REST calls.
#[derive(Debug, Error)]
pub enum CrmError {
    #[error("CRM request failed: {0}")]
    Request(String),

    #[error("CRM returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("CRM reported failure: {0}")]
    Unsuccessful(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

/// Errors from the hosted language-model API.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("rate limited")]
    RateLimited,

    #[error("deserialization error: {0}")]
    Deserialization(String),
}
