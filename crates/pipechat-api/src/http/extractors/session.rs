//! Session extractors.
//!
//! [`CurrentSession`] resolves the cookie token whatever its state.
//! [`Authorized`] additionally requires an authenticated session and rejects
//! with a `307` redirect to the consent URL otherwise, so protected handlers
//! never run without credentials.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::SET_COOKIE;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};

use pipechat_core::auth::session::Session;
use pipechat_types::token::{ApiConfig, StoredToken};

use crate::http::cookie;
use crate::state::AppState;

/// The resolved session for this request.
pub struct CurrentSession(pub Session);

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let raw = cookie::read_token(&parts.headers);
        Ok(CurrentSession(state.sessions.resolve(raw.as_deref()).await))
    }
}

impl CurrentSession {
    /// Attach the refreshed token cookie, if the session was refreshed.
    pub fn respond(&self, response: impl IntoResponse) -> Response {
        with_token_cookie(self.0.refreshed_token(), response)
    }
}

/// An authenticated session's API configuration.
pub struct Authorized {
    pub config: ApiConfig,
    refreshed: Option<StoredToken>,
}

impl FromRequestParts<AppState> for Authorized {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Ok(CurrentSession(session)) = CurrentSession::from_request_parts(parts, state).await;
        match session {
            Session::Authenticated { config, refreshed } => Ok(Authorized { config, refreshed }),
            Session::Unauthenticated { auth_url } => {
                tracing::debug!(path = %parts.uri.path(), "no session, redirecting to consent");
                Err(Redirect::temporary(&auth_url))
            }
        }
    }
}

impl Authorized {
    /// Attach the refreshed token cookie, if the session was refreshed.
    pub fn respond(&self, response: impl IntoResponse) -> Response {
        with_token_cookie(self.refreshed.as_ref(), response)
    }
}

pub fn with_token_cookie(token: Option<&StoredToken>, response: impl IntoResponse) -> Response {
    let mut response = response.into_response();
    if let Some(token) = token {
        match cookie::token_cookie(token) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => tracing::warn!(error = %e, "could not encode refreshed token cookie"),
        }
    }
    response
}
