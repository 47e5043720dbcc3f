//! OAuth endpoints.
//!
//! GET /api/auth          - Start consent, or confirm the connection
//! GET /api/auth/callback - Exchange the authorization code

use axum::extract::{Query, State};
use axum::response::{Redirect, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use pipechat_core::crm::factory::PersonsApi;
use pipechat_types::error::AuthError;

use crate::http::error::AppError;
use crate::http::extractors::session::{with_token_cookie, Authorized};
use crate::state::AppState;

/// Unauthenticated callers are redirected to consent by the extractor. An
/// authenticated caller gets the persons list back as a connection check.
pub async fn start(State(state): State<AppState>, auth: Authorized) -> Response {
    let api: PersonsApi = state.crm.create(&auth.config);
    let result = api
        .get_persons()
        .await
        .map(|persons| Json(json!({ "data": persons })))
        .map_err(AppError::crm("Authentication failed"));
    auth.respond(result)
}

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    /// Set by the authorization server when the user denies consent.
    pub error: Option<String>,
}

pub async fn callback(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> Result<Response, AppError> {
    if let Some(error) = params.error {
        return Err(AuthError::Denied(error).into());
    }

    let code = params.code.unwrap_or_default();
    let token = state.sessions.exchange_code(&code).await?;
    tracing::info!("Pipedrive connected");

    Ok(with_token_cookie(Some(&token), Redirect::temporary("/")))
}
