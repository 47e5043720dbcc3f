//! GET /api/deals - List deals.

use axum::extract::State;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use pipechat_core::crm::factory::DealsApi;

use crate::http::error::AppError;
use crate::http::extractors::session::Authorized;
use crate::state::AppState;

pub async fn list_deals(State(state): State<AppState>, auth: Authorized) -> Response {
    let api: DealsApi = state.crm.create(&auth.config);
    let result = api
        .get_deals()
        .await
        .map(|deals| Json(json!({ "data": deals })))
        .map_err(AppError::crm("Failed to fetch deals"));
    auth.respond(result)
}
