//! Persons endpoints.
//!
//! GET    /api/persons      - List persons
//! DELETE /api/persons/{id} - Delete one person

use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use serde_json::json;

use pipechat_core::crm::factory::PersonsApi;
use pipechat_types::crm::PersonId;

use crate::http::error::AppError;
use crate::http::extractors::session::Authorized;
use crate::state::AppState;

pub async fn list_persons(State(state): State<AppState>, auth: Authorized) -> Response {
    let api: PersonsApi = state.crm.create(&auth.config);
    let result = api
        .get_persons()
        .await
        .map(|persons| Json(json!({ "data": persons })))
        .map_err(AppError::crm("Failed to fetch persons"));
    auth.respond(result)
}

/// The id is not validated beyond parsing; a non-numeric id fails like a
/// vendor error.
pub async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: Authorized,
) -> Response {
    let result = async {
        let id: PersonId = id.parse().map_err(|e| AppError::BadInput {
            message: "Failed to delete person",
            detail: format!("invalid person id {id:?}: {e}"),
        })?;
        let api: PersonsApi = state.crm.create(&auth.config);
        let deleted = api
            .delete_person(id)
            .await
            .map_err(AppError::crm("Failed to delete person"))?;
        Ok::<_, AppError>(Json(json!({ "data": deleted })))
    }
    .await;
    auth.respond(result)
}
