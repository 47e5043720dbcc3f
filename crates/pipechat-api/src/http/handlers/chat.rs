//! POST /api/llm - Chat proxy.
//!
//! The body is parsed as JSON whatever its `Content-Type`.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

use pipechat_types::chat::{ChatReply, ChatTurn};

use crate::http::error::AppError;
use crate::state::AppState;

pub async fn send_message(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatReply>, AppError> {
    let turn: ChatTurn = serde_json::from_slice(&body).map_err(|e| AppError::BadInput {
        message: "Internal server error",
        detail: e.to_string(),
    })?;

    let reply = state.chat.send(&turn).await?;
    Ok(Json(reply))
}
