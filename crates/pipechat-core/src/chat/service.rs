//! Chat service.
//!
//! Stateless: each call forwards one turn upstream with the configured model
//! and persistence flag. Continuity is entirely the provider's, addressed by
//! the id chain.

use pipechat_types::chat::{ChatReply, ChatTurn, ResponseRequest};
use pipechat_types::error::LlmError;

use super::box_provider::BoxResponsesProvider;

pub struct ChatService {
    provider: BoxResponsesProvider,
    model: String,
    store: bool,
}

impl ChatService {
    pub fn new(provider: BoxResponsesProvider, model: impl Into<String>, store: bool) -> Self {
        Self {
            provider,
            model: model.into(),
            store,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Forward one turn and return the reply text with the next turn's id.
    pub async fn send(&self, turn: &ChatTurn) -> Result<ChatReply, LlmError> {
        let request = ResponseRequest {
            model: self.model.clone(),
            input: turn.message.clone(),
            previous_response_id: turn.continuation().map(str::to_owned),
            store: self.store,
        };

        tracing::debug!(
            provider = self.provider.name(),
            model = %self.model,
            continued = request.previous_response_id.is_some(),
            "forwarding chat turn"
        );

        let output = self.provider.create_response(&request).await?;

        Ok(ChatReply {
            response: output.output_text,
            response_id: output.id,
        })
    }
}
