//! Chat turn types.
//!
//! No conversation history is held locally: continuity lives upstream and
//! is addressed by the continuation identifier returned with each reply.

use serde::{Deserialize, Serialize};

/// One user message, optionally continuing a previous upstream response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_response_id: Option<String>,
}

impl ChatTurn {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            previous_response_id: None,
        }
    }

    pub fn continuing(mut self, previous_response_id: impl Into<String>) -> Self {
        self.previous_response_id = Some(previous_response_id.into());
        self
    }

    /// The continuation id, with empty strings treated as absent.
    pub fn continuation(&self) -> Option<&str> {
        self.previous_response_id
            .as_deref()
            .filter(|id| !id.is_empty())
    }
}

/// The model's reply plus the identifier for the next turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    pub response_id: String,
}

/// Request sent to a hosted language-model "responses" endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseRequest {
    pub model: String,
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_response_id: Option<String>,
    pub store: bool,
}

/// Text output and id of a completed upstream response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseOutput {
    pub id: String,
    pub output_text: String,
}
