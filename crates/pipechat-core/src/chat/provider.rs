//! ResponsesProvider trait definition.

use pipechat_types::chat::{ResponseOutput, ResponseRequest};
use pipechat_types::error::LlmError;

/// Trait for language-model APIs that keep conversation state upstream and
/// hand back an id to continue from.
///
/// Implementations live in pipechat-infra (e.g., `OpenAiResponsesProvider`).
pub trait ResponsesProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openai").
    fn name(&self) -> &str;

    /// Create one response, optionally continuing `previous_response_id`.
    fn create_response(
        &self,
        request: &ResponseRequest,
    ) -> impl std::future::Future<Output = Result<ResponseOutput, LlmError>> + Send;
}
