//! Language-model provider implementations.
//!
//! Contains concrete implementations of the [`ResponsesProvider`] trait
//! defined in `pipechat-core`.
//!
//! [`ResponsesProvider`]: pipechat_core::chat::provider::ResponsesProvider

pub mod openai;

use pipechat_core::chat::box_provider::BoxResponsesProvider;
use pipechat_types::config::ChatModelConfig;
use secrecy::ExposeSecret;

use self::openai::OpenAiResponsesProvider;

/// Create the chat backend from its configuration.
pub fn create_provider(config: &ChatModelConfig) -> BoxResponsesProvider {
    BoxResponsesProvider::new(OpenAiResponsesProvider::new(
        config.api_key.expose_secret(),
        &config.base_url,
    ))
}
