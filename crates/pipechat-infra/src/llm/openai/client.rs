//! OpenAiResponsesProvider -- concrete [`ResponsesProvider`] for the OpenAI
//! Responses API (`POST /responses`), built on [`async_openai`].

use async_openai::config::OpenAIConfig;
use async_openai::error::OpenAIError;
use async_openai::types::responses::{CreateResponse, CreateResponseArgs, InputParam};
use async_openai::Client;

use pipechat_core::chat::provider::ResponsesProvider;
use pipechat_types::chat::{ResponseOutput, ResponseRequest};
use pipechat_types::error::LlmError;

/// OpenAI Responses API provider.
///
/// Does NOT derive Debug; the inner `async_openai::Client` holds the API key.
pub struct OpenAiResponsesProvider {
    client: Client<OpenAIConfig>,
}

impl OpenAiResponsesProvider {
    pub fn new(api_key: &str, base_url: &str) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url);
        Self {
            client: Client::with_config(config),
        }
    }

    fn build_request(request: &ResponseRequest) -> Result<CreateResponse, LlmError> {
        let mut args = CreateResponseArgs::default();
        args.model(request.model.as_str())
            .input(InputParam::Text(request.input.clone()))
            .store(request.store);
        if let Some(previous) = &request.previous_response_id {
            args.previous_response_id(previous.as_str());
        }
        args.build().map_err(map_openai_error)
    }
}

/// Map an `async_openai` error onto [`LlmError`], keeping the API's message.
fn map_openai_error(err: OpenAIError) -> LlmError {
    match &err {
        OpenAIError::ApiError(api_err) => {
            let code = api_err.code.as_deref().unwrap_or("");
            let error_type = api_err.r#type.as_deref().unwrap_or("");

            if code == "invalid_api_key"
                || error_type == "authentication_error"
                || api_err.message.contains("Incorrect API key")
            {
                LlmError::AuthenticationFailed
            } else if code == "rate_limit_exceeded" || error_type == "rate_limit_error" {
                LlmError::RateLimited
            } else {
                LlmError::Provider {
                    message: api_err.message.clone(),
                }
            }
        }
        OpenAIError::Reqwest(reqwest_err) => match reqwest_err.status().map(|s| s.as_u16()) {
            Some(401) => LlmError::AuthenticationFailed,
            Some(429) => LlmError::RateLimited,
            _ => LlmError::Provider {
                message: err.to_string(),
            },
        },
        OpenAIError::JSONDeserialize(_, content) => {
            LlmError::Deserialization(format!("failed to parse response: {content}"))
        }
        _ => LlmError::Provider {
            message: err.to_string(),
        },
    }
}

impl ResponsesProvider for OpenAiResponsesProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn create_response(&self, request: &ResponseRequest) -> Result<ResponseOutput, LlmError> {
        let oai_request = Self::build_request(request)?;

        let response = self
            .client
            .responses()
            .create(oai_request)
            .await
            .map_err(map_openai_error)?;

        Ok(ResponseOutput {
            output_text: response.output_text().unwrap_or_default(),
            id: response.id,
        })
    }
}
