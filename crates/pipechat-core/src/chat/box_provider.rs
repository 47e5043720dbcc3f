//! BoxResponsesProvider -- object-safe dynamic dispatch wrapper for
//! ResponsesProvider.

use std::future::Future;
use std::pin::Pin;

use pipechat_types::chat::{ResponseOutput, ResponseRequest};
use pipechat_types::error::LlmError;

use super::provider::ResponsesProvider;

/// Object-safe version of [`ResponsesProvider`] with boxed futures.
pub trait ResponsesProviderDyn: Send + Sync {
    fn name(&self) -> &str;

    fn create_response_boxed<'a>(
        &'a self,
        request: &'a ResponseRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ResponseOutput, LlmError>> + Send + 'a>>;
}

impl<T: ResponsesProvider> ResponsesProviderDyn for T {
    fn name(&self) -> &str {
        ResponsesProvider::name(self)
    }

    fn create_response_boxed<'a>(
        &'a self,
        request: &'a ResponseRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ResponseOutput, LlmError>> + Send + 'a>> {
        Box::pin(self.create_response(request))
    }
}

/// Type-erased language-model provider.
pub struct BoxResponsesProvider {
    inner: Box<dyn ResponsesProviderDyn + Send + Sync>,
}

impl BoxResponsesProvider {
    pub fn new<T: ResponsesProvider + 'static>(provider: T) -> Self {
        Self {
            inner: Box::new(provider),
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub async fn create_response(
        &self,
        request: &ResponseRequest,
    ) -> Result<ResponseOutput, LlmError> {
        self.inner.create_response_boxed(request).await
    }
}
