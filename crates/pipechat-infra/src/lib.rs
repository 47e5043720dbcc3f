//! Infrastructure layer for Pipechat.
//!
//! Contains implementations of the provider traits defined in `pipechat-core`:
//! the Pipedrive OAuth2 server and REST API, and the OpenAI Responses API.

pub mod llm;
pub mod pipedrive;

use std::time::Duration;

/// Build the shared HTTP client used by every adapter.
pub fn http_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("pipechat/", env!("CARGO_PKG_VERSION")))
        .build()
}
