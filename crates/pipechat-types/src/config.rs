//! Vendor configuration values.
//!
//! These are built once at startup from the process environment and passed
//! explicitly into the session manager and provider constructors.

use secrecy::SecretString;

pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:3000/api/auth/callback";
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const PIPEDRIVE_AUTHORIZE_URL: &str = "https://oauth.pipedrive.com/oauth/authorize";
pub const PIPEDRIVE_TOKEN_URL: &str = "https://oauth.pipedrive.com/oauth/token";
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4.1";

/// OAuth2 client registration with the CRM.
#[derive(Debug)]
pub struct OAuthClientConfig {
    pub client_id: String,
    pub client_secret: SecretString,
    pub redirect_uri: String,
    /// Requested scopes; empty means the scopes configured on the app.
    pub scopes: Vec<String>,
    pub authorize_url: String,
    pub token_url: String,
}

impl OAuthClientConfig {
    /// Pipedrive endpoints with the given client registration.
    pub fn pipedrive(
        client_id: impl Into<String>,
        client_secret: SecretString,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret,
            redirect_uri: redirect_uri.into(),
            scopes: Vec::new(),
            authorize_url: PIPEDRIVE_AUTHORIZE_URL.to_string(),
            token_url: PIPEDRIVE_TOKEN_URL.to_string(),
        }
    }

    pub fn with_scopes(mut self, scopes: Vec<String>) -> Self {
        self.scopes = scopes;
        self
    }
}

/// Hosted language-model settings used by the chat proxy.
#[derive(Debug)]
pub struct ChatModelConfig {
    pub api_key: SecretString,
    pub base_url: String,
    pub model: String,
    /// Whether the provider keeps responses so they can be continued.
    pub store: bool,
}

impl ChatModelConfig {
    pub fn openai(api_key: SecretString) -> Self {
        Self {
            api_key,
            base_url: OPENAI_BASE_URL.to_string(),
            model: DEFAULT_CHAT_MODEL.to_string(),
            store: true,
        }
    }
}
