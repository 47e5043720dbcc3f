//! Startup configuration, read from flags or the environment.

use std::fmt;

use clap::Args;
use secrecy::SecretString;

use pipechat_types::config::{
    ChatModelConfig, OAuthClientConfig, DEFAULT_BASE_URL, DEFAULT_CHAT_MODEL, OPENAI_BASE_URL,
};

/// Legacy name for the public base URL, honoured when `PIPECHAT_BASE_URL`
/// is unset.
const LEGACY_BASE_URL_VAR: &str = "NEXT_PUBLIC_BASE_URL";

#[derive(Args, Clone)]
pub struct AppConfig {
    /// Pipedrive OAuth app client id.
    #[arg(long, env = "PIPEDRIVE_CLIENT_ID", default_value = "", hide_env_values = true)]
    pub client_id: String,

    /// Pipedrive OAuth app client secret.
    #[arg(long, env = "PIPEDRIVE_CLIENT_SECRET", default_value = "", hide_env_values = true)]
    pub client_secret: String,

    /// Callback URL registered with the OAuth app. Defaults to
    /// `<base-url>/api/auth/callback`.
    #[arg(long, env = "PIPEDRIVE_REDIRECT_URI")]
    pub redirect_uri: Option<String>,

    /// Scopes to request, comma or space separated. Empty requests the
    /// scopes configured on the app.
    #[arg(long, env = "PIPEDRIVE_SCOPES", default_value = "")]
    pub scopes: String,

    /// OpenAI API key.
    #[arg(long, env = "OPENAI_API_KEY", default_value = "", hide_env_values = true)]
    pub openai_api_key: String,

    /// Model used for chat replies.
    #[arg(long, env = "OPENAI_MODEL", default_value = DEFAULT_CHAT_MODEL)]
    pub openai_model: String,

    /// OpenAI API base URL.
    #[arg(long, env = "OPENAI_BASE_URL", default_value = OPENAI_BASE_URL)]
    pub openai_base_url: String,

    /// Public URL this server is reachable at.
    #[arg(long, env = "PIPECHAT_BASE_URL")]
    pub base_url: Option<String>,

    /// Timeout for outbound Pipedrive requests, in seconds.
    #[arg(long, env = "PIPECHAT_HTTP_TIMEOUT", default_value_t = 60)]
    pub http_timeout_secs: u64,
}

impl AppConfig {
    pub fn base_url(&self) -> String {
        self.base_url
            .clone()
            .or_else(|| std::env::var(LEGACY_BASE_URL_VAR).ok())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    pub fn redirect_uri(&self) -> String {
        self.redirect_uri.clone().filter(|uri| !uri.is_empty()).unwrap_or_else(|| {
            format!("{}/api/auth/callback", self.base_url().trim_end_matches('/'))
        })
    }

    pub fn scopes(&self) -> Vec<String> {
        self.scopes
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect()
    }

    pub fn oauth(&self) -> OAuthClientConfig {
        OAuthClientConfig::pipedrive(
            self.client_id.clone(),
            SecretString::from(self.client_secret.clone()),
            self.redirect_uri(),
        )
        .with_scopes(self.scopes())
    }

    pub fn chat_model(&self) -> ChatModelConfig {
        let mut config = ChatModelConfig::openai(SecretString::from(self.openai_api_key.clone()));
        config.model = self.openai_model.clone();
        config.base_url = self.openai_base_url.clone();
        config
    }

    /// Log which settings are missing. The server still starts; the
    /// affected routes fail at request time.
    pub fn warn_missing(&self) {
        if self.client_id.is_empty() || self.client_secret.is_empty() {
            tracing::warn!("PIPEDRIVE_CLIENT_ID / PIPEDRIVE_CLIENT_SECRET not set; login will fail");
        }
        if self.openai_api_key.is_empty() {
            tracing::warn!("OPENAI_API_KEY not set; chat requests will fail");
        }
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("redirect_uri", &self.redirect_uri())
            .field("scopes", &self.scopes())
            .field("openai_api_key", &"[REDACTED]")
            .field("openai_model", &self.openai_model)
            .field("openai_base_url", &self.openai_base_url)
            .field("base_url", &self.base_url())
            .field("http_timeout_secs", &self.http_timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AppConfig {
        AppConfig {
            client_id: "id".into(),
            client_secret: "very-secret".into(),
            redirect_uri: None,
            scopes: "base, contacts:full deals:read".into(),
            openai_api_key: "sk-live".into(),
            openai_model: "gpt-4.1".into(),
            openai_base_url: OPENAI_BASE_URL.into(),
            base_url: Some("https://crm.example.com/".into()),
            http_timeout_secs: 60,
        }
    }

    #[test]
    fn test_redirect_uri_derived_from_base_url() {
        assert_eq!(
            config().redirect_uri(),
            "https://crm.example.com/api/auth/callback"
        );

        let mut explicit = config();
        explicit.redirect_uri = Some("https://other.example.com/cb".into());
        assert_eq!(explicit.redirect_uri(), "https://other.example.com/cb");
    }

    #[test]
    fn test_scopes_split() {
        assert_eq!(config().scopes(), vec!["base", "contacts:full", "deals:read"]);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let out = format!("{:?}", config());
        assert!(!out.contains("very-secret"));
        assert!(!out.contains("sk-live"));
        assert!(out.contains("[REDACTED]"));
    }
}
