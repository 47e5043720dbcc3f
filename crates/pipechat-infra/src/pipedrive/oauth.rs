//! PipedriveOAuthClient -- concrete [`OAuthProvider`] for Pipedrive.
//!
//! Token requests are form-encoded and authenticated with HTTP basic auth
//! using the client id and secret. The secret is only exposed while the
//! request is being built.

use pipechat_core::auth::provider::OAuthProvider;
use pipechat_types::config::OAuthClientConfig;
use pipechat_types::error::AuthError;
use pipechat_types::token::StoredToken;
use secrecy::ExposeSecret;
use serde::Deserialize;

/// Pipedrive OAuth2 client.
///
/// Does NOT derive Debug; it holds the client secret.
pub struct PipedriveOAuthClient {
    client: reqwest::Client,
    config: OAuthClientConfig,
}

/// Token endpoint reply. Only `access_token` is guaranteed.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    scope: Option<String>,
    #[serde(default)]
    api_domain: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
}

impl From<TokenResponse> for StoredToken {
    fn from(resp: TokenResponse) -> Self {
        StoredToken {
            access_token: resp.access_token,
            refresh_token: resp.refresh_token.unwrap_or_default(),
            token_type: resp.token_type.unwrap_or_else(|| "Bearer".to_string()),
            scope: resp.scope.unwrap_or_default(),
            api_domain: resp.api_domain,
            expires_in: resp.expires_in.unwrap_or_default(),
            expires_at: None,
        }
    }
}

impl PipedriveOAuthClient {
    pub fn new(client: reqwest::Client, config: OAuthClientConfig) -> Self {
        Self { client, config }
    }

    async fn token_request(&self, params: &[(&str, &str)]) -> Result<StoredToken, AuthError> {
        let response = self
            .client
            .post(&self.config.token_url)
            .basic_auth(
                &self.config.client_id,
                Some(self.config.client_secret.expose_secret()),
            )
            .form(params)
            .send()
            .await
            .map_err(|e| AuthError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| AuthError::Deserialization(format!("failed to parse token response: {e}")))?;

        Ok(token.into())
    }
}

impl OAuthProvider for PipedriveOAuthClient {
    fn authorization_url(&self) -> String {
        let scope = self.config.scopes.join(" ");
        let mut params = vec![
            ("client_id", self.config.client_id.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
        ];
        if !scope.is_empty() {
            params.push(("scope", scope.as_str()));
        }

        match reqwest::Url::parse_with_params(&self.config.authorize_url, &params) {
            Ok(url) => url.to_string(),
            Err(e) => {
                tracing::error!(
                    authorize_url = %self.config.authorize_url,
                    error = %e,
                    "invalid authorize URL"
                );
                self.config.authorize_url.clone()
            }
        }
    }

    async fn exchange_code(&self, code: &str) -> Result<StoredToken, AuthError> {
        tracing::debug!(token_url = %self.config.token_url, "exchanging authorization code");
        self.token_request(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", self.config.redirect_uri.as_str()),
        ])
        .await
    }

    async fn refresh(&self, token: &StoredToken) -> Result<StoredToken, AuthError> {
        if token.refresh_token.is_empty() {
            return Err(AuthError::InvalidToken("no refresh token".to_string()));
        }
        tracing::debug!(token_url = %self.config.token_url, "refreshing access token");
        self.token_request(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", token.refresh_token.as_str()),
        ])
        .await
    }
}
