//! OAuth2 session token issued by the CRM authorization server.
//!
//! The token travels as JSON inside a single browser cookie. It is created
//! by the authorization-code exchange, refreshed in place when expired, and
//! never stored server-side.

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Seconds before `expires_at` at which the token is already treated as expired.
pub const EXPIRY_SKEW_SECS: i64 = 60;

/// Access-token lifetime assumed when the authorization server omits `expires_in`.
pub const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 3599;

/// API base used when the token carries no `api_domain`.
pub const DEFAULT_API_DOMAIN: &str = "https://api.pipedrive.com";

/// The serialized OAuth2 credential pair plus the metadata the CRM returns
/// alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredToken {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub scope: String,
    /// Company-specific API host, e.g. `https://acme.pipedrive.com`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_domain: Option<String>,
    /// Lifetime in seconds as issued.
    #[serde(default)]
    pub expires_in: i64,
    /// Unix timestamp (seconds) after which the access token is invalid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

impl StoredToken {
    /// Parse a token from its cookie JSON.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Serialize for storage in the cookie.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Stamp `expires_at` from `expires_in`, relative to `issued_at`.
    pub fn with_issued_at(mut self, issued_at: DateTime<Utc>) -> Self {
        if self.expires_in > 0 {
            self.expires_at = Some(issued_at.timestamp() + self.expires_in);
        }
        self
    }

    /// Whether the access token must be refreshed before use.
    ///
    /// A token without a known expiry is treated as expired.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => now.timestamp() + EXPIRY_SKEW_SECS >= expires_at,
            None => true,
        }
    }

    /// REST base path for API clients bound to this token.
    pub fn base_path(&self) -> String {
        let domain = self
            .api_domain
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_API_DOMAIN);
        format!("{}/api/v1", domain.trim_end_matches('/'))
    }
}

/// Configuration handed to CRM API clients once a session is authenticated.
///
/// The access token is wrapped in [`SecretString`] and never appears in
/// `Debug` output.
#[derive(Debug)]
pub struct ApiConfig {
    pub access_token: SecretString,
    pub base_path: String,
}

impl Clone for ApiConfig {
    fn clone(&self) -> Self {
        Self {
            access_token: SecretString::from(self.access_token.expose_secret().to_owned()),
            base_path: self.base_path.clone(),
        }
    }
}

impl ApiConfig {
    pub fn from_token(token: &StoredToken) -> Self {
        Self {
            access_token: SecretString::from(token.access_token.clone()),
            base_path: token.base_path(),
        }
    }
}
