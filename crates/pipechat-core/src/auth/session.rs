//! Session manager.
//!
//! Resolves the token carried by the browser into either an authenticated
//! API configuration or a consent URL. Every failure along the way (bad
//! JSON, refresh rejected, network error) is treated exactly like a missing
//! token: the caller is sent back through authorization. There is no retry.

use chrono::{DateTime, Utc};

use pipechat_types::error::AuthError;
use pipechat_types::token::{ApiConfig, StoredToken, DEFAULT_TOKEN_LIFETIME_SECS};

use super::box_provider::BoxOAuthProvider;

/// Outcome of resolving a stored token.
#[derive(Debug, Clone)]
pub enum Session {
    Authenticated {
        config: ApiConfig,
        /// Set when the token was refreshed and must be written back to the
        /// browser.
        refreshed: Option<StoredToken>,
    },
    Unauthenticated {
        auth_url: String,
    },
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    /// Consent URL, present only when unauthenticated.
    pub fn auth_url(&self) -> Option<&str> {
        match self {
            Session::Unauthenticated { auth_url } => Some(auth_url),
            Session::Authenticated { .. } => None,
        }
    }

    pub fn refreshed_token(&self) -> Option<&StoredToken> {
        match self {
            Session::Authenticated { refreshed, .. } => refreshed.as_ref(),
            Session::Unauthenticated { .. } => None,
        }
    }
}

/// Turns the serialized cookie token into a [`Session`].
pub struct SessionManager {
    oauth: BoxOAuthProvider,
}

impl SessionManager {
    pub fn new(oauth: BoxOAuthProvider) -> Self {
        Self { oauth }
    }

    /// URL to send the user to for consent.
    pub fn authorization_url(&self) -> String {
        self.oauth.authorization_url()
    }

    /// Resolve a raw cookie value (JSON) into a session.
    pub async fn resolve(&self, raw_token: Option<&str>) -> Session {
        self.resolve_at(raw_token, Utc::now()).await
    }

    /// Like [`resolve`](Self::resolve) with an explicit clock.
    pub async fn resolve_at(&self, raw_token: Option<&str>, now: DateTime<Utc>) -> Session {
        let Some(raw) = raw_token.filter(|r| !r.trim().is_empty()) else {
            return self.unauthenticated();
        };

        match self.authenticate(raw, now).await {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(error = %e, "stored session unusable, requiring re-authorization");
                self.unauthenticated()
            }
        }
    }

    /// Authorization-code grant. The returned token has `expires_at` set.
    pub async fn exchange_code(&self, code: &str) -> Result<StoredToken, AuthError> {
        self.exchange_code_at(code, Utc::now()).await
    }

    pub async fn exchange_code_at(
        &self,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<StoredToken, AuthError> {
        if code.trim().is_empty() {
            return Err(AuthError::MissingCode);
        }
        let token = self.oauth.exchange_code(code).await?;
        tracing::info!("authorization code exchanged for session token");
        Ok(stamp(token, now, DEFAULT_TOKEN_LIFETIME_SECS))
    }

    async fn authenticate(&self, raw: &str, now: DateTime<Utc>) -> Result<Session, AuthError> {
        let token =
            StoredToken::from_json(raw).map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        if !token.is_expired(now) {
            return Ok(Session::Authenticated {
                config: ApiConfig::from_token(&token),
                refreshed: None,
            });
        }

        let lifetime = if token.expires_in > 0 {
            token.expires_in
        } else {
            DEFAULT_TOKEN_LIFETIME_SECS
        };
        let mut fresh = stamp(self.oauth.refresh(&token).await?, now, lifetime);
        // Some servers omit the refresh token when it is not rotated.
        if fresh.refresh_token.is_empty() {
            fresh.refresh_token = token.refresh_token.clone();
        }
        if fresh.api_domain.is_none() {
            fresh.api_domain = token.api_domain.clone();
        }
        tracing::info!("session token refreshed");

        Ok(Session::Authenticated {
            config: ApiConfig::from_token(&fresh),
            refreshed: Some(fresh),
        })
    }

    fn unauthenticated(&self) -> Session {
        Session::Unauthenticated {
            auth_url: self.authorization_url(),
        }
    }
}

/// Give a freshly issued token an `expires_at`. A token without a lifetime
/// gets `fallback_lifetime`, otherwise it would count as expired forever.
fn stamp(mut token: StoredToken, now: DateTime<Utc>, fallback_lifetime: i64) -> StoredToken {
    if token.expires_at.is_some() {
        return token;
    }
    if token.expires_in <= 0 {
        token.expires_in = fallback_lifetime;
    }
    token.with_issued_at(now)
}
