//! OAuthProvider trait definition.

use pipechat_types::error::AuthError;
use pipechat_types::token::StoredToken;

/// Trait for OAuth2 authorization servers (authorization-code grant).
///
/// Implementations live in pipechat-infra (e.g., `PipedriveOAuthClient`).
/// Returned tokens carry `expires_in` as issued; the session manager stamps
/// `expires_at`.
pub trait OAuthProvider: Send + Sync {
    /// URL the user is sent to for consent.
    fn authorization_url(&self) -> String;

    /// Exchange an authorization code for a token.
    fn exchange_code(
        &self,
        code: &str,
    ) -> impl std::future::Future<Output = Result<StoredToken, AuthError>> + Send;

    /// Obtain a fresh access token using the token's refresh token.
    fn refresh(
        &self,
        token: &StoredToken,
    ) -> impl std::future::Future<Output = Result<StoredToken, AuthError>> + Send;
}
