//! BoxOAuthProvider -- object-safe dynamic dispatch wrapper for OAuthProvider.
//!
//! 1. Define an object-safe `OAuthProviderDyn` trait with boxed futures
//! 2. Blanket-impl `OAuthProviderDyn` for all `T: OAuthProvider`
//! 3. `BoxOAuthProvider` wraps `Box<dyn OAuthProviderDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use pipechat_types::error::AuthError;
use pipechat_types::token::StoredToken;

use super::provider::OAuthProvider;

/// Object-safe version of [`OAuthProvider`] with boxed futures.
pub trait OAuthProviderDyn: Send + Sync {
    fn authorization_url(&self) -> String;

    fn exchange_code_boxed<'a>(
        &'a self,
        code: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<StoredToken, AuthError>> + Send + 'a>>;

    fn refresh_boxed<'a>(
        &'a self,
        token: &'a StoredToken,
    ) -> Pin<Box<dyn Future<Output = Result<StoredToken, AuthError>> + Send + 'a>>;
}

impl<T: OAuthProvider> OAuthProviderDyn for T {
    fn authorization_url(&self) -> String {
        OAuthProvider::authorization_url(self)
    }

    fn exchange_code_boxed<'a>(
        &'a self,
        code: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<StoredToken, AuthError>> + Send + 'a>> {
        Box::pin(self.exchange_code(code))
    }

    fn refresh_boxed<'a>(
        &'a self,
        token: &'a StoredToken,
    ) -> Pin<Box<dyn Future<Output = Result<StoredToken, AuthError>> + Send + 'a>> {
        Box::pin(self.refresh(token))
    }
}

/// Type-erased OAuth provider, so the session manager can be built with a
/// real authorization server or a test double.
pub struct BoxOAuthProvider {
    inner: Box<dyn OAuthProviderDyn + Send + Sync>,
}

impl BoxOAuthProvider {
    pub fn new<T: OAuthProvider + 'static>(provider: T) -> Self {
        Self {
            inner: Box::new(provider),
        }
    }

    pub fn authorization_url(&self) -> String {
        self.inner.authorization_url()
    }

    pub async fn exchange_code(&self, code: &str) -> Result<StoredToken, AuthError> {
        self.inner.exchange_code_boxed(code).await
    }

    pub async fn refresh(&self, token: &StoredToken) -> Result<StoredToken, AuthError> {
        self.inner.refresh_boxed(token).await
    }
}
