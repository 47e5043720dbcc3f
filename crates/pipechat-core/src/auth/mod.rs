//! OAuth2 session handling.
//!
//! - `OAuthProvider`: RPITIT trait for the CRM authorization server
//! - `BoxOAuthProvider`: object-safe wrapper for dynamic dispatch
//! - `SessionManager`: turns a stored token into an authenticated API config

pub mod box_provider;
pub mod provider;
pub mod session;
