//! Pipedrive adapters.
//!
//! - [`PipedriveOAuthClient`]: authorization-code and refresh grants
//! - [`PipedriveClient`]: REST v1 persons and deals endpoints

pub mod client;
pub mod oauth;

pub use client::PipedriveClient;
pub use oauth::PipedriveOAuthClient;
