//! Shared domain types for Pipechat.
//!
//! This crate contains the types passed between the layers of the
//! application: the OAuth2 session token, CRM projections (persons, deals),
//! chat turns, vendor configuration values, and their error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror, secrecy.

pub mod chat;
pub mod config;
pub mod crm;
pub mod error;
pub mod token;
