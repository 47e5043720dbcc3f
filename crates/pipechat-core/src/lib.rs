//! Business logic and provider trait definitions for Pipechat.
//!
//! This crate defines the "ports" (provider traits) that the infrastructure
//! layer implements: the CRM's OAuth2 server, the CRM REST API, and the
//! hosted language model. It depends only on `pipechat-types` -- never on
//! `pipechat-infra` or any HTTP crate.

pub mod auth;
pub mod chat;
pub mod crm;
pub mod dashboard;
