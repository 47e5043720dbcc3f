//! HTTP layer for Pipechat.
//!
//! JSON API under `/api/`, server-rendered pages at `/` and `/chat`. The
//! CRM session token rides in a single cookie; see [`cookie`].

pub mod cookie;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod templates;

#[cfg(test)]
pub(crate) mod testing;
