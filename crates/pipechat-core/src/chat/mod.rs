//! Chat proxy.
//!
//! - `ResponsesProvider`: RPITIT trait for hosted language-model backends
//! - `BoxResponsesProvider`: object-safe wrapper for dynamic dispatch
//! - `ChatService`: forwards a turn with the fixed model selection

pub mod box_provider;
pub mod provider;
pub mod service;
