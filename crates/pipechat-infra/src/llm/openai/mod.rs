//! OpenAI Responses API provider.
//!
//! Conversation state is kept upstream (`store: true`); each reply carries
//! the id the next turn passes as `previous_response_id`.

pub mod client;

pub use client::OpenAiResponsesProvider;
