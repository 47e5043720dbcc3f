//! HTTP request handlers.

pub mod auth;
pub mod chat;
pub mod deals;
pub mod pages;
pub mod persons;
