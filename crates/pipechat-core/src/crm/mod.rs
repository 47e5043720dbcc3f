//! CRM provider abstractions.
//!
//! - `CrmProvider`: RPITIT trait for concrete CRM REST backends
//! - `BoxCrmProvider`: object-safe wrapper for dynamic dispatch
//! - `factory`: resource-specific clients bound to an authenticated config

pub mod box_provider;
pub mod factory;
pub mod provider;
