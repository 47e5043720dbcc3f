//! Dashboard view model.
//!
//! - `DashboardStats`: aggregate counts shown in the stat cards
//! - `PersonsList`: the rendered list, pruned after successful deletes
//! - `DeleteControl`: per-row two-step delete confirmation; its transition
//!   table drives the dashboard script

pub mod delete;
pub mod list;
pub mod stats;

pub use delete::{
    transition_table, DeleteControl, DeleteEffect, DeleteEvent, DeleteState, Transition,
    ALERT_PREFIX, UNKNOWN_ERROR,
};
pub use list::PersonsList;
pub use stats::DashboardStats;
