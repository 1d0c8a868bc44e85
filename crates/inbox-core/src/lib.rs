//! inbox-core: domain types, conversation index, and store for the support inbox.
//!
//! This crate contains the foundational model shared across all inbox crates:
//! conversation and transcript records, the filter/sort/search index that
//! backs the sidebar list, label parsing for the filter widgets, the
//! in-memory conversation store, and the canned responder content used by
//! the simulated bot and copilot.

pub mod conversation;
pub mod index;
pub mod responder;
pub mod store;
pub mod validate;

/// Crate identity label used by bootstrap smoke tests.
pub fn crate_label() -> &'static str {
    "inbox-core"
}
