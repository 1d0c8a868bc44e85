//! inbox-tui: panel view models for the support inbox UI.
//!
//! One model per panel: the sidebar conversation list, the active chat
//! transcript, and the copilot side panel. Models are pure state machines —
//! the host event loop feeds them input and owns all timing and rendering.

pub mod chat;
pub mod copilot;
pub mod sidebar;

/// Crate identity label used by bootstrap smoke tests.
pub fn crate_label() -> &'static str {
    "inbox-tui"
}
