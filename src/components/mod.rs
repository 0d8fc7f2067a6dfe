//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the checklist widget and shared page chrome while
//! reading/writing shared state from Leptos context providers.

pub mod checklist_table;
pub mod progress_bar;
