//! Shared application state provided through Leptos context.
//!
//! ARCHITECTURE
//! ============
//! Each module owns one `RwSignal`-wrapped state struct: `companies` for the
//! list view, `company` for the dashboard's active record, `checklist` for
//! the maintenance table, and `ui` for chrome.

pub mod checklist;
pub mod companies;
pub mod company;
pub mod ui;
