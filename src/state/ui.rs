//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of domain state (`companies`, `company`,
//! `checklist`) so chrome controls can evolve independently of API data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for app-wide chrome, currently just the color scheme.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
}
