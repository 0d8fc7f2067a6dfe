//! Active-company state for the dashboard view.
//!
//! DESIGN
//! ======
//! Holds exactly one company at a time, keyed by the route param. Edit and
//! delete flows park their in-flight flags here so dialogs can disable
//! their buttons while a request runs.

#[cfg(test)]
#[path = "company_test.rs"]
mod company_test;

use crate::net::types::Company;

/// State of the company currently shown on the dashboard.
#[derive(Clone, Debug, Default)]
pub struct CompanyState {
    pub current: Option<Company>,
    pub loading: bool,
    pub save_pending: bool,
    pub delete_pending: bool,
    /// Set once the server confirms deletion; the page navigates away.
    pub deleted: bool,
    pub error: Option<String>,
}

impl CompanyState {
    /// Drop everything tied to the previous route param before loading a
    /// different company.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
