//! Company-list state for the companies table view.
//!
//! DESIGN
//! ======
//! Separating list state from active-company state avoids accidental
//! coupling between navigation inventory and dashboard editing data.

#[cfg(test)]
#[path = "companies_test.rs"]
mod companies_test;

use std::collections::HashMap;

use crate::net::types::{Company, CompanyProgress};

/// Shared company list state backed by the remote API.
#[derive(Clone, Debug, Default)]
pub struct CompaniesState {
    pub items: Vec<Company>,
    /// Cycle progress per company id, filled in as `/progress` fetches land.
    pub progress: HashMap<String, CompanyProgress>,
    pub loading: bool,
    pub create_pending: bool,
    pub created_company_id: Option<String>,
    pub error: Option<String>,
}

impl CompaniesState {
    /// Display percent for a company, once its progress fetch has landed.
    #[must_use]
    pub fn progress_percent(&self, company_id: &str) -> Option<u8> {
        self.progress.get(company_id).map(CompanyProgress::percent)
    }
}
