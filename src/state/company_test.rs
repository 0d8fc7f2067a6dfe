use super::*;
use crate::net::types::Company;

// =============================================================
// Default state
// =============================================================

#[test]
fn company_state_default_empty() {
    let state = CompanyState::default();
    assert!(state.current.is_none());
    assert!(!state.loading);
    assert!(!state.save_pending);
    assert!(!state.delete_pending);
    assert!(!state.deleted);
    assert!(state.error.is_none());
}

// =============================================================
// reset
// =============================================================

#[test]
fn reset_clears_previous_company() {
    let mut state = CompanyState {
        current: Some(Company {
            id: "abc".to_owned(),
            name: "Acme".to_owned(),
            address: None,
            point_of_contact: None,
            last_updated: None,
            last_updated_by: None,
        }),
        loading: false,
        save_pending: true,
        delete_pending: false,
        deleted: false,
        error: Some("update company failed: 500".to_owned()),
    };

    state.reset();
    assert!(state.current.is_none());
    assert!(!state.save_pending);
    assert!(state.error.is_none());
}
