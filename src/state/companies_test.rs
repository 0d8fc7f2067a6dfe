use super::*;

// =============================================================
// Default state
// =============================================================

#[test]
fn companies_state_default_empty() {
    let state = CompaniesState::default();
    assert!(state.items.is_empty());
    assert!(state.progress.is_empty());
    assert!(!state.loading);
    assert!(!state.create_pending);
    assert!(state.created_company_id.is_none());
    assert!(state.error.is_none());
}

// =============================================================
// progress_percent
// =============================================================

#[test]
fn progress_percent_rounds_landed_fetches() {
    let mut state = CompaniesState::default();
    state.progress.insert(
        "abc".to_owned(),
        CompanyProgress {
            tasks: Vec::new(),
            progress_percent: 72.4,
        },
    );
    assert_eq!(state.progress_percent("abc"), Some(72));
}

#[test]
fn progress_percent_none_before_fetch_lands() {
    let state = CompaniesState::default();
    assert_eq!(state.progress_percent("abc"), None);
}
