use super::*;

// ============================================================================
// Helpers
// ============================================================================

fn make_company(id: &str) -> Company {
    Company {
        id: id.to_owned(),
        name: "Acme Holdings".to_owned(),
        address: Some("1 Main St".to_owned()),
        point_of_contact: Some("Dana".to_owned()),
        last_updated: Some("2024-05-01T12:00:00Z".to_owned()),
        last_updated_by: Some("dana".to_owned()),
    }
}

// ============================================================================
// Company deserialization
// ============================================================================

#[test]
fn company_accepts_string_id() {
    let company: Company =
        serde_json::from_str(r#"{"id": "abc123", "name": "Acme"}"#).unwrap();
    assert_eq!(company.id, "abc123");
    assert_eq!(company.name, "Acme");
    assert_eq!(company.address, None);
}

#[test]
fn company_accepts_numeric_id() {
    let company: Company = serde_json::from_str(r#"{"id": 42, "name": "Acme"}"#).unwrap();
    assert_eq!(company.id, "42");
}

#[test]
fn company_rejects_other_id_shapes() {
    let result = serde_json::from_str::<Company>(r#"{"id": [1], "name": "Acme"}"#);
    assert!(result.is_err());
}

#[test]
fn company_optional_fields_default_to_none() {
    let company: Company = serde_json::from_str(r#"{"id": "x", "name": "Acme"}"#).unwrap();
    assert_eq!(company.point_of_contact, None);
    assert_eq!(company.last_updated, None);
    assert_eq!(company.last_updated_by, None);
}

// ============================================================================
// Company::short_id
// ============================================================================

#[test]
fn short_id_takes_last_six_characters() {
    let company = make_company("0123456789abcdef");
    assert_eq!(company.short_id(), "abcdef");
}

#[test]
fn short_id_of_short_id_is_whole_id() {
    let company = make_company("42");
    assert_eq!(company.short_id(), "42");
}

#[test]
fn short_id_counts_characters_not_bytes() {
    // 'ä' is two bytes; the six-character cut must not split it.
    let company = make_company("belegschaft-gebäude-7");
    assert_eq!(company.short_id(), "äude-7");
}

#[test]
fn short_id_of_short_multibyte_id_is_whole_id() {
    let company = make_company("a€b€c");
    assert_eq!(company.short_id(), "a€b€c");
}

// ============================================================================
// CompanyDraft
// ============================================================================

#[test]
fn draft_from_company_copies_fields() {
    let draft = CompanyDraft::from_company(&make_company("abc"));
    assert_eq!(draft.name, "Acme Holdings");
    assert_eq!(draft.address, "1 Main St");
    assert_eq!(draft.point_of_contact, "Dana");
}

#[test]
fn draft_from_company_fills_missing_fields_with_empty() {
    let mut company = make_company("abc");
    company.address = None;
    company.point_of_contact = None;

    let draft = CompanyDraft::from_company(&company);
    assert_eq!(draft.address, "");
    assert_eq!(draft.point_of_contact, "");
}

#[test]
fn draft_is_complete_requires_every_field() {
    let mut draft = CompanyDraft {
        name: "Acme".to_owned(),
        address: "1 Main St".to_owned(),
        point_of_contact: "Dana".to_owned(),
    };
    assert!(draft.is_complete());

    draft.address = "   ".to_owned();
    assert!(!draft.is_complete());

    draft.address = "1 Main St".to_owned();
    draft.name = String::new();
    assert!(!draft.is_complete());
}

#[test]
fn draft_trimmed_strips_surrounding_whitespace() {
    let draft = CompanyDraft {
        name: "  Acme ".to_owned(),
        address: " 1 Main St".to_owned(),
        point_of_contact: "Dana  ".to_owned(),
    };
    let trimmed = draft.trimmed();
    assert_eq!(trimmed.name, "Acme");
    assert_eq!(trimmed.address, "1 Main St");
    assert_eq!(trimmed.point_of_contact, "Dana");
}

// ============================================================================
// CompanyProgress
// ============================================================================

#[test]
fn progress_defaults_when_fields_missing() {
    let progress: CompanyProgress = serde_json::from_str("{}").unwrap();
    assert!(progress.tasks.is_empty());
    assert!((progress.progress_percent - 0.0).abs() < f64::EPSILON);
    assert_eq!(progress.percent(), 0);
}

#[test]
fn progress_percent_rounds_for_display() {
    let progress: CompanyProgress =
        serde_json::from_str(r#"{"tasks": [{"name": "roof"}], "progress_percent": 66.6}"#)
            .unwrap();
    assert_eq!(progress.tasks.len(), 1);
    assert_eq!(progress.percent(), 67);
}

#[test]
fn progress_percent_clamps_out_of_range_values() {
    let over = CompanyProgress {
        tasks: Vec::new(),
        progress_percent: 140.0,
    };
    assert_eq!(over.percent(), 100);

    let under = CompanyProgress {
        tasks: Vec::new(),
        progress_percent: -3.0,
    };
    assert_eq!(under.percent(), 0);
}
