use super::*;

// ============================================================================
// Endpoint builders
// ============================================================================

#[test]
fn api_base_has_no_trailing_slash() {
    assert!(!api_base().is_empty());
    assert!(!api_base().ends_with('/'));
}

#[test]
fn trim_base_strips_trailing_slashes() {
    assert_eq!(trim_base("http://host:9000/"), "http://host:9000");
    assert_eq!(trim_base("http://host:9000///"), "http://host:9000");
    assert_eq!(trim_base("http://host:9000"), "http://host:9000");
}

#[test]
fn companies_endpoint_targets_collection_root() {
    assert!(companies_endpoint().starts_with(api_base()));
    assert!(companies_endpoint().ends_with("/companies/"));
}

#[test]
fn company_endpoint_embeds_the_id() {
    assert!(company_endpoint("abc123").ends_with("/companies/abc123"));
}

#[test]
fn progress_endpoint_embeds_the_id() {
    assert!(progress_endpoint("abc123").ends_with("/progress/abc123"));
}

// ============================================================================
// Message builders
// ============================================================================

#[test]
fn request_failed_message_names_action_and_status() {
    assert_eq!(
        request_failed_message("load companies", 502),
        "load companies failed: 502"
    );
    assert_eq!(
        request_failed_message("delete company", 404),
        "delete company failed: 404"
    );
}
