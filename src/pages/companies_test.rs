use super::*;

#[test]
fn company_route_embeds_the_id() {
    assert_eq!(company_route("abc123"), "/companies/abc123");
}

#[test]
fn progress_label_shows_percent_once_landed() {
    assert_eq!(progress_label(Some(64)), "64%");
    assert_eq!(progress_label(Some(0)), "0%");
}

#[test]
fn progress_label_is_a_dash_while_pending() {
    assert_eq!(progress_label(None), "—");
}
