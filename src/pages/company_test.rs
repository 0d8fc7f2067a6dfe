use super::*;

fn make_company(last_updated: Option<&str>) -> Company {
    Company {
        id: "0123456789abcdef".to_owned(),
        name: "Acme Holdings".to_owned(),
        address: None,
        point_of_contact: None,
        last_updated: last_updated.map(str::to_owned),
        last_updated_by: None,
    }
}

#[test]
fn can_modify_requires_server_history() {
    assert!(can_modify(&make_company(Some("2024-05-01T12:00:00Z"))));
}

#[test]
fn can_modify_false_without_last_updated() {
    assert!(!can_modify(&make_company(None)));
    assert!(!can_modify(&make_company(Some(""))));
}
