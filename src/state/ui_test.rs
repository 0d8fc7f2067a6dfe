use super::*;

#[test]
fn ui_state_defaults_to_light_scheme() {
    let state = UiState::default();
    assert!(!state.dark_mode);
}
