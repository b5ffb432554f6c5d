use super::*;

#[test]
fn card_state_defaults_collapsed_and_interpreted() {
    let state = CardState::default();
    assert!(!state.show_explanation);
    assert!(!state.compilation_view);
    assert_eq!(state.details_label(), "Show Details");
    assert_eq!(state.mode_label(), "Interpretation");
}

#[test]
fn toggle_explanation_flips_label() {
    let mut state = CardState::default();
    state.toggle_explanation();
    assert!(state.show_explanation);
    assert_eq!(state.details_label(), "Hide Details");
    state.toggle_explanation();
    assert_eq!(state, CardState::default());
}

#[test]
fn toggle_compilation_view_flips_label() {
    let mut state = CardState::default();
    state.toggle_compilation_view();
    assert_eq!(state.mode_label(), "Compilation");
    state.toggle_compilation_view();
    assert_eq!(state.mode_label(), "Interpretation");
}

#[test]
fn toggles_are_independent() {
    let mut state = CardState::default();
    state.toggle_compilation_view();
    assert!(!state.show_explanation);
    state.toggle_explanation();
    assert!(state.compilation_view);
}
