use super::*;

#[test]
fn escape_closes_menu() {
    assert!(closes_menu("Escape"));
}

#[test]
fn other_keys_keep_menu_open() {
    for key in ["Enter", " ", "ArrowDown", "Tab", "escape"] {
        assert!(!closes_menu(key), "{key}");
    }
}
