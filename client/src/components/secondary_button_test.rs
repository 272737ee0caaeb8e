use super::*;

#[test]
fn enabled_button_has_no_opacity_override() {
    let classes = secondary_button_classes(false, "");
    assert!(classes.starts_with("inline-flex items-center"));
    assert!(classes.ends_with("duration-150"));
}

#[test]
fn disabled_button_adds_opacity() {
    assert!(secondary_button_classes(true, "").ends_with("duration-150 opacity-25"));
}

#[test]
fn caller_class_comes_last() {
    assert!(secondary_button_classes(true, "ms-3").ends_with("opacity-25 ms-3"));
}
