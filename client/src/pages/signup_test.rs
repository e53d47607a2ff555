use super::*;

#[test]
fn normalize_email_input_lowercases() {
    assert_eq!(normalize_email_input("Ada@Example.COM"), "ada@example.com");
}

#[test]
fn normalize_email_input_keeps_whitespace_for_validation() {
    assert_eq!(normalize_email_input(" A@B.co "), " a@b.co ");
}

#[test]
fn submit_label_reflects_loading() {
    assert_eq!(submit_label(false, "Signup"), "Signup");
    assert_eq!(submit_label(true, "Signup"), "Please wait...");
}

#[test]
fn submit_button_class_marks_busy() {
    assert_eq!(submit_button_class(false), "auth-button");
    assert_eq!(submit_button_class(true), "auth-button auth-button--busy");
}
