use super::*;

fn form(name: &str, email: &str, password: &str) -> SignupForm {
    SignupForm {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    }
}

// =============================================================
// Email pattern
// =============================================================

#[test]
fn email_accepts_simple_address() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("first.last+tag@mail.example.org"));
}

#[test]
fn email_rejects_missing_tld() {
    assert!(!is_valid_email("a@b"));
}

#[test]
fn email_rejects_whitespace_and_extra_at() {
    assert!(!is_valid_email("a b@c.de"));
    assert!(!is_valid_email(" a@b.co"));
    assert!(!is_valid_email("a@@b.co"));
    assert!(!is_valid_email("@b.co"));
    assert!(!is_valid_email("a@.co"));
}

// =============================================================
// Password pattern
// =============================================================

#[test]
fn password_accepts_all_classes() {
    assert!(is_strong_password("Passw0rd!"));
    assert!(is_strong_password("aB3$aaaa"));
}

#[test]
fn password_requires_eight_chars() {
    assert!(!is_strong_password("aB3$aaa"));
}

#[test]
fn password_requires_each_class() {
    assert!(!is_strong_password("password1!"));
    assert!(!is_strong_password("PASSWORD1!"));
    assert!(!is_strong_password("Password!!"));
    assert!(!is_strong_password("Password12"));
}

#[test]
fn password_special_set_is_fixed() {
    assert!(!is_strong_password("Password1#"));
    assert!(is_strong_password("Password1&"));
}

#[test]
fn password_rejects_line_breaks() {
    assert!(!is_strong_password("Passw0rd!\nmore"));
}

// =============================================================
// Signup form ordering
// =============================================================

#[test]
fn signup_blank_field_reported_first() {
    assert_eq!(validate_signup(&form("", "bad", "x")), Err(MSG_FIELDS_REQUIRED));
    assert_eq!(validate_signup(&form("Ada", "   ", "Passw0rd!")), Err(MSG_FIELDS_REQUIRED));
    assert_eq!(validate_signup(&form("Ada", "ada@example.com", "  ")), Err(MSG_FIELDS_REQUIRED));
}

#[test]
fn signup_short_name_before_email() {
    assert_eq!(validate_signup(&form("A", "bad", "x")), Err(MSG_NAME_TOO_SHORT));
}

#[test]
fn signup_invalid_email_before_password() {
    assert_eq!(validate_signup(&form("Ada", "ada@example", "x")), Err(MSG_INVALID_EMAIL));
}

#[test]
fn signup_weak_password() {
    assert_eq!(
        validate_signup(&form("Ada", "ada@example.com", "password")),
        Err(MSG_INVALID_PASSWORD)
    );
}

#[test]
fn signup_lowercases_email_only() {
    let request = validate_signup(&form("Ada Lovelace", "Ada@Example.COM", "Passw0rd!")).expect("valid form");
    assert_eq!(request.name, "Ada Lovelace");
    assert_eq!(request.email, "ada@example.com");
    assert_eq!(request.password, "Passw0rd!");
}

// =============================================================
// Login form
// =============================================================

#[test]
fn login_requires_both_fields() {
    let login = LoginForm { email: "a@b.co".to_owned(), password: " ".to_owned() };
    assert_eq!(validate_login(&login), Err(MSG_FIELDS_REQUIRED));
}

#[test]
fn login_checks_email_but_not_strength() {
    let bad = LoginForm { email: "a@b".to_owned(), password: "pw".to_owned() };
    assert_eq!(validate_login(&bad), Err(MSG_INVALID_EMAIL));

    let ok = LoginForm { email: "A@B.co".to_owned(), password: "pw".to_owned() };
    let request = validate_login(&ok).expect("valid login");
    assert_eq!(request.email, "a@b.co");
}

// =============================================================
// Browser whitespace and length semantics
// =============================================================

#[test]
fn email_rejects_byte_order_mark() {
    assert!(!is_valid_email("a\u{FEFF}b@c.de"));
    assert!(!is_valid_email("a@c\u{FEFF}.de"));
}

#[test]
fn email_allows_next_line_control() {
    assert!(is_valid_email("a\u{85}b@c.de"));
}

#[test]
fn byte_order_mark_name_is_blank() {
    assert_eq!(validate_signup(&form("\u{FEFF}", "ada@example.com", "Passw0rd!")), Err(MSG_FIELDS_REQUIRED));
    assert_eq!(validate_signup(&form("\u{3000}\u{A0}", "ada@example.com", "Passw0rd!")), Err(MSG_FIELDS_REQUIRED));
}

#[test]
fn astral_characters_count_twice() {
    assert!(is_strong_password("Aa1@😀😀"));
    assert!(!is_strong_password("Aa1@😀"));
    let request = validate_signup(&form("😀", "ada@example.com", "Passw0rd!")).expect("two code units");
    assert_eq!(request.name, "😀");
}
