//! Client-side checks run before any auth request is issued.
//!
//! Checks run in a fixed order and stop at the first failure, so the user
//! always sees exactly one message.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::net::types::{LoginRequest, SignupRequest};

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_PASSWORD_CHARS: usize = 8;
pub const PASSWORD_SPECIALS: &str = "@$!%*?&";

pub const MSG_FIELDS_REQUIRED: &str = "All fields are required.";
pub const MSG_NAME_TOO_SHORT: &str = "Min 2 characters for name.";
pub const MSG_INVALID_EMAIL: &str = "Invalid email address.";
pub const MSG_INVALID_PASSWORD: &str = "Invalid password format.";

/// Hint rendered under the password input.
pub const PASSWORD_HINT: &str = "Min 8 chars, uppercase, lowercase, number & special char";

/// Whitespace as browsers define it for `\s` and `String.prototype.trim`:
/// Unicode space separators, the ASCII controls, line terminators and U+FEFF.
/// U+0085 is not part of the set.
const FORM_WHITESPACE: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let part = format!("[^{FORM_WHITESPACE}@]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern compiles")
});

/// Raw signup input as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Raw login input as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// `local@domain.tld` with no whitespace and exactly one `@` on each side of
/// the split.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// At least eight UTF-16 code units on a single line, with one ASCII lowercase, one
/// ASCII uppercase, one ASCII digit and one of `@$!%*?&`.
pub fn is_strong_password(password: &str) -> bool {
    if password.chars().any(is_line_terminator) || utf16_len(password) < MIN_PASSWORD_CHARS {
        return false;
    }
    password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SPECIALS.contains(c))
}

/// Validate the signup form and build the request body.
///
/// # Errors
///
/// Returns the user-facing message for the first failing check.
pub fn validate_signup(form: &SignupForm) -> Result<SignupRequest, &'static str> {
    if is_blank(&form.name) || is_blank(&form.email) || is_blank(&form.password) {
        return Err(MSG_FIELDS_REQUIRED);
    }
    if utf16_len(&form.name) < MIN_NAME_CHARS {
        return Err(MSG_NAME_TOO_SHORT);
    }
    if !is_valid_email(&form.email) {
        return Err(MSG_INVALID_EMAIL);
    }
    if !is_strong_password(&form.password) {
        return Err(MSG_INVALID_PASSWORD);
    }
    Ok(SignupRequest {
        name: form.name.clone(),
        email: form.email.to_lowercase(),
        password: form.password.clone(),
    })
}

/// Validate the login form and build the request body.
///
/// Password strength is not re-checked here; older accounts may predate the
/// current rules.
///
/// # Errors
///
/// Returns the user-facing message for the first failing check.
pub fn validate_login(form: &LoginForm) -> Result<LoginRequest, &'static str> {
    if is_blank(&form.email) || is_blank(&form.password) {
        return Err(MSG_FIELDS_REQUIRED);
    }
    if !is_valid_email(&form.email) {
        return Err(MSG_INVALID_EMAIL);
    }
    Ok(LoginRequest {
        email: form.email.to_lowercase(),
        password: form.password.clone(),
    })
}

/// True when the value is empty after trimming form whitespace.
fn is_blank(value: &str) -> bool {
    value.trim_matches(is_form_whitespace).is_empty()
}

/// Lengths are measured the way the browser reports `value.length`, so an
/// astral-plane character counts twice.
fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
