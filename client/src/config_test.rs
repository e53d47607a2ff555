use super::*;

#[test]
fn api_url_joins_plain_base() {
    assert_eq!(
        api_url("https://api.example.com", "/api/auth/signup"),
        "https://api.example.com/api/auth/signup"
    );
}

#[test]
fn api_url_trims_trailing_slashes() {
    assert_eq!(
        api_url("https://api.example.com//", "/api/auth/signup"),
        "https://api.example.com/api/auth/signup"
    );
}

#[test]
fn api_url_empty_base_is_same_origin() {
    assert_eq!(api_url("", "/api/auth/login"), "/api/auth/login");
}

#[test]
fn api_url_adds_missing_separator() {
    assert_eq!(api_url("http://localhost:5000", "api/auth/login"), "http://localhost:5000/api/auth/login");
}
