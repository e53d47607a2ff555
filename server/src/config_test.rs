use super::*;

#[test]
fn parse_port_defaults_when_unset() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_port_reads_value() {
    assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
    assert_eq!(parse_port(Some(" 4000 ")).unwrap(), 4000);
}

#[test]
fn parse_port_rejects_garbage() {
    let err = parse_port(Some("http")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref v) if v == "http"));
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn config_error_display() {
    let err = ConfigError::InvalidPort("abc".to_owned());
    assert_eq!(err.to_string(), "invalid PORT value: \"abc\"");
}

#[test]
fn log_filter_defaults_to_info() {
    assert_eq!(log_filter(None).to_string(), DEFAULT_LOG_FILTER);
    assert_eq!(log_filter(Some("   ")).to_string(), DEFAULT_LOG_FILTER);
}

#[test]
fn log_filter_reads_directives() {
    assert_eq!(log_filter(Some("server=debug")).to_string(), "server=debug");
}

#[test]
fn log_filter_falls_back_on_bad_directive() {
    assert_eq!(log_filter(Some("server=notalevel")).to_string(), DEFAULT_LOG_FILTER);
}
