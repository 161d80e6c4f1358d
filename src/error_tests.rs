//! Tests for LexiError type

use super::*;

#[test]
fn test_invalid_config_error_display() {
    let error = LexiError::InvalidConfig {
        path: PathBuf::from("/home/me/.config/lexi/config.toml"),
        message: "expected `=`".to_string(),
    };
    let msg = error.to_string();
    assert!(msg.contains("Invalid config file"));
    assert!(msg.contains("config.toml"));
    assert!(msg.contains("expected `=`"));
}

#[test]
fn test_invalid_endpoint_error_display() {
    let error = LexiError::InvalidEndpoint("not a url".to_string());
    assert_eq!(error.to_string(), "Invalid endpoint URL 'not a url'");
}

#[test]
fn test_http_client_error_display() {
    let error = LexiError::HttpClient("tls backend unavailable".to_string());
    assert!(error.to_string().contains("tls backend unavailable"));
}

#[test]
fn test_io_error_from_std_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test error");
    let lexi_err = LexiError::from(io_err);
    assert!(matches!(lexi_err, LexiError::Io(_)));
    assert!(lexi_err.to_string().contains("test error"));
}

#[test]
fn test_error_debug() {
    let error = LexiError::InvalidEndpoint("x".to_string());
    let debug_str = format!("{:?}", error);
    assert!(debug_str.contains("InvalidEndpoint"));
}
