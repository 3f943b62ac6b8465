//! Unit tests for domain error types

use wirebox_domain::Error;

#[test]
fn test_invalid_provider_kind_error() {
    let error = Error::invalid_provider_kind("u32", "expected a function");
    match error {
        Error::InvalidProviderKind { provider, reason } => {
            assert_eq!(provider, "u32");
            assert_eq!(reason, "expected a function");
        }
        _ => panic!("Expected InvalidProviderKind error"),
    }
}

#[test]
fn test_error_position_display() {
    let error = Error::error_position_invalid("make_db", 0, 2);
    let display_str = format!("{}", error);
    assert!(display_str.contains("position 0 of 2"));
    assert!(display_str.contains("make_db"));
}

#[test]
fn test_invalid_tag_value_display() {
    let error = Error::invalid_tag_value("app::StructIn", "y", "optional", "foo");
    assert_eq!(
        error.to_string(),
        "Invalid tag value: optional:\"foo\" on field `y` of app::StructIn"
    );
}

#[test]
fn test_extraction_error_classification() {
    assert!(Error::invalid_provider_kind("p", "r").is_extraction_error());
    assert!(Error::error_position_invalid("p", 0, 1).is_extraction_error());
    assert!(Error::invalid_tag_value("a", "f", "t", "v").is_extraction_error());
    assert!(!Error::configuration("bad").is_extraction_error());
    assert!(!Error::infrastructure("down").is_extraction_error());
}

#[test]
fn test_io_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.toml");
    let error: Error = io_error.into();
    match error {
        Error::Io { message, source } => {
            assert!(message.contains("missing.toml"));
            assert!(source.is_some());
        }
        _ => panic!("Expected Io error"),
    }
}

#[test]
fn test_configuration_error_with_source() {
    let source = std::io::Error::other("permission denied");
    let error = Error::configuration_with_source("Failed to read config", source);
    match &error {
        Error::Configuration { message, source } => {
            assert_eq!(message, "Failed to read config");
            assert!(source.is_some());
        }
        _ => panic!("Expected Configuration error"),
    }
    assert!(std::error::Error::source(&error).is_some());
}
