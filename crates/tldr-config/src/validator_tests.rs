use super::*;
use crate::schema::{AppConfig, Settings};

#[test]
fn test_validate_default_settings() {
    let result = SettingsValidator::validate(&Settings::default());
    assert!(result.is_valid());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_validate_https_backend() {
    let settings = Settings {
        backend_url: "https://tldr.example.com/".to_string(),
        ..Settings::default()
    };
    assert!(SettingsValidator::validate(&settings).is_valid());
}

#[test]
fn test_validate_empty_backend_url() {
    let settings = Settings {
        backend_url: "  ".to_string(),
        ..Settings::default()
    };
    let result = SettingsValidator::validate(&settings);
    assert!(!result.is_valid());
    assert_eq!(result.errors[0].path, "backendUrl");
}

#[test]
fn test_validate_relative_backend_url() {
    let settings = Settings {
        backend_url: "/api".to_string(),
        ..Settings::default()
    };
    let result = SettingsValidator::validate(&settings);
    assert!(!result.is_valid());
    assert!(result.errors[0].message.contains("Not a valid URL"));
}

#[test]
fn test_validate_unsupported_scheme() {
    let settings = Settings {
        backend_url: "ftp://files.example.com".to_string(),
        ..Settings::default()
    };
    let result = SettingsValidator::validate(&settings);
    assert!(!result.is_valid());
    assert!(result.errors[0].message.contains("ftp"));
}

#[test]
fn test_validate_backend_with_query_warns() {
    let settings = Settings {
        backend_url: "http://localhost:5000?token=abc".to_string(),
        ..Settings::default()
    };
    let result = SettingsValidator::validate(&settings);
    assert!(result.is_valid());
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn test_validate_zero_max_text_length() {
    let settings = Settings {
        max_text_length: 0,
        ..Settings::default()
    };
    let result = SettingsValidator::validate(&settings);
    assert!(!result.is_valid());
    assert_eq!(result.errors[0].path, "maxTextLength");
}

#[test]
fn test_validate_huge_max_text_length_warns() {
    let settings = Settings {
        max_text_length: 500_000,
        ..Settings::default()
    };
    let result = SettingsValidator::validate(&settings);
    assert!(result.is_valid());
    assert_eq!(result.warnings[0].path, "maxTextLength");
}

#[test]
fn test_validate_collects_multiple_errors() {
    let settings = Settings {
        backend_url: String::new(),
        max_text_length: 0,
        ..Settings::default()
    };
    let result = SettingsValidator::validate(&settings);
    assert_eq!(result.errors.len(), 2);
}

#[test]
fn test_validate_default_app_config() {
    let result = SettingsValidator::validate_app(&AppConfig::default());
    assert!(result.is_valid());
}

#[test]
fn test_validate_app_zero_timeout() {
    let mut config = AppConfig::default();
    config.backend.request_timeout_secs = Some(0);
    let result = SettingsValidator::validate_app(&config);
    assert!(!result.is_valid());
    assert_eq!(result.errors[0].path, "backend.request_timeout_secs");
}

#[test]
fn test_validate_app_empty_level() {
    let mut config = AppConfig::default();
    config.logging.level = String::new();
    assert!(!SettingsValidator::validate_app(&config).is_valid());
}

#[test]
fn test_validate_app_empty_user_agent_warns() {
    let mut config = AppConfig::default();
    config.backend.user_agent = String::new();
    let result = SettingsValidator::validate_app(&config);
    assert!(result.is_valid());
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn test_validation_error_new() {
    let err = ValidationError::new("path", "message");
    assert_eq!(err.path, "path");
    assert_eq!(err.message, "message");
}
