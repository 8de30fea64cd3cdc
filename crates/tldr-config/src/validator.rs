//! Settings and configuration validation.

use crate::schema::{AppConfig, Settings};

/// Values above this are accepted but likely exceed what the backend takes.
const MAX_TEXT_LENGTH_WARNING: usize = 100_000;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Validator for [`Settings`] and [`AppConfig`].
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate the user settings record.
    pub fn validate(settings: &Settings) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_backend_url(&settings.backend_url, &mut result);
        Self::validate_max_text_length(settings.max_text_length, &mut result);

        result
    }

    /// Validate the process configuration.
    pub fn validate_app(config: &AppConfig) -> ValidationResult {
        let mut result = ValidationResult::default();

        if config.storage.path.as_os_str().is_empty() {
            result.add_error(ValidationError::new(
                "storage.path",
                "Storage path cannot be empty",
            ));
        }

        if config.logging.level.trim().is_empty() {
            result.add_error(ValidationError::new(
                "logging.level",
                "Log level cannot be empty",
            ));
        }

        if config.backend.request_timeout_secs == Some(0) {
            result.add_error(ValidationError::new(
                "backend.request_timeout_secs",
                "Timeout must be greater than 0 (omit it to disable)",
            ));
        }

        if config.backend.user_agent.trim().is_empty() {
            result.add_warning(ValidationWarning::new(
                "backend.user_agent",
                "Empty user agent, requests will be sent without one",
            ));
        }

        result
    }

    fn validate_backend_url(backend_url: &str, result: &mut ValidationResult) {
        if backend_url.trim().is_empty() {
            result.add_error(ValidationError::new(
                "backendUrl",
                "Backend URL cannot be empty",
            ));
            return;
        }

        match url::Url::parse(backend_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {
                if url.query().is_some() || url.fragment().is_some() {
                    result.add_warning(ValidationWarning::new(
                        "backendUrl",
                        "Query and fragment are dropped when building API paths",
                    ));
                }
            }
            Ok(url) => {
                result.add_error(ValidationError::new(
                    "backendUrl",
                    format!("Unsupported scheme '{}', must use http or https", url.scheme()),
                ));
            }
            Err(e) => {
                result.add_error(ValidationError::new(
                    "backendUrl",
                    format!("Not a valid URL: {}", e),
                ));
            }
        }
    }

    fn validate_max_text_length(max_text_length: usize, result: &mut ValidationResult) {
        if max_text_length == 0 {
            result.add_error(ValidationError::new(
                "maxTextLength",
                "maxTextLength must be greater than 0",
            ));
        } else if max_text_length > MAX_TEXT_LENGTH_WARNING {
            result.add_warning(ValidationWarning::new(
                "maxTextLength",
                format!(
                    "maxTextLength is very high (>{}), the backend may reject large requests",
                    MAX_TEXT_LENGTH_WARNING
                ),
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
