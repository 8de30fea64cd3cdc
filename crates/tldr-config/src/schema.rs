//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use tldr_protocols::{SummaryLength, SummaryStyle};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 10_000;

/// User settings shared by every surface.
///
/// Each field falls back to its default on its own when missing from the
/// stored record, so a partial record always loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub length: SummaryLength,

    #[serde(default)]
    pub style: SummaryStyle,

    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    #[serde(default)]
    pub auto_summarize: bool,

    #[serde(default = "default_max_text_length")]
    pub max_text_length: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: SummaryLength::default(),
            style: SummaryStyle::default(),
            backend_url: default_backend_url(),
            auto_summarize: false,
            max_text_length: default_max_text_length(),
        }
    }
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

fn default_max_text_length() -> usize {
    DEFAULT_MAX_TEXT_LENGTH
}

/// Field-by-field changes applied on top of stored settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub length: Option<SummaryLength>,
    pub style: Option<SummaryStyle>,
    pub backend_url: Option<String>,
    pub auto_summarize: Option<bool>,
    pub max_text_length: Option<usize>,
}

impl SettingsPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(self, settings: &mut Settings) {
        if let Some(length) = self.length {
            settings.length = length;
        }
        if let Some(style) = self.style {
            settings.style = style;
        }
        if let Some(url) = self.backend_url {
            settings.backend_url = url;
        }
        if let Some(auto) = self.auto_summarize {
            settings.auto_summarize = auto;
        }
        if let Some(max) = self.max_text_length {
            settings.max_text_length = max;
        }
    }
}

/// Root configuration of the command-line process.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub backend: BackendConfig,
}

/// Where the key/value store is kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_dir")]
    pub dir: PathBuf,

    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

/// HTTP client settings for talking to the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Request timeout in seconds. Unset means requests wait indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

/// The `~/.tldr` directory.
pub fn tldr_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".tldr"))
        .unwrap_or_else(|| PathBuf::from(".tldr"))
}

fn default_storage_path() -> PathBuf {
    tldr_dir().join("storage.json")
}

fn default_log_dir() -> PathBuf {
    tldr_dir().join("logs")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_user_agent() -> String {
    format!("TLDR/{}", env!("CARGO_PKG_VERSION"))
}
