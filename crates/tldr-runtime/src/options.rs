//! The options page: edit, save and test settings.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use tldr_config::{Settings, SettingsRepository};

use crate::summarizer::Summarizer;

/// Outcome of the last save.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveStatus {
    #[default]
    Idle,
    Success,
    Error,
}

/// Outcome of the last connection test.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    #[default]
    Idle,
    Success,
    Error,
}

pub struct OptionsPage {
    settings: SettingsRepository,
    summarizer: Summarizer,
    form: Settings,
    save_status: SaveStatus,
    connection_status: ConnectionStatus,
    last_error: Option<String>,
}

impl OptionsPage {
    pub fn new(settings: SettingsRepository, summarizer: Summarizer) -> Self {
        Self {
            settings,
            summarizer,
            form: Settings::default(),
            save_status: SaveStatus::Idle,
            connection_status: ConnectionStatus::Idle,
            last_error: None,
        }
    }

    /// Fill the form from stored settings. Defaults are kept when loading fails.
    pub async fn load(&mut self) -> &Settings {
        match self.settings.load().await {
            Ok(settings) => self.form = settings,
            Err(e) => {
                warn!("Failed to load settings: {}", e);
                self.last_error = Some(e.to_string());
            }
        }
        &self.form
    }

    pub fn form(&self) -> &Settings {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut Settings {
        &mut self.form
    }

    pub fn save_status(&self) -> SaveStatus {
        self.save_status
    }

    pub fn connection_status(&self) -> ConnectionStatus {
        self.connection_status
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Persist the form.
    pub async fn save(&mut self) -> SaveStatus {
        self.save_status = match self.settings.save(&self.form).await {
            Ok(()) => {
                self.last_error = None;
                SaveStatus::Success
            }
            Err(e) => {
                warn!("Failed to save settings: {}", e);
                self.last_error = Some(e.to_string());
                SaveStatus::Error
            }
        };
        self.save_status
    }

    /// Probe the backend URL currently in the form.
    pub async fn test_connection(&mut self) -> ConnectionStatus {
        let result = self.summarizer.health(&self.form.backend_url).await;
        self.connection_status = match result {
            Ok(health) => {
                info!(status = health.status_code, "Backend reachable");
                self.last_error = None;
                ConnectionStatus::Success
            }
            Err(e) => {
                warn!("Connection test failed: {}", e);
                self.last_error = Some(e.user_message());
                ConnectionStatus::Error
            }
        };
        self.connection_status
    }

    /// Restore and persist the default settings.
    pub async fn reset(&mut self) -> SaveStatus {
        self.form = Settings::default();
        self.save().await
    }
}
