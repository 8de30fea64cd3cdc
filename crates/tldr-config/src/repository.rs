//! Loading and saving the settings record.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::ConfigError;
use crate::schema::{Settings, SettingsPatch};
use crate::store::KeyValueStore;
use crate::validator::SettingsValidator;

/// Storage key of the settings record.
pub const SETTINGS_KEY: &str = "tldrSettings";

/// Reads and writes [`Settings`] in a [`KeyValueStore`].
#[derive(Clone)]
pub struct SettingsRepository {
    store: Arc<dyn KeyValueStore>,
}

impl SettingsRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load settings, filling every missing field with its default.
    pub async fn load(&self) -> Result<Settings, ConfigError> {
        match self.store.get(SETTINGS_KEY).await? {
            Some(value) => {
                let settings: Settings =
                    serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
                        field: SETTINGS_KEY.to_string(),
                        message: e.to_string(),
                    })?;
                Ok(settings)
            }
            None => {
                debug!("No stored settings, using defaults");
                Ok(Settings::default())
            }
        }
    }

    /// True when a settings record has been written before.
    pub async fn exists(&self) -> Result<bool, ConfigError> {
        Ok(self.store.get(SETTINGS_KEY).await?.is_some())
    }

    /// Validate and persist the full record.
    pub async fn save(&self, settings: &Settings) -> Result<(), ConfigError> {
        let report = SettingsValidator::validate(settings);
        for warning in &report.warnings {
            warn!("{}: {}", warning.path, warning.message);
        }
        if let Some(error) = report.errors.into_iter().next() {
            return Err(ConfigError::InvalidValue {
                field: error.path,
                message: error.message,
            });
        }

        self.store
            .set(SETTINGS_KEY, serde_json::to_value(settings)?)
            .await?;
        info!("Settings saved");
        Ok(())
    }

    /// Apply a patch to the stored record and persist the result.
    pub async fn update(&self, patch: SettingsPatch) -> Result<Settings, ConfigError> {
        let mut settings = self.load().await?;
        patch.apply(&mut settings);
        self.save(&settings).await?;
        Ok(settings)
    }

    /// Overwrite the stored record with defaults.
    pub async fn reset(&self) -> Result<Settings, ConfigError> {
        let settings = Settings::default();
        self.save(&settings).await?;
        Ok(settings)
    }
}
