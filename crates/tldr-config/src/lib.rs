//! # TLDR Config
//!
//! The persisted user settings record, the key/value stores it lives in,
//! and the TOML configuration of the command-line process.

mod error;
mod loader;
mod repository;
mod schema;
mod store;
mod validator;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use repository::{SETTINGS_KEY, SettingsRepository};
pub use schema::*;
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
pub use validator::{SettingsValidator, ValidationError, ValidationResult, ValidationWarning};
