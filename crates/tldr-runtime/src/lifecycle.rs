//! One-time initialization and the context-menu registry.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use tldr_config::{KeyValueStore, SettingsRepository};
use tldr_extract::Extractor;

use crate::background::Background;
use crate::error::SurfaceError;
use crate::notify::Notifier;
use crate::options::OptionsPage;
use crate::popup::Popup;
use crate::router::MessageRouter;
use crate::summarizer::{ClientOptions, Summarizer};
use crate::tabs::TabSource;

/// Id of the single context-menu item.
pub const SUMMARIZE_MENU_ID: &str = "tldr-summarize";

/// Why the extension is being initialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallReason {
    /// First run on this profile.
    Install,
    /// A new version replaced an installed one.
    Update,
    /// Ordinary start of an installed extension.
    Startup,
}

/// Where a context-menu item is offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuContext {
    Page,
    Selection,
}

/// A registered context-menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextMenuItem {
    pub id: String,
    pub title: String,
    pub contexts: Vec<MenuContext>,
}

impl ContextMenuItem {
    fn summarize() -> Self {
        Self {
            id: SUMMARIZE_MENU_ID.to_string(),
            title: "Summarize with TLDR".to_string(),
            contexts: vec![MenuContext::Page, MenuContext::Selection],
        }
    }
}

/// Collaborators supplied by the host.
#[derive(Clone)]
pub struct ExtensionContext {
    /// Persistent storage for the settings record.
    pub store: Arc<dyn KeyValueStore>,
    /// Source of the active page.
    pub tabs: Arc<dyn TabSource>,
    /// Where background results are shown.
    pub notifier: Arc<dyn Notifier>,
    /// Backend client options.
    pub client: ClientOptions,
}

impl ExtensionContext {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        tabs: Arc<dyn TabSource>,
        notifier: Arc<dyn Notifier>,
        client: ClientOptions,
    ) -> Self {
        Self {
            store,
            tabs,
            notifier,
            client,
        }
    }
}

/// The initialized extension.
///
/// Built once by [`Extension::initialize`] and never mutated afterwards.
/// Surfaces are created from it on demand and share its collaborators.
#[derive(Clone)]
pub struct Extension {
    settings: SettingsRepository,
    tabs: Arc<dyn TabSource>,
    notifier: Arc<dyn Notifier>,
    summarizer: Summarizer,
    extractor: Extractor,
    menu_items: Vec<ContextMenuItem>,
    open_options: bool,
}

impl Extension {
    /// Initialize the extension.
    ///
    /// On [`InstallReason::Install`] the default settings are written and
    /// the options page is requested. The context-menu item is registered
    /// on every start.
    pub async fn initialize(
        reason: InstallReason,
        context: ExtensionContext,
    ) -> Result<Self, SurfaceError> {
        let settings = SettingsRepository::new(context.store);

        let open_options = reason == InstallReason::Install;
        if open_options {
            settings.reset().await?;
            info!("First install: default settings written");
        }

        let menu_items = vec![ContextMenuItem::summarize()];
        info!(?reason, items = menu_items.len(), "Extension initialized");

        Ok(Self {
            settings,
            tabs: context.tabs,
            notifier: context.notifier,
            summarizer: Summarizer::new(context.client),
            extractor: Extractor::new(),
            menu_items,
            open_options,
        })
    }

    /// Registered context-menu items.
    pub fn menu_items(&self) -> &[ContextMenuItem] {
        &self.menu_items
    }

    /// True when initialization asked for the options page to be opened.
    pub fn should_open_options(&self) -> bool {
        self.open_options
    }

    pub fn settings(&self) -> &SettingsRepository {
        &self.settings
    }

    pub fn popup(&self) -> Popup {
        Popup::new(
            self.tabs.clone(),
            self.settings.clone(),
            self.summarizer.clone(),
            self.extractor.clone(),
        )
    }

    pub fn options_page(&self) -> OptionsPage {
        OptionsPage::new(self.settings.clone(), self.summarizer.clone())
    }

    pub fn background(&self) -> Background {
        Background::new(
            self.tabs.clone(),
            self.settings.clone(),
            self.summarizer.clone(),
            self.extractor.clone(),
            self.notifier.clone(),
        )
    }

    pub fn router(&self) -> MessageRouter {
        MessageRouter::new(
            self.tabs.clone(),
            self.settings.clone(),
            self.summarizer.clone(),
            self.extractor.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::LogNotifier;
    use crate::tabs::StaticTab;
    use tldr_config::{MemoryStore, SETTINGS_KEY, Settings};

    fn context(store: Arc<MemoryStore>) -> ExtensionContext {
        ExtensionContext::new(
            store,
            Arc::new(StaticTab::empty()),
            Arc::new(LogNotifier),
            ClientOptions::default(),
        )
    }

    #[tokio::test]
    async fn test_install_writes_defaults_and_opens_options() {
        let store = Arc::new(MemoryStore::new());
        let extension = Extension::initialize(InstallReason::Install, context(store.clone()))
            .await
            .unwrap();

        assert!(extension.should_open_options());
        let stored = store.get(SETTINGS_KEY).await.unwrap().unwrap();
        let stored: Settings = serde_json::from_value(stored).unwrap();
        assert_eq!(stored, Settings::default());
    }

    #[tokio::test]
    async fn test_startup_leaves_storage_alone() {
        let store = Arc::new(MemoryStore::new());
        let extension = Extension::initialize(InstallReason::Startup, context(store.clone()))
            .await
            .unwrap();

        assert!(!extension.should_open_options());
        assert!(store.is_empty());
        assert_eq!(extension.settings().load().await.unwrap(), Settings::default());
    }

    #[tokio::test]
    async fn test_menu_item_registered() {
        let store = Arc::new(MemoryStore::new());
        let extension = Extension::initialize(InstallReason::Update, context(store))
            .await
            .unwrap();

        assert_eq!(
            extension.menu_items(),
            &[ContextMenuItem {
                id: "tldr-summarize".to_string(),
                title: "Summarize with TLDR".to_string(),
                contexts: vec![MenuContext::Page, MenuContext::Selection],
            }]
        );
    }
}
