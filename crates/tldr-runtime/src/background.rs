//! Context-menu summaries delivered as notifications.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use tldr_config::SettingsRepository;
use tldr_extract::Extractor;

use crate::error::SurfaceError;
use crate::lifecycle::SUMMARIZE_MENU_ID;
use crate::notify::{Notification, Notifier};
use crate::summarizer::Summarizer;
use crate::tabs::TabSource;

const SUMMARY_TITLE: &str = "TLDR Summary";
const ERROR_TITLE: &str = "TLDR Error";
const NOTIFICATION_PREVIEW_CHARS: usize = 300;

/// A click on a context-menu item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuClick {
    pub menu_item_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_text: Option<String>,
}

impl MenuClick {
    pub fn new(menu_item_id: impl Into<String>) -> Self {
        Self {
            menu_item_id: menu_item_id.into(),
            selection_text: None,
        }
    }

    pub fn with_selection(mut self, text: impl Into<String>) -> Self {
        self.selection_text = Some(text.into());
        self
    }
}

/// Handles context-menu clicks.
pub struct Background {
    tabs: Arc<dyn TabSource>,
    settings: SettingsRepository,
    summarizer: Summarizer,
    extractor: Extractor,
    notifier: Arc<dyn Notifier>,
}

impl Background {
    pub fn new(
        tabs: Arc<dyn TabSource>,
        settings: SettingsRepository,
        summarizer: Summarizer,
        extractor: Extractor,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            tabs,
            settings,
            summarizer,
            extractor,
            notifier,
        }
    }

    /// Summarize the selection, or the whole page when nothing is selected,
    /// and show the outcome as a notification.
    ///
    /// Returns the notification that was shown, or `None` for clicks on
    /// items this handler does not own.
    pub async fn on_context_menu(&self, click: &MenuClick) -> Option<Notification> {
        if click.menu_item_id != SUMMARIZE_MENU_ID {
            return None;
        }

        let notification = match self.summarize_click(click).await {
            Ok(summary) => Notification::new(SUMMARY_TITLE, preview(&summary)),
            Err(e) => {
                warn!("Context-menu summarization failed: {}", e);
                Notification::new(
                    ERROR_TITLE,
                    format!("Failed to summarize: {}", e.user_message()),
                )
            }
        };

        self.notifier.notify(&notification);
        Some(notification)
    }

    async fn summarize_click(&self, click: &MenuClick) -> Result<String, SurfaceError> {
        let page = self.tabs.active_page().await;

        let text = match click.selection_text.as_deref().filter(|t| !t.trim().is_empty()) {
            Some(selection) => selection.to_string(),
            None => {
                let page = page.as_ref().ok_or(SurfaceError::NoActivePage)?;
                self.extractor.extract_text(page)
            }
        };
        if text.trim().is_empty() {
            return Err(SurfaceError::EmptyText);
        }

        let url = page.as_ref().map(|p| p.url().to_string()).unwrap_or_default();
        let settings = self.settings.load().await?;
        info!(
            from_selection = click.selection_text.is_some(),
            "Summarizing from context menu"
        );

        let response = self.summarizer.summarize(&text, &url, &settings).await?;
        Ok(response.summary)
    }
}

fn preview(summary: &str) -> String {
    match summary.char_indices().nth(NOTIFICATION_PREVIEW_CHARS) {
        Some((idx, _)) => format!("{}...", &summary[..idx]),
        None => summary.to_string(),
    }
}
