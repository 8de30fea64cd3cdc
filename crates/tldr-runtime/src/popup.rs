//! The popup: summarize the active page on demand.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use tldr_config::{Settings, SettingsRepository};
use tldr_extract::Extractor;
use tldr_protocols::{SummaryLength, SummaryStyle};

use crate::error::SurfaceError;
use crate::summarizer::Summarizer;
use crate::tabs::TabSource;

const BULLET_MARKERS: &[char] = &['•', '-', '*'];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PopupStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// What the popup currently shows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopupState {
    pub status: PopupStatus,
    pub summary: String,
    pub error: Option<String>,
    pub settings: Settings,
    pub page_url: Option<String>,
}

pub struct Popup {
    tabs: Arc<dyn TabSource>,
    settings: SettingsRepository,
    summarizer: Summarizer,
    extractor: Extractor,
    state: PopupState,
}

impl Popup {
    pub fn new(
        tabs: Arc<dyn TabSource>,
        settings: SettingsRepository,
        summarizer: Summarizer,
        extractor: Extractor,
    ) -> Self {
        Self {
            tabs,
            settings,
            summarizer,
            extractor,
            state: PopupState::default(),
        }
    }

    pub fn state(&self) -> &PopupState {
        &self.state
    }

    /// Load settings and the active page URL, then summarize right away
    /// when `autoSummarize` is on.
    pub async fn open(&mut self) -> &PopupState {
        match self.settings.load().await {
            Ok(settings) => self.state.settings = settings,
            Err(e) => warn!("Failed to load settings, using defaults: {}", e),
        }
        self.state.page_url = self.tabs.active_page().await.map(|p| p.url().to_string());

        if self.state.settings.auto_summarize {
            self.summarize_page().await;
        }
        &self.state
    }

    /// Change the length for this popup session only.
    pub fn set_length(&mut self, length: SummaryLength) {
        self.state.settings.length = length;
    }

    /// Change the style for this popup session only.
    pub fn set_style(&mut self, style: SummaryStyle) {
        self.state.settings.style = style;
    }

    /// Summarize the active page.
    ///
    /// Failures land in [`PopupState::error`] with an empty summary, and the
    /// popup stays usable for another attempt.
    pub async fn summarize_page(&mut self) -> &PopupState {
        self.state.status = PopupStatus::Loading;
        self.state.summary.clear();
        self.state.error = None;

        let result = self.run().await;
        match result {
            Ok(summary) => {
                self.state.status = PopupStatus::Success;
                self.state.summary = summary;
            }
            Err(e) => {
                warn!("Popup summarization failed: {}", e);
                self.state.status = PopupStatus::Error;
                self.state.error = Some(e.user_message());
            }
        }
        &self.state
    }

    async fn run(&self) -> Result<String, SurfaceError> {
        let page = self.tabs.active_page().await.ok_or(SurfaceError::NoActivePage)?;
        let text = self.extractor.extract_text(&page);
        let response = self
            .summarizer
            .summarize(&text, page.url(), &self.state.settings)
            .await?;
        Ok(response.summary)
    }

    /// The summary as display items.
    ///
    /// Bullet summaries become one item per non-empty line with any leading
    /// bullet marker removed. Other styles are a single item.
    pub fn summary_items(&self) -> Vec<String> {
        summary_items(&self.state.summary, self.state.settings.style)
    }
}

fn summary_items(summary: &str, style: SummaryStyle) -> Vec<String> {
    if summary.trim().is_empty() {
        return Vec::new();
    }
    if style != SummaryStyle::Bullet {
        return vec![summary.trim().to_string()];
    }
    summary
        .lines()
        .map(|line| line.trim().trim_start_matches(BULLET_MARKERS).trim())
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
