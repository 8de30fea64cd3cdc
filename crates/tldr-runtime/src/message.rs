//! Messages exchanged between surfaces.

use serde::{Deserialize, Serialize};

use tldr_config::Settings;
use tldr_protocols::PageInfo;

/// A request from one surface to another, tagged by `action`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum SurfaceRequest {
    /// Extracted text of the active page.
    ExtractText,
    /// Metadata of the active page.
    GetPageInfo,
    GetSettings,
    SaveSettings { settings: Settings },
    /// Summarize `text`, or the active page when no text is given.
    Summarize {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },
    OpenOptions,
}

/// The reply to a [`SurfaceRequest`].
///
/// Only the field that belongs to the request is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceResponse {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_info: Option<PageInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Settings>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SurfaceResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            ..Self::default()
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }

    pub fn with_text(mut self, text: String) -> Self {
        self.text = Some(text);
        self
    }

    pub fn with_page_info(mut self, info: PageInfo) -> Self {
        self.page_info = Some(info);
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn with_summary(mut self, summary: String) -> Self {
        self.summary = Some(summary);
        self
    }
}
