//! Extraction output types.

use serde::{Deserialize, Serialize};

use super::DocumentCategory;

/// Simple metadata about the page that was extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub title: String,
    pub url: String,
    pub hostname: String,
    pub word_count: usize,
    pub has_main_content: bool,
}

/// Normalized page text produced by one extraction request.
///
/// Created fresh on every call; never cached or mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub text: String,
    pub category: DocumentCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<PageInfo>,
}

impl ExtractionResult {
    pub fn new(text: impl Into<String>, category: DocumentCategory) -> Self {
        Self {
            text: text.into(),
            category,
            page: None,
        }
    }

    pub fn with_page(mut self, page: PageInfo) -> Self {
        self.page = Some(page);
        self
    }

    /// True when the extracted text has no visible characters.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}
