//! The extraction pipeline.

use tldr_protocols::{DocumentCategory, ExtractionResult, PageInfo};
use tracing::debug;

use crate::generic::GenericExtractor;
use crate::page::PageSnapshot;
use crate::profiles::cascade_for;

/// Classifies a page and extracts its readable text.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    generic: GenericExtractor,
}

impl Extractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom generic extractor for pages without category rules
    /// and as the fallback for pages with them.
    pub fn with_generic(generic: GenericExtractor) -> Self {
        Self { generic }
    }

    /// Normalized text of the page's meaningful content.
    pub fn extract_text(&self, page: &PageSnapshot) -> String {
        let category = page.category();
        debug!(url = %page.url(), %category, "Detected document type");
        self.extract_as(page, category)
    }

    /// Extract text and attach page metadata.
    pub fn extract(&self, page: &PageSnapshot) -> ExtractionResult {
        let category = page.category();
        debug!(url = %page.url(), %category, "Detected document type");
        let text = self.extract_as(page, category);
        let info = self.info_for(page, &text);
        ExtractionResult::new(text, category).with_page(info)
    }

    /// Title, URL, hostname, word count and main-content flag of a page.
    pub fn page_info(&self, page: &PageSnapshot) -> PageInfo {
        let text = self.extract_text(page);
        self.info_for(page, &text)
    }

    fn extract_as(&self, page: &PageSnapshot, category: DocumentCategory) -> String {
        if let Some(cascade) = cascade_for(category) {
            if let Some(text) = cascade.run(page.document()) {
                return text;
            }
            debug!(%category, "No category selector had enough text, using generic extraction");
        }
        self.generic.extract(page.document())
    }

    fn info_for(&self, page: &PageSnapshot, text: &str) -> PageInfo {
        PageInfo {
            title: page.title(),
            url: page.url().to_string(),
            hostname: page.hostname().to_string(),
            word_count: text.split_whitespace().count(),
            has_main_content: page.has_main_content(),
        }
    }
}
