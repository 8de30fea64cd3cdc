//! Selector lists for each document category.

use std::sync::LazyLock;

use tldr_protocols::DocumentCategory;

use crate::cascade::{CascadeMode, SelectorCascade};

/// Category-specific text must be longer than this to be accepted.
pub const MIN_TEXT_LENGTH: usize = 100;

/// Generic fallback blocks must be longer than this to be considered.
pub const MIN_BLOCK_LENGTH: usize = 200;

pub const WORD_PROCESSOR_SELECTORS: &[&str] = &[
    ".DocumentTextLayer",
    ".PageContainer",
    ".Page",
    r#"[data-automation-id="documentCanvas"]"#,
    ".CanvasContainer",
    ".WACViewPanel_EditingElement",
];

pub const DOCS_EDITOR_SELECTORS: &[&str] = &[
    ".kix-appview-editor",
    ".kix-page",
    ".kix-page-content-wrap",
];

pub const PDF_SELECTORS: &[&str] = &[
    ".textLayer",
    ".page .textLayer",
    "#viewer .page",
    ".pdfViewer .page",
];

/// Removed from the working copy before generic extraction.
pub const BOILERPLATE_SELECTORS: &[&str] = &[
    "script",
    "style",
    "nav",
    "header",
    "footer",
    "aside",
    ".advertisement",
    ".ads",
    ".sidebar",
    ".menu",
    ".navigation",
    ".social-share",
    ".comments",
    ".related-posts",
];

/// Likely main content containers, most specific first.
pub const CONTENT_SELECTORS: &[&str] = &[
    "main",
    "article",
    r#"[role="main"]"#,
    ".content",
    ".post-content",
    ".entry-content",
    ".article-content",
    ".article-body",
    "#content",
    ".main-content",
    ".story-body",
    ".post-body",
];

/// Candidates for the largest-text-block fallback.
pub const BLOCK_SELECTORS: &[&str] = &["div", "section", "p"];

static WORD_PROCESSOR: LazyLock<SelectorCascade> = LazyLock::new(|| {
    SelectorCascade::parse(WORD_PROCESSOR_SELECTORS, MIN_TEXT_LENGTH, CascadeMode::FirstMatch)
        .expect("BUG: hardcoded word processor selectors are invalid")
});

static DOCS_EDITOR: LazyLock<SelectorCascade> = LazyLock::new(|| {
    SelectorCascade::parse(DOCS_EDITOR_SELECTORS, MIN_TEXT_LENGTH, CascadeMode::FirstMatch)
        .expect("BUG: hardcoded docs editor selectors are invalid")
});

static PDF: LazyLock<SelectorCascade> = LazyLock::new(|| {
    SelectorCascade::parse(PDF_SELECTORS, MIN_TEXT_LENGTH, CascadeMode::Concatenate)
        .expect("BUG: hardcoded PDF viewer selectors are invalid")
});

/// The cascade tried before generic extraction, if the category has one.
pub fn cascade_for(category: DocumentCategory) -> Option<&'static SelectorCascade> {
    match category {
        DocumentCategory::WordProcessor => Some(&WORD_PROCESSOR),
        DocumentCategory::DocsEditor => Some(&DOCS_EDITOR),
        DocumentCategory::Pdf => Some(&PDF),
        DocumentCategory::Webpage => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_category_cascades_parse() {
        for category in DocumentCategory::ALL {
            if let Some(cascade) = cascade_for(category) {
                assert_eq!(cascade.threshold(), MIN_TEXT_LENGTH);
            }
        }
    }

    #[test]
    fn test_webpage_has_no_cascade() {
        assert!(cascade_for(DocumentCategory::Webpage).is_none());
    }

    #[test]
    fn test_pdf_concatenates() {
        let cascade = cascade_for(DocumentCategory::Pdf).unwrap();
        assert_eq!(cascade.mode(), CascadeMode::Concatenate);
        assert_eq!(cascade.patterns().count(), PDF_SELECTORS.len());
    }

    #[test]
    fn test_generic_selectors_parse() {
        for list in [BOILERPLATE_SELECTORS, CONTENT_SELECTORS, BLOCK_SELECTORS] {
            assert!(SelectorCascade::parse(list, 0, CascadeMode::FirstMatch).is_ok());
        }
    }
}
