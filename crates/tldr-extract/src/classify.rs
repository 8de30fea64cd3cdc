//! Document category detection.

use tldr_protocols::DocumentCategory;

const WORD_PROCESSOR_HOSTS: &[&str] = &["office.com", "officeapps.live.com"];
const DOCS_EDITOR_HOSTS: &[&str] = &["docs.google.com"];

/// Classify a page from its URL, hostname and whether it embeds a PDF viewer.
///
/// Total: anything unrecognized is a [`DocumentCategory::Webpage`].
pub fn classify(url: &str, hostname: &str, embeds_pdf: bool) -> DocumentCategory {
    let hostname = hostname.to_ascii_lowercase();

    if WORD_PROCESSOR_HOSTS.iter().any(|h| hostname.contains(h)) {
        return DocumentCategory::WordProcessor;
    }
    if DOCS_EDITOR_HOSTS.iter().any(|h| hostname.contains(h)) {
        return DocumentCategory::DocsEditor;
    }
    if embeds_pdf || url.to_ascii_lowercase().contains(".pdf") {
        return DocumentCategory::Pdf;
    }
    DocumentCategory::Webpage
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_office_hosts() {
        assert_eq!(
            classify("https://word.office.com/doc?id=1", "word.office.com", false),
            DocumentCategory::WordProcessor
        );
        assert_eq!(
            classify("https://view.officeapps.live.com/op/view.aspx", "view.officeapps.live.com", false),
            DocumentCategory::WordProcessor
        );
    }

    #[test]
    fn test_google_docs() {
        assert_eq!(
            classify("https://docs.google.com/document/d/abc/edit", "docs.google.com", false),
            DocumentCategory::DocsEditor
        );
    }

    #[test]
    fn test_pdf_by_url() {
        assert_eq!(
            classify("https://example.com/papers/report.pdf", "example.com", false),
            DocumentCategory::Pdf
        );
        assert_eq!(
            classify("https://example.com/REPORT.PDF", "example.com", false),
            DocumentCategory::Pdf
        );
    }

    #[test]
    fn test_pdf_by_embed() {
        assert_eq!(
            classify("https://example.com/viewer", "example.com", true),
            DocumentCategory::Pdf
        );
    }

    #[test]
    fn test_host_rules_win_over_pdf() {
        assert_eq!(
            classify("https://docs.google.com/file.pdf", "docs.google.com", true),
            DocumentCategory::DocsEditor
        );
    }

    #[test]
    fn test_default_webpage() {
        assert_eq!(classify("https://news.example.org/story", "news.example.org", false), DocumentCategory::Webpage);
        assert_eq!(classify("", "", false), DocumentCategory::Webpage);
    }

    #[test]
    fn test_hostname_case_insensitive() {
        assert_eq!(
            classify("https://DOCS.GOOGLE.COM/x", "DOCS.GOOGLE.COM", false),
            DocumentCategory::DocsEditor
        );
    }
}
