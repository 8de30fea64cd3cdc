//! Parsed page snapshots.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use tldr_protocols::{DocumentCategory, ExtractError};

use crate::classify::classify;

static TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("BUG: hardcoded selector 'title' is invalid"));

static PDF_EMBED: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"embed[type="application/pdf"]"#)
        .expect("BUG: hardcoded PDF embed selector is invalid")
});

static MAIN_CONTENT: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"main, article, [role="main"]"#)
        .expect("BUG: hardcoded main content selector is invalid")
});

/// A page's URL and its parsed document at the moment of the request.
#[derive(Debug, Clone)]
pub struct PageSnapshot {
    url: String,
    hostname: String,
    document: Html,
}

impl PageSnapshot {
    /// Parse `html` as the document found at `url`.
    pub fn parse(url: &str, html: &str) -> Result<Self, ExtractError> {
        let parsed = url::Url::parse(url).map_err(|e| ExtractError::InvalidUrl(format!("{}: {}", url, e)))?;
        Ok(Self {
            url: url.to_string(),
            hostname: parsed.host_str().unwrap_or_default().to_string(),
            document: Html::parse_document(html),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Host of the page URL; empty for hostless URLs such as `file://`.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn document(&self) -> &Html {
        &self.document
    }

    /// Text of the `<title>` element, trimmed.
    pub fn title(&self) -> String {
        self.document
            .select(&TITLE)
            .next()
            .map(|t| t.text().collect::<String>().trim().to_string())
            .unwrap_or_default()
    }

    /// Whether the page hosts an embedded PDF viewer.
    pub fn embeds_pdf(&self) -> bool {
        self.document.select(&PDF_EMBED).next().is_some()
    }

    /// Whether the page marks up a main content region.
    pub fn has_main_content(&self) -> bool {
        self.document.select(&MAIN_CONTENT).next().is_some()
    }

    pub fn category(&self) -> DocumentCategory {
        classify(&self.url, &self.hostname, self.embeds_pdf())
    }
}
