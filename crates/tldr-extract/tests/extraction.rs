//! End-to-end behavior of the extraction pipeline on realistic pages.

use tldr_extract::{Extractor, GenericExtractor, PageSnapshot, extract_page_text, normalize};
use tldr_protocols::DocumentCategory;

const NEWS_ARTICLE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>City council approves new park</title>
    <script>window.analytics = {};</script>
    <style>body { font-family: serif; }</style>
</head>
<body>
    <header><a href="/">Daily News</a> <a href="/subscribe">Subscribe</a></header>
    <nav><ul><li>World</li><li>Local</li><li>Sports</li></ul></nav>
    <div class="advertisement">Buy one get one free</div>
    <main>
        <h1>City council approves new park</h1>
        <p>The council voted 7-2 on Tuesday to convert the old rail yard
           into a public park.</p>
        <p>Construction is expected to begin next spring.</p>
        <div class="related-posts">Other stories you may like</div>
    </main>
    <aside class="sidebar">Most read today</aside>
    <footer>&copy; Daily News</footer>
</body>
</html>"#;

#[test]
fn webpage_with_main_returns_only_main_text() {
    let page = PageSnapshot::parse("https://news.example.com/park", NEWS_ARTICLE).unwrap();
    let result = Extractor::new().extract(&page);

    assert_eq!(result.category, DocumentCategory::Webpage);
    assert_eq!(
        result.text,
        "City council approves new park\n\
         The council voted 7-2 on Tuesday to convert the old rail yard into a public park.\n\
         Construction is expected to begin next spring."
    );
    for boilerplate in ["Subscribe", "Sports", "Buy one", "Other stories", "Most read", "Daily News"] {
        assert!(!result.text.contains(boilerplate), "leaked {:?}", boilerplate);
    }
}

#[test]
fn extraction_does_not_modify_the_page() {
    let page = PageSnapshot::parse("https://news.example.com/park", NEWS_ARTICLE).unwrap();
    let before = page.document().html();

    Extractor::new().extract_text(&page);

    assert_eq!(page.document().html(), before);
    assert!(page.document().html().contains("Most read today"));
}

#[test]
fn short_category_text_equals_generic_output() {
    let html = r#"<html><body>
        <div class="PageContainer">Loading document...</div>
        <div class="Page">p. 1</div>
        <article>The document failed to render, so this fallback article is used.</article>
    </body></html>"#;

    for url in [
        "https://word.office.com/edit?id=1",
        "https://docs.google.com/document/d/xyz/edit",
        "https://files.example.com/slides.pdf",
    ] {
        let page = PageSnapshot::parse(url, html).unwrap();
        assert_ne!(page.category(), DocumentCategory::Webpage);

        let via_pipeline = Extractor::new().extract_text(&page);
        let via_generic = GenericExtractor::new().extract(page.document());
        assert_eq!(via_pipeline, via_generic, "mismatch for {}", url);
        assert_eq!(via_pipeline, "The document failed to render, so this fallback article is used.");
    }
}

#[test]
fn no_selectors_and_no_long_block_uses_body() {
    let html = r#"<html><body>
        <div>Short note.</div>
        <section><p>Another short note.</p></section>
        <span>trailing inline</span>
    </body></html>"#;
    let page = PageSnapshot::parse("https://example.com/notes", html).unwrap();
    assert_eq!(
        Extractor::new().extract_text(&page),
        "Short note.\nAnother short note.\ntrailing inline"
    );
}

#[test]
fn output_is_always_normalized() {
    let page = PageSnapshot::parse("https://news.example.com/park", NEWS_ARTICLE).unwrap();
    let text = Extractor::new().extract_text(&page);
    assert_eq!(normalize(&text), text);
}

#[test]
fn normalization_example() {
    assert_eq!(normalize("a\n\n\nb   c"), "a\nb c");
}

#[test]
fn convenience_entry_point() {
    let text = extract_page_text("https://example.com", "<body><article>Hi  there</article></body>").unwrap();
    assert_eq!(text, "Hi there");
    assert!(extract_page_text("::not a url::", "<p></p>").is_err());
}

#[test]
fn embedded_pdf_viewer_is_classified_as_pdf() {
    let layers: String = (1..=3)
        .map(|n| format!(r#"<div class="page"><div class="textLayer">Page {} of the quarterly report with figures and commentary.</div></div>"#, n))
        .collect();
    let html = format!(
        r#"<html><body><embed type="application/pdf" src="/r"><div class="pdfViewer">{}</div></body></html>"#,
        layers
    );
    let page = PageSnapshot::parse("https://intranet.example.com/view?id=9", &html).unwrap();
    let result = Extractor::new().extract(&page);

    assert_eq!(result.category, DocumentCategory::Pdf);
    assert!(result.text.starts_with("Page 1 of the quarterly report"));
    assert_eq!(result.text.matches("quarterly report").count(), 3);
}

#[test]
fn denylisted_root_class_does_not_break_extraction() {
    let html = r#"<html class="menu"><body><article>Hello world</article></body></html>"#;
    let page = PageSnapshot::parse("https://example.com", html).unwrap();
    assert_eq!(Extractor::new().extract_text(&page), "Hello world");

    let pdf = PageSnapshot::parse("https://example.com/doc.pdf", html).unwrap();
    assert_eq!(Extractor::new().extract_text(&pdf), "Hello world");
}
