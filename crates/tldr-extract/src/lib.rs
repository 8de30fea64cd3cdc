//! # TLDR Extract
//!
//! Turns a page's HTML into the plain text that gets summarized.
//!
//! The pipeline is: classify the page ([`classify`]), try the selector
//! cascade for its category ([`SelectorCascade`]), fall back to generic
//! article extraction ([`GenericExtractor`]), then [`normalize`] whitespace.
//! Nothing here mutates the parsed page; boilerplate removal happens on a
//! copy.

mod cascade;
mod classify;
mod extractor;
mod generic;
mod normalize;
mod page;
pub mod profiles;
mod text;

pub use cascade::{CascadeMode, SelectorCascade};
pub use classify::classify;
pub use extractor::Extractor;
pub use generic::GenericExtractor;
pub use normalize::normalize;
pub use page::PageSnapshot;
pub use text::rendered_text;

use tldr_protocols::ExtractError;

/// Parse `html` as the page at `url` and return its normalized text.
pub fn extract_page_text(url: &str, html: &str) -> Result<String, ExtractError> {
    let page = PageSnapshot::parse(url, html)?;
    Ok(Extractor::new().extract_text(&page))
}
