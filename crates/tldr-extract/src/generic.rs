//! Generic main-content extraction for ordinary web pages.

use scraper::{Html, Selector};
use tldr_protocols::ExtractError;
use tracing::debug;

use crate::cascade::{CascadeMode, SelectorCascade};
use crate::normalize::normalize;
use crate::profiles::{BLOCK_SELECTORS, BOILERPLATE_SELECTORS, CONTENT_SELECTORS, MIN_BLOCK_LENGTH};
use crate::text::rendered_text;

/// Finds the main content of a page that has no category-specific rules.
///
/// 1. Drop boilerplate (scripts, navigation, ads, sidebars, comments) from a
///    copy of the document.
/// 2. Take the first likely content container with text. Containers that
///    match but are empty are skipped.
/// 3. Otherwise take the largest `div`/`section`/`p` block whose text is
///    longer than [`MIN_BLOCK_LENGTH`].
/// 4. Otherwise take the whole body.
#[derive(Debug, Clone)]
pub struct GenericExtractor {
    boilerplate: Selector,
    content: SelectorCascade,
    blocks: Selector,
    body: Selector,
    min_block_length: usize,
}

impl GenericExtractor {
    pub fn new() -> Self {
        Self::with_selectors(BOILERPLATE_SELECTORS, CONTENT_SELECTORS, BLOCK_SELECTORS)
            .expect("BUG: hardcoded generic extraction selectors are invalid")
    }

    /// Build an extractor with custom selector lists.
    pub fn with_selectors(
        boilerplate: &[&str],
        content: &[&str],
        blocks: &[&str],
    ) -> Result<Self, ExtractError> {
        Ok(Self {
            boilerplate: parse_group(boilerplate)?,
            content: SelectorCascade::parse(content, 0, CascadeMode::FirstMatch)?,
            blocks: parse_group(blocks)?,
            body: parse_group(&["body"])?,
            min_block_length: MIN_BLOCK_LENGTH,
        })
    }

    /// Extract normalized main-content text. `document` is left untouched.
    pub fn extract(&self, document: &Html) -> String {
        let cleaned = self.strip_boilerplate(document);

        if let Some(text) = self.content.run(&cleaned) {
            debug!("Generic extraction: content container");
            return text;
        }

        if let Some(text) = self.largest_block(&cleaned) {
            debug!("Generic extraction: largest text block");
            return normalize(&text);
        }

        debug!("Generic extraction: whole body");
        let root = cleaned.root_element();
        let body = root.select(&self.body).next().unwrap_or(root);
        normalize(&rendered_text(body))
    }

    /// Copy of `document` with every boilerplate element detached.
    ///
    /// The `<html>` and `<body>` elements are never detached, even when their
    /// class is on the denylist. Detached nodes stay in the copy's arena; walk
    /// from [`Html::root_element`] to skip them.
    pub fn strip_boilerplate(&self, document: &Html) -> Html {
        let mut copy = document.clone();
        let root = copy.root_element();
        let protected: Vec<_> = std::iter::once(root.id())
            .chain(root.select(&self.body).map(|body| body.id()))
            .collect();
        let ids: Vec<_> = copy
            .select(&self.boilerplate)
            .map(|e| e.id())
            .filter(|id| !protected.contains(id))
            .collect();
        for id in ids {
            if let Some(mut node) = copy.tree.get_mut(id) {
                node.detach();
            }
        }
        copy
    }

    fn largest_block(&self, document: &Html) -> Option<String> {
        let mut best: Option<(usize, String)> = None;
        for element in document.root_element().select(&self.blocks) {
            let text = rendered_text(element);
            let len = text.trim().chars().count();
            if len <= self.min_block_length {
                continue;
            }
            if best.as_ref().is_none_or(|(best_len, _)| len > *best_len) {
                best = Some((len, text));
            }
        }
        best.map(|(_, text)| text)
    }
}

impl Default for GenericExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_group(patterns: &[&str]) -> Result<Selector, ExtractError> {
    let joined = patterns.join(", ");
    Selector::parse(&joined).map_err(|e| ExtractError::InvalidSelector {
        selector: joined.clone(),
        reason: format!("{:?}", e),
    })
}

#[cfg(test)]
#[path = "generic_tests.rs"]
mod tests;
