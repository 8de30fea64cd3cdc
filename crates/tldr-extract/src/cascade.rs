//! Ordered selector lookup with a minimum text length.

use std::collections::HashSet;

use scraper::{Html, Selector};
use tldr_protocols::ExtractError;
use tracing::trace;

use crate::normalize::normalize;
use crate::text::rendered_text;

/// How matches of a cascade are turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeMode {
    /// Per selector, take the first matching element; stop at the first one
    /// whose text is long enough.
    FirstMatch,
    /// Join the text of every match of every selector, then apply the
    /// threshold once. Each DOM node contributes at most once.
    Concatenate,
}

/// A list of CSS selectors tried in order against a document.
#[derive(Debug, Clone)]
pub struct SelectorCascade {
    rules: Vec<(String, Selector)>,
    threshold: usize,
    mode: CascadeMode,
}

impl SelectorCascade {
    /// Build a cascade from selector strings.
    ///
    /// Text counts as found only when its trimmed length is strictly greater
    /// than `threshold` characters.
    pub fn parse(patterns: &[&str], threshold: usize, mode: CascadeMode) -> Result<Self, ExtractError> {
        let rules = patterns
            .iter()
            .map(|pattern| {
                Selector::parse(pattern)
                    .map(|selector| (pattern.to_string(), selector))
                    .map_err(|e| ExtractError::InvalidSelector {
                        selector: pattern.to_string(),
                        reason: format!("{:?}", e),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            rules,
            threshold,
            mode,
        })
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn mode(&self) -> CascadeMode {
        self.mode
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|(pattern, _)| pattern.as_str())
    }

    /// Run the cascade, returning normalized text or `None` when nothing
    /// passed the threshold.
    ///
    /// Only nodes reachable from the root element are considered, so nodes
    /// detached from a working copy never match.
    pub fn run(&self, document: &Html) -> Option<String> {
        match self.mode {
            CascadeMode::FirstMatch => self.first_match(document),
            CascadeMode::Concatenate => self.concatenate(document),
        }
    }

    fn long_enough(&self, text: &str) -> bool {
        text.trim().chars().count() > self.threshold
    }

    fn first_match(&self, document: &Html) -> Option<String> {
        let root = document.root_element();
        for (pattern, selector) in &self.rules {
            let Some(element) = root.select(selector).next() else {
                continue;
            };
            let text = rendered_text(element);
            if self.long_enough(&text) {
                trace!(selector = %pattern, "Selector matched");
                return Some(normalize(&text));
            }
            trace!(selector = %pattern, "Selector matched but text too short");
        }
        None
    }

    fn concatenate(&self, document: &Html) -> Option<String> {
        let root = document.root_element();
        let mut taken = HashSet::new();
        let mut all = String::new();

        for (_, selector) in &self.rules {
            for element in root.select(selector) {
                let overlaps = taken.contains(&element.id())
                    || element.ancestors().any(|a| taken.contains(&a.id()))
                    || element.descendants().any(|d| taken.contains(&d.id()));
                if overlaps {
                    continue;
                }
                taken.insert(element.id());

                let text = rendered_text(element);
                if !text.trim().is_empty() {
                    all.push_str(&text);
                    all.push(' ');
                }
            }
        }

        if self.long_enough(&all) {
            Some(normalize(&all))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long(word: &str) -> String {
        vec![word; 40].join(" ")
    }

    #[test]
    fn test_invalid_selector() {
        let result = SelectorCascade::parse(&["div[", "p"], 10, CascadeMode::FirstMatch);
        match result {
            Err(ExtractError::InvalidSelector { selector, .. }) => assert_eq!(selector, "div["),
            other => panic!("expected InvalidSelector, got {:?}", other),
        }
    }

    #[test]
    fn test_first_match_in_order() {
        let html = format!(
            r#"<body><div class="b">{}</div><div class="a">{}</div></body>"#,
            long("beta"),
            long("alpha")
        );
        let document = Html::parse_document(&html);
        let cascade = SelectorCascade::parse(&[".a", ".b"], 100, CascadeMode::FirstMatch).unwrap();
        assert!(cascade.run(&document).unwrap().starts_with("alpha"));
    }

    #[test]
    fn test_first_match_skips_short_text() {
        let html = format!(
            r#"<body><div class="a">too short</div><div class="b">{}</div></body>"#,
            long("beta")
        );
        let document = Html::parse_document(&html);
        let cascade = SelectorCascade::parse(&[".a", ".b"], 100, CascadeMode::FirstMatch).unwrap();
        assert!(cascade.run(&document).unwrap().starts_with("beta"));
    }

    #[test]
    fn test_first_match_only_checks_first_element() {
        let html = format!(
            r#"<body><div class="a">short</div><div class="a">{}</div></body>"#,
            long("later")
        );
        let document = Html::parse_document(&html);
        let cascade = SelectorCascade::parse(&[".a"], 100, CascadeMode::FirstMatch).unwrap();
        assert_eq!(cascade.run(&document), None);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let exact = "x".repeat(100);
        let document = Html::parse_document(&format!("<body><p>{}</p></body>", exact));
        let at = SelectorCascade::parse(&["p"], 100, CascadeMode::FirstMatch).unwrap();
        assert_eq!(at.run(&document), None);

        let below = SelectorCascade::parse(&["p"], 99, CascadeMode::FirstMatch).unwrap();
        assert_eq!(below.run(&document), Some(exact));
    }

    #[test]
    fn test_zero_threshold_accepts_any_text() {
        let document = Html::parse_document("<body><main>hi</main></body>");
        let cascade = SelectorCascade::parse(&["main"], 0, CascadeMode::FirstMatch).unwrap();
        assert_eq!(cascade.run(&document), Some("hi".to_string()));
    }

    #[test]
    fn test_no_match() {
        let document = Html::parse_document("<body><p>text</p></body>");
        let cascade = SelectorCascade::parse(&[".missing"], 0, CascadeMode::FirstMatch).unwrap();
        assert_eq!(cascade.run(&document), None);
    }

    #[test]
    fn test_concatenate_joins_all_matches() {
        let html = r#"<body>
            <div class="layer">first page text</div>
            <div class="layer">second page text</div>
        </body>"#;
        let document = Html::parse_document(html);
        let cascade = SelectorCascade::parse(&[".layer"], 20, CascadeMode::Concatenate).unwrap();
        assert_eq!(
            cascade.run(&document),
            Some("first page text second page text".to_string())
        );
    }

    #[test]
    fn test_concatenate_counts_nodes_once() {
        let html = r#"<body><div id="viewer">
            <div class="page"><div class="textLayer">alpha text</div></div>
            <div class="page"><div class="textLayer">beta text</div></div>
        </div></body>"#;
        let document = Html::parse_document(html);
        let cascade = SelectorCascade::parse(
            &[".textLayer", ".page .textLayer", "#viewer .page"],
            5,
            CascadeMode::Concatenate,
        )
        .unwrap();
        let text = cascade.run(&document).unwrap();
        assert_eq!(text.matches("alpha").count(), 1);
        assert_eq!(text.matches("beta").count(), 1);
    }

    #[test]
    fn test_concatenate_threshold_applies_to_total() {
        let document = Html::parse_document(
            r#"<body><span class="t">twelve chars</span><span class="t">twelve chars</span></body>"#,
        );
        let cascade = SelectorCascade::parse(&[".t"], 20, CascadeMode::Concatenate).unwrap();
        assert!(cascade.run(&document).is_some());

        let strict = SelectorCascade::parse(&[".t"], 30, CascadeMode::Concatenate).unwrap();
        assert!(strict.run(&document).is_none());
    }

    #[test]
    fn test_accessors() {
        let cascade = SelectorCascade::parse(&["main", "article"], 7, CascadeMode::Concatenate).unwrap();
        assert_eq!(cascade.threshold(), 7);
        assert_eq!(cascade.mode(), CascadeMode::Concatenate);
        assert_eq!(cascade.patterns().collect::<Vec<_>>(), vec!["main", "article"]);
    }
}
