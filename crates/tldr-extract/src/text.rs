//! Visible text of an element.

use scraper::{ElementRef, Node};

/// Elements whose content is never rendered as text.
const HIDDEN: &[&str] = &["script", "style", "noscript", "template", "head"];

/// Elements that start on their own line when rendered.
const BLOCK: &[&str] = &[
    "address", "article", "aside", "blockquote", "body", "dd", "details", "div", "dl", "dt",
    "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6",
    "header", "hr", "li", "main", "nav", "ol", "p", "pre", "section", "summary", "table",
    "tbody", "td", "tfoot", "th", "thead", "tr", "ul",
];

/// Approximate the rendered (`innerText`-like) text of an element.
///
/// Hidden elements are skipped, whitespace inside text nodes collapses to a
/// single space, and block elements and `<br>` produce line breaks. The
/// result still needs [`normalize`](crate::normalize) for canonical form.
pub fn rendered_text(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    if !HIDDEN.contains(&element.value().name()) {
        walk(element, &mut out);
    }
    out
}

fn walk(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => push_collapsed(out, text),
            Node::Element(el) => {
                let name = el.name();
                if HIDDEN.contains(&name) {
                    continue;
                }
                if name == "br" {
                    out.push('\n');
                    continue;
                }
                let Some(child_element) = ElementRef::wrap(child) else {
                    continue;
                };
                let block = BLOCK.contains(&name);
                if block {
                    out.push('\n');
                }
                walk(child_element, out);
                if block {
                    out.push('\n');
                }
            }
            _ => {}
        }
    }
}

fn push_collapsed(out: &mut String, text: &str) {
    let mut in_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
                in_space = true;
            }
        } else {
            out.push(c);
            in_space = false;
        }
    }
}
