//! Whitespace normalization.

/// Canonicalize whitespace in extracted text.
///
/// Line-break variants become `\n`, runs of other whitespace become a single
/// space, blank lines are dropped and the result is trimmed. Applying it
/// twice gives the same output as applying it once.
pub fn normalize(text: &str) -> String {
    let unified = text
        .replace("\r\n", "\n")
        .replace(['\r', '\u{2028}', '\u{2029}'], "\n");

    let mut out = String::with_capacity(unified.len());
    for line in unified.split('\n') {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            continue;
        };
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(first);
        for word in words {
            out.push(' ');
            out.push_str(word);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_blank_lines_and_spaces() {
        assert_eq!(normalize("a\n\n\nb   c"), "a\nb c");
    }

    #[test]
    fn test_trims() {
        assert_eq!(normalize("  \n\t hello world \n\n "), "hello world");
    }

    #[test]
    fn test_line_break_variants() {
        assert_eq!(normalize("one\r\ntwo\rthree\u{2028}four"), "one\ntwo\nthree\nfour");
    }

    #[test]
    fn test_whitespace_only_lines_removed() {
        assert_eq!(normalize("a\n \t \nb"), "a\nb");
    }

    #[test]
    fn test_tabs_and_nbsp_become_spaces() {
        assert_eq!(normalize("a\t\tb\u{a0}\u{a0}c"), "a b c");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \r\n \n"), "");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "a\n\n\nb   c",
            "  Title \r\n\r\n  Body text   here\n\n\n- item\n",
            "\u{2029}x\u{a0} y",
            "already\nnormal text",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", sample);
        }
    }
}
