use html_escape::decode_html_entities;
use regex::RegexSet;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Markup and injection patterns. A single match is enough to flag a value.
const MARKUP_PATTERNS: [&str; 5] = [
    // open/close tags, attributes and inner whitespace: <b>, </ div>, < img src="x" >
    r"(?i)<\s*/?\s*[a-z0-9-]+[^>]*>",
    // HTML comments
    r"<!--",
    // CDATA sections
    r"(?i)<!\[CDATA\[",
    // DOCTYPE declarations
    r"(?i)<!DOCTYPE",
    // processing instructions (<?xml, <?php)
    r"<\?",
];

static MARKUP: LazyLock<RegexSet> =
    LazyLock::new(|| RegexSet::new(MARKUP_PATTERNS).expect("markup patterns are valid regexes"));

/// Check that raw input is valid UTF-8.
pub fn is_valid_encoding(raw: &[u8]) -> bool {
    decode(raw).is_some()
}

/// View raw input as text, or `None` when it is not valid UTF-8.
pub fn decode(raw: &[u8]) -> Option<&str> {
    std::str::from_utf8(raw).ok()
}

/// Detect HTML/XML syntax that a downstream renderer could interpret.
///
/// Entity-encoded markup (`&lt;script&gt;`) is detected too, including one
/// extra level of encoding (`&amp;lt;script&amp;gt;`). A bare `&` is plain
/// text.
pub fn contains_markup(value: &str) -> bool {
    if MARKUP.is_match(value) {
        return true;
    }

    let decoded = decode_html_entities(value);
    if let Cow::Borrowed(_) = decoded {
        return false;
    }
    if MARKUP.is_match(&decoded) {
        return true;
    }

    MARKUP.is_match(&decode_html_entities(&decoded))
}

/// Detect control characters other than tab and line feed.
///
/// Tab and line feed are what give multi-line fields their list structure.
pub fn contains_control_chars(value: &str) -> bool {
    value.chars().any(is_disallowed_control)
}

fn is_disallowed_control(c: char) -> bool {
    matches!(
        c,
        '\u{00}'..='\u{08}' | '\u{0B}' | '\u{0C}' | '\u{0E}'..='\u{1F}' | '\u{7F}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding() {
        assert!(is_valid_encoding("azúcar moreno".as_bytes()));
        assert!(is_valid_encoding(b""));
        assert!(!is_valid_encoding(&[0x61, 0xff, 0x62]));
        // truncated two-byte sequence
        assert!(!is_valid_encoding(&[0xc3]));
    }

    #[test]
    fn test_detects_tags() {
        assert!(contains_markup("<b>azucar</b>"));
        assert!(contains_markup("<script>alert(1)</script>"));
        assert!(contains_markup("< script >"));
        assert!(contains_markup("</ div>"));
        assert!(contains_markup(r#"<img src="x" onerror="y">"#));
        assert!(contains_markup("<SCRIPT>"));
        assert!(contains_markup("<my-widget>"));
        assert!(contains_markup("harina\n<a\nhref=x>\nsal"));
    }

    #[test]
    fn test_detects_comments_cdata_doctype_pi() {
        assert!(contains_markup("harina <!-- oculto"));
        assert!(contains_markup("<![CDATA[ x"));
        assert!(contains_markup("<![cdata[ x"));
        assert!(contains_markup("<!DOCTYPE html"));
        assert!(contains_markup("<!doctype html"));
        assert!(contains_markup("<?php echo 1;"));
        assert!(contains_markup("<?xml version"));
    }

    #[test]
    fn test_detects_entity_encoded_markup() {
        assert!(contains_markup("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(contains_markup("&#60;b&#62;"));
        assert!(contains_markup("&amp;lt;script&amp;gt;alert(1)&amp;lt;/script&amp;gt;"));
    }

    #[test]
    fn test_plain_text_is_not_markup() {
        assert!(!contains_markup("sal & pimienta"));
        assert!(!contains_markup("sal &amp; pimienta"));
        assert!(!contains_markup("sal &amp;amp; pimienta"));
        assert!(!contains_markup("1 < 2"));
        assert!(!contains_markup("3 > 2"));
        assert!(!contains_markup("<> vacio"));
        assert!(!contains_markup("harina\nazucar"));
    }

    #[test]
    fn test_control_chars() {
        assert!(contains_control_chars("a\u{0}b"));
        assert!(contains_control_chars("a\u{08}b"));
        assert!(contains_control_chars("a\u{0B}b"));
        assert!(contains_control_chars("a\u{0C}b"));
        assert!(contains_control_chars("a\u{1B}[31m"));
        assert!(contains_control_chars("a\u{7F}"));
    }

    #[test]
    fn test_tab_and_line_feed_are_allowed() {
        assert!(!contains_control_chars("harina\tazucar\nsal"));
        assert!(!contains_control_chars("ñandú"));
    }
}
