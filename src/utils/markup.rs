use regex::Regex;
use std::sync::OnceLock;

pub const DESCRIPTION_LIMIT: usize = 3000;

fn tag_pattern() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<[^>]+>").expect("valid tag regex"))
}

fn whitespace_pattern() -> &'static Regex {
    static WS: OnceLock<Regex> = OnceLock::new();
    WS.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace regex"))
}

/// Keeps at most `limit` characters (not bytes) of `text`.
pub fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

/// Turns an HTML vacancy description into a single line of plain text,
/// capped at [`DESCRIPTION_LIMIT`] characters after whitespace collapsing.
pub fn strip_markup(html: &str) -> String {
    let without_tags = tag_pattern().replace_all(html, " ");
    let collapsed = whitespace_pattern().replace_all(&without_tags, " ");
    truncate_chars(collapsed.trim(), DESCRIPTION_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_collapses_whitespace() {
        assert_eq!(strip_markup("<p>Hello   <b>world</b></p>"), "Hello world");
        assert_eq!(strip_markup("  <ul>\n<li>one</li>\t<li>two</li></ul> "), "one two");
    }

    #[test]
    fn truncates_after_collapsing() {
        // 11000 raw characters that collapse to 1999.
        let padded = "a          ".repeat(1000);
        assert_eq!(strip_markup(&padded), "a ".repeat(1000).trim_end());

        let long = format!("<div>{}</div>", "word   ".repeat(1000));
        let out = strip_markup(&long);
        assert_eq!(out.chars().count(), DESCRIPTION_LIMIT);
        assert!(!out.contains("  "));
    }

    #[test]
    fn truncation_respects_multibyte_characters() {
        let input = "я".repeat(DESCRIPTION_LIMIT + 10);
        assert_eq!(strip_markup(&input).chars().count(), DESCRIPTION_LIMIT);
        assert_eq!(truncate_chars("привет", 3), "при");
        assert_eq!(truncate_chars("hi", 10), "hi");
    }
}
