//! Minimal HTML helpers for Telegram's HTML parse mode.
//!
//! [`escape`] neutralizes user text; the quote helpers wrap already-escaped
//! text, so always call them as `blockquote(&escape(text))`.

/// Escapes `&`, `<` and `>` for Telegram HTML.
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Wraps already-escaped text in a blockquote.
pub fn blockquote(escaped: &str) -> String {
    format!("<blockquote>{}</blockquote>", escaped)
}

/// Wraps already-escaped text in a collapsible blockquote.
pub fn expandable_blockquote(escaped: &str) -> String {
    format!("<blockquote expandable>{}</blockquote>", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_special_chars() {
        assert_eq!(escape("a < b & c > d"), "a &lt; b &amp; c &gt; d");
    }

    #[test]
    fn test_escape_amp_first() {
        // `&` is replaced first so generated entities are not re-escaped.
        assert_eq!(escape("<&>"), "&lt;&amp;&gt;");
    }

    #[test]
    fn test_blockquote_wraps() {
        assert_eq!(blockquote("text"), "<blockquote>text</blockquote>");
    }

    #[test]
    fn test_expandable_blockquote_wraps() {
        assert_eq!(
            expandable_blockquote("text"),
            "<blockquote expandable>text</blockquote>"
        );
    }
}
