//! Inline rich-text scanner for the Markdown subset used in resume lines.

use once_cell::sync::Lazy;
use regex::Regex;

/// A span of inline content with consistent formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSpan {
    /// Plain text.
    Text(String),
    /// `**bold**` text.
    Bold(String),
    /// `[label](url)` hyperlink.
    Link { label: String, url: String },
}

static INLINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*|\[(.*?)\]\((.*?)\)").expect("inline pattern"));

/// Splits a line into plain, bold and link spans.
///
/// Single linear scan with two alternating match types; anything the pattern
/// does not recognize (including unterminated markers) falls through as plain
/// text.
pub fn parse_inline(text: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    let mut last_end = 0;

    for caps in INLINE.captures_iter(text) {
        let m = caps.get(0).expect("whole match");
        if m.start() > last_end {
            spans.push(InlineSpan::Text(text[last_end..m.start()].to_string()));
        }

        if let Some(bold) = caps.get(1) {
            spans.push(InlineSpan::Bold(bold.as_str().to_string()));
        } else if let (Some(label), Some(url)) = (caps.get(2), caps.get(3)) {
            spans.push(InlineSpan::Link {
                label: label.as_str().to_string(),
                url: url.as_str().to_string(),
            });
        }

        last_end = m.end();
    }

    if last_end < text.len() {
        spans.push(InlineSpan::Text(text[last_end..].to_string()));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_text_is_a_single_span() {
        assert_eq!(
            parse_inline("just text"),
            vec![InlineSpan::Text("just text".to_string())]
        );
    }

    #[test]
    fn test_bold_and_link_spans_are_delimited() {
        let spans = parse_inline("call **me** at [mail](mailto:a@b.c) today");
        assert_eq!(
            spans,
            vec![
                InlineSpan::Text("call ".to_string()),
                InlineSpan::Bold("me".to_string()),
                InlineSpan::Text(" at ".to_string()),
                InlineSpan::Link {
                    label: "mail".to_string(),
                    url: "mailto:a@b.c".to_string(),
                },
                InlineSpan::Text(" today".to_string()),
            ]
        );
    }

    #[test]
    fn test_leading_and_trailing_markup() {
        let spans = parse_inline("**Lead** middle [end](https://x.y)");
        assert_eq!(spans[0], InlineSpan::Bold("Lead".to_string()));
        assert_eq!(
            spans.last(),
            Some(&InlineSpan::Link {
                label: "end".to_string(),
                url: "https://x.y".to_string(),
            })
        );
    }

    #[test]
    fn test_unterminated_markers_degrade_to_plain_text() {
        assert_eq!(
            parse_inline("a **dangling marker"),
            vec![InlineSpan::Text("a **dangling marker".to_string())]
        );
        assert_eq!(
            parse_inline("[no url]"),
            vec![InlineSpan::Text("[no url]".to_string())]
        );
    }

    #[test]
    fn test_adjacent_bold_spans() {
        assert_eq!(
            parse_inline("**a****b**"),
            vec![
                InlineSpan::Bold("a".to_string()),
                InlineSpan::Bold("b".to_string()),
            ]
        );
    }
}
