//! Paragraph splitting.

use std::sync::LazyLock;

use regex::Regex;

use super::inline::render_inline;

static BLANK_LINES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("blank line pattern"));

/// Render plain text as `<p>` blocks.
///
/// Inline markup is rendered first; blocks are separated by one or more
/// blank lines and single newlines become `<br>`.
pub fn text_to_paragraphs(raw: &str) -> String {
    let safe = render_inline(&raw.replace("\r\n", "\n"));
    BLANK_LINES_RE
        .split(&safe)
        .map(|block| format!("<p>{}</p>", block.replace('\n', "<br>")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_paragraph_with_breaks() {
        assert_eq!(text_to_paragraphs("one\ntwo"), "<p>one<br>two</p>");
    }

    #[test]
    fn test_blank_lines_split_blocks() {
        assert_eq!(
            text_to_paragraphs("a\n\nb\n\n\n\nc"),
            "<p>a</p><p>b</p><p>c</p>"
        );
    }

    #[test]
    fn test_crlf_is_normalized() {
        assert_eq!(text_to_paragraphs("a\r\nb\r\n\r\nc"), "<p>a<br>b</p><p>c</p>");
    }

    #[test]
    fn test_empty_text_is_one_empty_paragraph() {
        assert_eq!(text_to_paragraphs(""), "<p></p>");
    }

    #[test]
    fn test_links_survive_splitting() {
        let html = text_to_paragraphs("x\n\n[url=/a]A & B[/url]");
        assert!(html.ends_with(r#"<p><a href="/a" target="_blank" rel="noopener noreferrer">A &amp; B</a></p>"#));
    }
}
