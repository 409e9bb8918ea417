//! Nested enumeration state machine.
//!
//! Depth is declared by each `[enum=N]` line, so the renderer only tracks
//! the currently open depth and opens or closes lists by the delta.

use std::sync::LazyLock;

use regex::Regex;

use super::inline::render_inline;
use super::paragraph::text_to_paragraphs;

/// Deepest list nesting a `[enum=N]` line can request; deeper tags stay text.
pub const MAX_ENUM_DEPTH: usize = 1024;

const LIST_OPEN: &str = r#"<ul class="enum">"#;
const LIST_CLOSE: &str = "</ul>";

static ENUM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*\[enum=([0-9]+)\](.*?)\[/enum\]\s*$").expect("enum pattern")
});

/// One classified input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// `[enum=N]content[/enum]`, depth at least 1.
    Item { depth: usize, content: &'a str },
    /// Anything else, including malformed enum tags.
    Text(&'a str),
}

impl<'a> Line<'a> {
    pub fn classify(raw: &'a str) -> Self {
        let Some(caps) = ENUM_RE.captures(raw) else {
            return Self::Text(raw);
        };
        let (Some(depth), Some(content)) = (caps.get(1), caps.get(2)) else {
            return Self::Text(raw);
        };
        match depth.as_str().parse::<usize>() {
            Ok(n) if n <= MAX_ENUM_DEPTH => Self::Item {
                depth: n.max(1),
                content: content.as_str(),
            },
            _ => Self::Text(raw),
        }
    }
}

/// Converter state for one description.
#[derive(Debug, Default)]
struct Renderer<'a> {
    html: String,
    level: usize,
    buffer: Vec<&'a str>,
}

impl<'a> Renderer<'a> {
    fn open(&mut self, n: usize) {
        for _ in 0..n {
            self.html.push_str(LIST_OPEN);
        }
    }

    fn close(&mut self, n: usize) {
        for _ in 0..n {
            self.html.push_str(LIST_CLOSE);
        }
    }

    fn flush(&mut self) {
        if !self.buffer.is_empty() {
            let text = self.buffer.join("\n");
            self.html.push_str(&text_to_paragraphs(&text));
            self.buffer.clear();
        }
    }

    fn push(&mut self, line: Line<'a>) {
        match line {
            Line::Item { depth, content } => {
                self.flush();
                if depth > self.level {
                    self.open(depth - self.level);
                } else if depth < self.level {
                    self.close(self.level - depth);
                }
                self.level = depth;
                self.html.push_str("<li>");
                self.html.push_str(&render_inline(content));
                self.html.push_str("</li>");
            }
            Line::Text(raw) => {
                if self.level > 0 {
                    self.close(self.level);
                    self.level = 0;
                }
                self.buffer.push(raw);
            }
        }
    }

    fn finish(mut self) -> String {
        self.close(self.level);
        self.flush();
        self.html
    }
}

/// Render a description with paragraphs and nested enumerations.
pub fn render_description(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let text = text.replace("\r\n", "\n");
    let mut renderer = Renderer::default();
    for raw in text.split('\n') {
        renderer.push(Line::classify(raw));
    }
    renderer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_item() {
        assert_eq!(
            Line::classify("  [ENUM=2]hello[/Enum]  "),
            Line::Item {
                depth: 2,
                content: "hello"
            }
        );
    }

    #[test]
    fn test_classify_clamps_zero_depth() {
        assert_eq!(
            Line::classify("[enum=0]x[/enum]"),
            Line::Item {
                depth: 1,
                content: "x"
            }
        );
    }

    #[test]
    fn test_classify_deep_levels() {
        assert_eq!(
            Line::classify("[enum=500]x[/enum]"),
            Line::Item {
                depth: 500,
                content: "x"
            }
        );
        assert_eq!(Line::classify("[enum=1025]x[/enum]"), Line::Text("[enum=1025]x[/enum]"));
    }

    #[test]
    fn test_deep_levels_close_by_delta() {
        let html = render_description("[enum=40]a[/enum]\n[enum=33]b[/enum]");
        let (before_b, _) = html.split_once("<li>b</li>").unwrap();
        assert_eq!(before_b.matches(LIST_OPEN).count(), 40);
        assert!(before_b.ends_with(&format!("<li>a</li>{}", LIST_CLOSE.repeat(7))));
        assert_eq!(html.matches(LIST_CLOSE).count(), 40);
    }

    #[test]
    fn test_classify_malformed_tags() {
        assert_eq!(Line::classify("[enum=1]x"), Line::Text("[enum=1]x"));
        assert_eq!(Line::classify("[enum=a]x[/enum]"), Line::Text("[enum=a]x[/enum]"));
        assert_eq!(Line::classify("[enum=-1]x[/enum]"), Line::Text("[enum=-1]x[/enum]"));
        assert_eq!(
            Line::classify("[enum=99999999999999999999999]x[/enum]"),
            Line::Text("[enum=99999999999999999999999]x[/enum]")
        );
        assert_eq!(Line::classify("text [enum=1]x[/enum]"), Line::Text("text [enum=1]x[/enum]"));
    }

    #[test]
    fn test_nested_levels() {
        assert_eq!(
            render_description("[enum=1]A[/enum]\n[enum=2]B[/enum]\n[enum=1]C[/enum]"),
            r#"<ul class="enum"><li>A</li><ul class="enum"><li>B</li></ul><li>C</li></ul>"#
        );
    }

    #[test]
    fn test_deep_first_item_opens_all_levels() {
        assert_eq!(
            render_description("[enum=3]X[/enum]"),
            r#"<ul class="enum"><ul class="enum"><ul class="enum"><li>X</li></ul></ul></ul>"#
        );
    }

    #[test]
    fn test_text_closes_open_lists() {
        assert_eq!(
            render_description("intro\n[enum=2]a[/enum]\nafter"),
            r#"<p>intro</p><ul class="enum"><ul class="enum"><li>a</li></ul></ul><p>after</p>"#
        );
    }

    #[test]
    fn test_blank_line_after_list_is_buffered() {
        assert_eq!(
            render_description("[enum=1]a[/enum]\n\nnext"),
            r#"<ul class="enum"><li>a</li></ul><p><br>next</p>"#
        );
    }

    #[test]
    fn test_item_content_is_inline_only() {
        assert_eq!(
            render_description("[enum=1]<b> & [url=/x]y[/url][/enum]"),
            r#"<ul class="enum"><li>&lt;b&gt; &amp; <a href="/x" target="_blank" rel="noopener noreferrer">y</a></li></ul>"#
        );
    }

    #[test]
    fn test_empty_description() {
        assert_eq!(render_description(""), "");
    }
}
