//! Inline link handling.
//!
//! Links are rendered in two phases around the blanket escaping pass:
//! each `[url=TARGET]LABEL[/url]` is swapped for a placeholder token, the
//! remaining text is escaped, then the tokens are replaced by the finished
//! anchors. Anchor markup therefore never goes through the escaper.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::escape::escape_html;

/// Opens a placeholder token (private use area).
const TOKEN_OPEN: char = '\u{E000}';
/// Closes a placeholder token.
const TOKEN_CLOSE: char = '\u{E001}';

/// Destination used when a link target is not allowed.
pub const UNSAFE_HREF: &str = "#";

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[url=(.+?)\](.+?)\[/url\]").expect("link pattern"));

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x{E000}(\d+)\x{E001}").expect("token pattern"));

/// Text with its links lifted out into an anchor table.
#[derive(Debug, Clone, PartialEq)]
pub struct Protected {
    /// Source text with every link replaced by a placeholder token.
    pub text: String,
    /// Finished anchor markup, indexed by token number.
    pub anchors: Vec<String>,
}

/// Check a link target against the allow-list.
///
/// Accepts absolute `http(s)://` URLs and site-relative paths.
pub fn is_allowed_target(target: &str) -> bool {
    let lower = target.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://") || target.starts_with('/')
}

/// Build the anchor markup for one link occurrence.
fn anchor(target: &str, label: &str) -> String {
    let target = target.trim();
    let href = if is_allowed_target(target) {
        escape_html(target)
    } else {
        UNSAFE_HREF.to_string()
    };
    format!(
        r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
        href,
        escape_html(label.trim())
    )
}

/// First phase: replace links with placeholder tokens.
///
/// Sentinel characters already present in the input are replaced with
/// U+FFFD so user text cannot forge a token.
pub fn protect_links(src: &str) -> Protected {
    let src = src.replace([TOKEN_OPEN, TOKEN_CLOSE], "\u{FFFD}");
    let mut anchors = Vec::new();

    let text = LINK_RE
        .replace_all(&src, |caps: &Captures| {
            anchors.push(anchor(&caps[1], &caps[2]));
            format!("{}{}{}", TOKEN_OPEN, anchors.len() - 1, TOKEN_CLOSE)
        })
        .into_owned();

    Protected { text, anchors }
}

/// Last phase: swap placeholder tokens for their anchors.
pub fn restore_links(escaped: &str, anchors: &[String]) -> String {
    TOKEN_RE
        .replace_all(escaped, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|i| anchors.get(i))
                .cloned()
                .unwrap_or_default()
        })
        .into_owned()
}

/// Render inline markup: links become anchors, everything else is escaped.
pub fn render_inline(src: &str) -> String {
    let Protected { text, anchors } = protect_links(src);
    restore_links(&escape_html(&text), &anchors)
}
