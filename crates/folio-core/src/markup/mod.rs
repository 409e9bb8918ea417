//! Description markup to sanitized HTML.
//!
//! The dialect has two forms:
//! - `[url=TARGET]LABEL[/url]` inline links (http(s) or site-relative only)
//! - `[enum=N]CONTENT[/enum]` one list item at nesting depth `N`, one per line
//!
//! Everything else is plain text: escaped, split into paragraphs on blank
//! lines, with single newlines kept as `<br>`. The only unescaped markup in
//! the output is what the converter generates itself.

mod enumeration;
mod escape;
mod inline;
mod paragraph;

pub use enumeration::{Line, MAX_ENUM_DEPTH, render_description};
pub use escape::escape_html;
pub use inline::{UNSAFE_HREF, is_allowed_target, render_inline};
pub use paragraph::text_to_paragraphs;

/// Convert a raw description to HTML.
pub fn to_html(description: &str) -> String {
    render_description(description)
}
