//! Category slugs.

use unicode_normalization::UnicodeNormalization;

/// Slug used when a label has no slug-able characters.
pub const FALLBACK_SLUG: &str = "uncategorized";

/// Turn a display label into a filter key.
///
/// Lowercases, strips combining diacritics, and collapses every run of
/// characters outside `[a-z0-9]` into a single `-`.
pub fn slugify(label: &str) -> String {
    let lowered = label.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_dash = false;

    for ch in lowered.nfd() {
        if ('\u{0300}'..='\u{036f}').contains(&ch) {
            continue;
        }
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}
