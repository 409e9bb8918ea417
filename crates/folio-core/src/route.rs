//! Fragment-based routing.
//!
//! The detail view is deep-linkable through the URL fragment:
//! `#project=<percent-encoded id>`. Any other fragment shows the grid.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Fragment key carrying the open project id.
pub const PROJECT_KEY: &str = "project=";

/// Application views addressable from the URL fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// Project grid: no `project=` in the fragment.
    Grid,
    /// Detail view for one project.
    Project { id: String },
}

impl Route {
    /// Parse a URL fragment (with or without the leading `#`).
    ///
    /// The first `project=` occurrence wins; its value runs up to the next
    /// `&`. Empty values and malformed percent-encoding resolve to
    /// [`Route::Grid`].
    pub fn from_hash(hash: &str) -> Self {
        let Some(start) = hash.find(PROJECT_KEY) else {
            return Self::Grid;
        };
        let value = hash[start + PROJECT_KEY.len()..]
            .split('&')
            .next()
            .unwrap_or_default();

        if value.is_empty() {
            return Self::Grid;
        }

        match decode_component(value) {
            Some(id) => Self::Project { id },
            None => Self::Grid,
        }
    }

    /// Format as a URL fragment, `None` for the grid (no fragment at all).
    pub fn to_hash(&self) -> Option<String> {
        match self {
            Self::Grid => None,
            Self::Project { id } => Some(format!("#{}{}", PROJECT_KEY, encode_component(id))),
        }
    }

    /// Whether a fragment carries a project deep link.
    pub fn is_project_hash(hash: &str) -> bool {
        hash.trim_start_matches('#').starts_with(PROJECT_KEY)
    }
}

// =============================================================================
// Percent Encoding
// =============================================================================

/// Bytes escaped by `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a fragment component the way browsers do with
/// `encodeURIComponent`.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Every `%` must start a two-digit hex escape.
fn has_valid_escapes(value: &str) -> bool {
    value.match_indices('%').all(|(i, _)| {
        value
            .as_bytes()
            .get(i + 1..i + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit))
    })
}

/// Decode a percent-encoded component. Returns `None` for truncated escapes
/// or byte sequences that are not UTF-8.
pub fn decode_component(value: &str) -> Option<String> {
    if !has_valid_escapes(value) {
        return None;
    }
    percent_decode_str(value)
        .decode_utf8()
        .ok()
        .map(|decoded| decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(Route::from_hash(""), Route::Grid);
        assert_eq!(Route::from_hash("#"), Route::Grid);
        assert_eq!(Route::from_hash("#about"), Route::Grid);
        assert_eq!(Route::from_hash("#project="), Route::Grid);
        assert_eq!(
            Route::from_hash("#project=site-web"),
            Route::Project {
                id: "site-web".to_string()
            }
        );
        assert_eq!(
            Route::from_hash("#project=caf%C3%A9%20bar&x=1"),
            Route::Project {
                id: "café bar".to_string()
            }
        );
        assert_eq!(
            Route::from_hash("#tab=1&project=b"),
            Route::Project {
                id: "b".to_string()
            }
        );
    }

    #[test]
    fn test_malformed_encoding_is_grid() {
        assert_eq!(Route::from_hash("#project=%E9"), Route::Grid);
        assert_eq!(Route::from_hash("#project=%4"), Route::Grid);
        assert_eq!(Route::from_hash("#project=%zz"), Route::Grid);
        assert_eq!(Route::from_hash("#project=%+4"), Route::Grid);
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(Route::Grid.to_hash(), None);
        assert_eq!(
            Route::Project {
                id: "café & co/1".to_string()
            }
            .to_hash()
            .as_deref(),
            Some("#project=caf%C3%A9%20%26%20co%2F1")
        );
    }

    #[test]
    fn test_hash_round_trip() {
        let route = Route::Project {
            id: "a b&c=d#e".to_string(),
        };
        let hash = route.to_hash().unwrap();
        assert_eq!(Route::from_hash(&hash), route);
    }

    #[test]
    fn test_is_project_hash() {
        assert!(Route::is_project_hash("#project=x"));
        assert!(Route::is_project_hash("project=x"));
        assert!(!Route::is_project_hash("#about"));
    }

    #[test]
    fn test_decode_component() {
        assert_eq!(decode_component("a%2Fb%25").as_deref(), Some("a/b%"));
        assert_eq!(decode_component("caf%c3%a9").as_deref(), Some("café"));
        assert_eq!(decode_component("100%"), None);
    }

    #[test]
    fn test_encode_unreserved() {
        assert_eq!(encode_component("A-z_0.9!~*'()"), "A-z_0.9!~*'()");
    }
}
