//! Newtype wrapper for heading anchor identifiers
//!
//! Anchors are derived deterministically from heading text and double as the
//! rendered element's `id` attribute and the tracker's lookup key.

use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

/// An identifier for a heading anchor.
///
/// Two headings with the same normalized text collide to the same anchor;
/// lookups then resolve to the last one written. This is a known limitation
/// of the identifier scheme, not an error.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct AnchorId(Arc<str>);

impl AnchorId {
    /// Creates an AnchorId from an already-derived identifier string.
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Derives the anchor for a heading from its text content.
    ///
    /// The derivation is: lowercase, collapse every run of characters outside
    /// `[a-z0-9]` into a single hyphen, strip leading and trailing hyphens,
    /// then prefix with `heading-`. Non-ASCII characters are *not* folded to
    /// their closest ASCII letter; they collapse into the hyphen runs like any
    /// other character outside the allowed set, so published anchors stay
    /// stable regardless of locale settings.
    ///
    /// Empty heading text derives `heading-`, a degenerate but defined value.
    pub fn for_heading(text: &str) -> Self {
        let mut slug = String::with_capacity(text.len() + 8);
        slug.push_str("heading-");
        let mut pending_hyphen = false;
        let mut wrote_any = false;
        for ch in text.chars().flat_map(char::to_lowercase) {
            if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
                if pending_hyphen && wrote_any {
                    slug.push('-');
                }
                slug.push(ch);
                wrote_any = true;
                pending_hyphen = false;
            } else {
                pending_hyphen = true;
            }
        }
        Self(slug.into())
    }

    /// Returns the string representation of this anchor.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for AnchorId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for AnchorId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for AnchorId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnchorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for AnchorId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
