use serde::{Serialize, Serializer};

use crate::anchor::AnchorId;

/// The heading levels that participate in the outline.
///
/// Level-1 headings are reserved for the page title and never appear inside a
/// document body, so the model only admits 2 through 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeadingLevel {
    H2,
    H3,
    H4,
}

impl HeadingLevel {
    /// Numeric level, e.g. `2` for `H2`.
    pub fn as_u8(self) -> u8 {
        match self {
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
        }
    }

    /// The HTML tag name for this level.
    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
        }
    }
}

impl Serialize for HeadingLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

/// An entry in the table of contents.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TocEntry {
    /// Heading level (2 = h2, 3 = h3, 4 = h4).
    pub level: HeadingLevel,
    /// The text content of the heading.
    pub text: String,
    /// The anchor ID to link to this heading.
    pub target_id: AnchorId,
}
