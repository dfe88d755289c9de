//! Rich-text document model.
//!
//! This crate defines the in-memory representation of a CMS rich-text
//! document: an ordered tree of block nodes with inline content, decoded from
//! the `nodeType`-tagged JSON the content API returns. The model is a closed
//! set of variants; documents carrying node kinds outside it are rejected at
//! decode time rather than smuggled through as dynamic records.

mod de;
mod error;
mod text;

pub use error::DocError;
pub use text::{plain_text, word_count};

pub use vellum_types::HeadingLevel;

/// A complete rich-text document: an ordered sequence of block nodes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub content: Vec<Node>,
}

impl Document {
    /// Decodes a document from its wire JSON representation.
    pub fn from_json(json: &str) -> Result<Self, DocError> {
        de::document_from_json(json)
    }

    /// Decodes a document from an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, DocError> {
        de::document_from_value(value)
    }
}

/// A block-level node in the document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A paragraph of inline content.
    Paragraph { children: Vec<Inline> },
    /// A heading with a level and inline content.
    ///
    /// Headings carry exactly one direct text child in well-formed documents;
    /// the anchor is derived from that child (or from the empty string when it
    /// is absent).
    Heading {
        level: HeadingLevel,
        children: Vec<Inline>,
    },
    /// A bulleted list.
    UnorderedList { items: Vec<ListItem> },
    /// A numbered list.
    OrderedList { items: Vec<ListItem> },
    /// A table of rows of header/data cells.
    Table { rows: Vec<TableRow> },
    /// An asset (image) embedded between blocks.
    EmbeddedAsset { asset: Asset },
}

impl Node {
    /// Returns a string identifier for the node kind, used in error messages
    /// and logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Paragraph { .. } => "paragraph",
            Node::Heading { .. } => "heading",
            Node::UnorderedList { .. } => "unordered-list",
            Node::OrderedList { .. } => "ordered-list",
            Node::Table { .. } => "table",
            Node::EmbeddedAsset { .. } => "embedded-asset",
        }
    }
}

/// An inline-level node within a paragraph, heading, or hyperlink.
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    /// A run of text with presentation marks.
    Text { value: String, marks: Marks },
    /// An inline hyperlink wrapping further inline content.
    Hyperlink { uri: String, children: Vec<Inline> },
}

/// Presentation marks on a text run. Marks combine freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Marks {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub code: bool,
}

impl Marks {
    pub fn is_plain(&self) -> bool {
        !(self.bold || self.italic || self.underline || self.code)
    }
}

/// An item within an ordered or unordered list. Items contain block content.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListItem {
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

/// A table cell; `header` distinguishes `th` from `td`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableCell {
    pub header: bool,
    pub children: Vec<Node>,
}

/// A media asset bound to an embedded-asset node.
///
/// `title` is optional in the source and falls back to an empty label when
/// rendered. `file` is required by the content model; a document that omits it
/// is malformed, and how the renderer reacts is a policy decision made there.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Asset {
    pub title: Option<String>,
    pub file: Option<AssetFile>,
}

impl Asset {
    /// Decodes an asset link (`{"fields": {...}}`) outside a document, e.g. a
    /// post's featured image.
    pub fn from_value(value: serde_json::Value) -> Result<Self, DocError> {
        de::asset_from_value(value)
    }
}

/// The bound file of an asset. URLs arrive scheme-relative from the CMS.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetFile {
    pub url: String,
    pub image: Option<ImageDimensions>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

/// The first direct text child's value, or the empty string.
///
/// This is the anchor-derivation input for headings: only the leading text
/// child participates, matching how anchors were originally assigned, so a
/// heading with no text content yields `""` rather than failing.
pub fn leading_text(children: &[Inline]) -> &str {
    match children.first() {
        Some(Inline::Text { value, .. }) => value,
        _ => "",
    }
}
