//! Wire-format decoding.
//!
//! The content API delivers documents as `nodeType`-tagged JSON records with a
//! uniform shape: every node has a `nodeType`, an optional `content` array,
//! and a `data` object whose meaning depends on the kind (`uri` on
//! hyperlinks, `target.fields` on embedded assets). Decoding happens in two
//! steps: serde deserializes the uniform raw shape, then conversion maps raw
//! nodes onto the closed model and rejects anything outside it.

use serde::Deserialize;

use vellum_types::HeadingLevel;

use crate::error::DocError;
use crate::{
    Asset, AssetFile, Document, ImageDimensions, Inline, ListItem, Marks, Node, TableCell,
    TableRow,
};

#[derive(Debug, Deserialize)]
struct RawNode {
    #[serde(rename = "nodeType")]
    node_type: String,
    #[serde(default)]
    content: Vec<RawNode>,
    #[serde(default)]
    value: String,
    #[serde(default)]
    marks: Vec<RawMark>,
    #[serde(default)]
    data: RawData,
}

#[derive(Debug, Deserialize)]
struct RawMark {
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Deserialize, Default)]
struct RawData {
    uri: Option<String>,
    target: Option<RawTarget>,
}

#[derive(Debug, Deserialize)]
struct RawTarget {
    #[serde(default)]
    fields: RawAssetFields,
}

#[derive(Debug, Deserialize, Default)]
struct RawAssetFields {
    title: Option<String>,
    file: Option<RawFile>,
}

#[derive(Debug, Deserialize)]
struct RawFile {
    url: String,
    #[serde(default)]
    details: RawFileDetails,
}

#[derive(Debug, Deserialize, Default)]
struct RawFileDetails {
    image: Option<RawImageDimensions>,
}

#[derive(Debug, Deserialize)]
struct RawImageDimensions {
    width: u32,
    height: u32,
}

pub(crate) fn document_from_json(json: &str) -> Result<Document, DocError> {
    let raw: RawNode = serde_json::from_str(json)?;
    convert_document(raw)
}

pub(crate) fn document_from_value(value: serde_json::Value) -> Result<Document, DocError> {
    let raw: RawNode = serde_json::from_value(value)?;
    convert_document(raw)
}

fn convert_document(raw: RawNode) -> Result<Document, DocError> {
    if raw.node_type != "document" {
        return Err(DocError::NotADocument(raw.node_type));
    }
    let content = raw
        .content
        .into_iter()
        .map(convert_block)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Document { content })
}

fn convert_block(raw: RawNode) -> Result<Node, DocError> {
    match raw.node_type.as_str() {
        "paragraph" => Ok(Node::Paragraph {
            children: convert_inlines(raw.content)?,
        }),
        "heading-2" => convert_heading(HeadingLevel::H2, raw),
        "heading-3" => convert_heading(HeadingLevel::H3, raw),
        "heading-4" => convert_heading(HeadingLevel::H4, raw),
        "unordered-list" => Ok(Node::UnorderedList {
            items: convert_list_items(raw.content)?,
        }),
        "ordered-list" => Ok(Node::OrderedList {
            items: convert_list_items(raw.content)?,
        }),
        "table" => Ok(Node::Table {
            rows: convert_rows(raw.content)?,
        }),
        "embedded-asset-block" => Ok(Node::EmbeddedAsset {
            asset: convert_asset(raw.data),
        }),
        other => Err(DocError::UnsupportedNode(other.to_string())),
    }
}

fn convert_heading(level: HeadingLevel, raw: RawNode) -> Result<Node, DocError> {
    Ok(Node::Heading {
        level,
        children: convert_inlines(raw.content)?,
    })
}

fn convert_inlines(content: Vec<RawNode>) -> Result<Vec<Inline>, DocError> {
    content.into_iter().map(convert_inline).collect()
}

fn convert_inline(raw: RawNode) -> Result<Inline, DocError> {
    match raw.node_type.as_str() {
        "text" => Ok(Inline::Text {
            value: raw.value,
            marks: convert_marks(&raw.marks),
        }),
        "hyperlink" => {
            let uri = raw.data.uri.ok_or(DocError::MissingLinkUri)?;
            Ok(Inline::Hyperlink {
                uri,
                children: convert_inlines(raw.content)?,
            })
        }
        other => Err(DocError::UnexpectedChild {
            parent: "inline content",
            child: other.to_string(),
        }),
    }
}

/// Unknown mark types pass through undecorated; the set of renderable marks
/// is fixed, and a mark the renderer has no treatment for is simply plain.
fn convert_marks(raw: &[RawMark]) -> Marks {
    let mut marks = Marks::default();
    for mark in raw {
        match mark.kind.as_str() {
            "bold" => marks.bold = true,
            "italic" => marks.italic = true,
            "underline" => marks.underline = true,
            "code" => marks.code = true,
            _ => {}
        }
    }
    marks
}

fn convert_list_items(content: Vec<RawNode>) -> Result<Vec<ListItem>, DocError> {
    content
        .into_iter()
        .map(|raw| match raw.node_type.as_str() {
            "list-item" => Ok(ListItem {
                children: raw
                    .content
                    .into_iter()
                    .map(convert_block)
                    .collect::<Result<Vec<_>, _>>()?,
            }),
            other => Err(DocError::UnexpectedChild {
                parent: "list",
                child: other.to_string(),
            }),
        })
        .collect()
}

fn convert_rows(content: Vec<RawNode>) -> Result<Vec<TableRow>, DocError> {
    content
        .into_iter()
        .map(|raw| match raw.node_type.as_str() {
            "table-row" => Ok(TableRow {
                cells: convert_cells(raw.content)?,
            }),
            other => Err(DocError::UnexpectedChild {
                parent: "table",
                child: other.to_string(),
            }),
        })
        .collect()
}

fn convert_cells(content: Vec<RawNode>) -> Result<Vec<TableCell>, DocError> {
    content
        .into_iter()
        .map(|raw| {
            let header = match raw.node_type.as_str() {
                "table-header-cell" => true,
                "table-cell" => false,
                other => {
                    return Err(DocError::UnexpectedChild {
                        parent: "table-row",
                        child: other.to_string(),
                    });
                }
            };
            Ok(TableCell {
                header,
                children: raw
                    .content
                    .into_iter()
                    .map(convert_block)
                    .collect::<Result<Vec<_>, _>>()?,
            })
        })
        .collect()
}

fn convert_asset(data: RawData) -> Asset {
    let fields = match data.target {
        Some(target) => target.fields,
        None => RawAssetFields::default(),
    };
    convert_asset_fields(fields)
}

fn convert_asset_fields(fields: RawAssetFields) -> Asset {
    Asset {
        title: fields.title,
        file: fields.file.map(|file| AssetFile {
            url: file.url,
            image: file.details.image.map(|dims| ImageDimensions {
                width: dims.width,
                height: dims.height,
            }),
        }),
    }
}

/// Decodes a standalone asset link of the wire shape
/// `{"fields": {"title": .., "file": ..}}`, as used for post featured images.
pub(crate) fn asset_from_value(value: serde_json::Value) -> Result<Asset, DocError> {
    let target: RawTarget = serde_json::from_value(value)?;
    Ok(convert_asset_fields(target.fields))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> Result<Document, DocError> {
        document_from_json(json)
    }

    #[test]
    fn test_decode_representative_document() {
        let doc = decode(
            r#"{
                "nodeType": "document",
                "data": {},
                "content": [
                    {
                        "nodeType": "heading-2",
                        "data": {},
                        "content": [
                            {"nodeType": "text", "value": "Introducción", "marks": [], "data": {}}
                        ]
                    },
                    {
                        "nodeType": "paragraph",
                        "data": {},
                        "content": [
                            {"nodeType": "text", "value": "Hola ", "marks": [], "data": {}},
                            {"nodeType": "text", "value": "mundo", "marks": [{"type": "bold"}], "data": {}},
                            {
                                "nodeType": "hyperlink",
                                "data": {"uri": "https://example.com"},
                                "content": [
                                    {"nodeType": "text", "value": "enlace", "marks": [], "data": {}}
                                ]
                            }
                        ]
                    },
                    {
                        "nodeType": "unordered-list",
                        "data": {},
                        "content": [
                            {
                                "nodeType": "list-item",
                                "data": {},
                                "content": [
                                    {
                                        "nodeType": "paragraph",
                                        "data": {},
                                        "content": [
                                            {"nodeType": "text", "value": "uno", "marks": [], "data": {}}
                                        ]
                                    }
                                ]
                            }
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(doc.content.len(), 3);
        match &doc.content[0] {
            Node::Heading { level, children } => {
                assert_eq!(*level, HeadingLevel::H2);
                assert_eq!(crate::leading_text(children), "Introducción");
            }
            other => panic!("expected heading, got {}", other.kind()),
        }
        match &doc.content[1] {
            Node::Paragraph { children } => {
                assert_eq!(children.len(), 3);
                assert!(matches!(
                    &children[1],
                    Inline::Text { marks, .. } if marks.bold && !marks.italic
                ));
                assert!(matches!(
                    &children[2],
                    Inline::Hyperlink { uri, .. } if uri == "https://example.com"
                ));
            }
            other => panic!("expected paragraph, got {}", other.kind()),
        }
    }

    #[test]
    fn test_decode_table() {
        let doc = decode(
            r#"{
                "nodeType": "document",
                "content": [
                    {
                        "nodeType": "table",
                        "content": [
                            {
                                "nodeType": "table-row",
                                "content": [
                                    {
                                        "nodeType": "table-header-cell",
                                        "content": [
                                            {"nodeType": "paragraph", "content": [
                                                {"nodeType": "text", "value": "Plan", "marks": []}
                                            ]}
                                        ]
                                    },
                                    {
                                        "nodeType": "table-cell",
                                        "content": [
                                            {"nodeType": "paragraph", "content": [
                                                {"nodeType": "text", "value": "Gratis", "marks": []}
                                            ]}
                                        ]
                                    }
                                ]
                            }
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();

        match &doc.content[0] {
            Node::Table { rows } => {
                assert_eq!(rows.len(), 1);
                assert!(rows[0].cells[0].header);
                assert!(!rows[0].cells[1].header);
            }
            other => panic!("expected table, got {}", other.kind()),
        }
    }

    #[test]
    fn test_decode_embedded_asset() {
        let doc = decode(
            r#"{
                "nodeType": "document",
                "content": [
                    {
                        "nodeType": "embedded-asset-block",
                        "content": [],
                        "data": {
                            "target": {
                                "fields": {
                                    "title": "Dashboard",
                                    "file": {
                                        "url": "//images.cdn.example/dash.png",
                                        "details": {"image": {"width": 1200, "height": 675}}
                                    }
                                }
                            }
                        }
                    }
                ]
            }"#,
        )
        .unwrap();

        match &doc.content[0] {
            Node::EmbeddedAsset { asset } => {
                assert_eq!(asset.title.as_deref(), Some("Dashboard"));
                let file = asset.file.as_ref().unwrap();
                assert_eq!(file.url, "//images.cdn.example/dash.png");
                assert_eq!(
                    file.image,
                    Some(ImageDimensions {
                        width: 1200,
                        height: 675
                    })
                );
            }
            other => panic!("expected asset, got {}", other.kind()),
        }
    }

    #[test]
    fn test_asset_without_file_decodes() {
        // The node decodes; whether it renders is the renderer's policy call.
        let doc = decode(
            r#"{
                "nodeType": "document",
                "content": [
                    {"nodeType": "embedded-asset-block", "content": [], "data": {"target": {"fields": {}}}}
                ]
            }"#,
        )
        .unwrap();
        match &doc.content[0] {
            Node::EmbeddedAsset { asset } => assert!(asset.file.is_none()),
            other => panic!("expected asset, got {}", other.kind()),
        }
    }

    #[test]
    fn test_unknown_block_rejected() {
        let err = decode(
            r#"{"nodeType": "document", "content": [{"nodeType": "blockquote", "content": []}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, DocError::UnsupportedNode(kind) if kind == "blockquote"));
    }

    #[test]
    fn test_unknown_mark_ignored() {
        let doc = decode(
            r#"{
                "nodeType": "document",
                "content": [
                    {"nodeType": "paragraph", "content": [
                        {"nodeType": "text", "value": "x", "marks": [{"type": "superscript"}]}
                    ]}
                ]
            }"#,
        )
        .unwrap();
        match &doc.content[0] {
            Node::Paragraph { children } => {
                assert!(matches!(&children[0], Inline::Text { marks, .. } if marks.is_plain()));
            }
            other => panic!("expected paragraph, got {}", other.kind()),
        }
    }

    #[test]
    fn test_hyperlink_without_uri_rejected() {
        let err = decode(
            r#"{
                "nodeType": "document",
                "content": [
                    {"nodeType": "paragraph", "content": [
                        {"nodeType": "hyperlink", "data": {}, "content": []}
                    ]}
                ]
            }"#,
        )
        .unwrap_err();
        assert!(matches!(err, DocError::MissingLinkUri));
    }

    #[test]
    fn test_root_must_be_document() {
        let err = decode(r#"{"nodeType": "paragraph", "content": []}"#).unwrap_err();
        assert!(matches!(err, DocError::NotADocument(kind) if kind == "paragraph"));
    }
}
