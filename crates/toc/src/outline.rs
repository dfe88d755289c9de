use vellum_doc::{Document, Node, leading_text};
use vellum_types::{AnchorId, TocEntry};

/// The navigable outline of a document: one entry per heading, in document
/// order.
///
/// Extraction is deliberately shallow: only top-level nodes are considered,
/// so a heading nested inside a list item or table cell is not discovered.
/// That matches where anchors are meaningful navigation targets and keeps the
/// outline in step with the rendered page structure.
#[derive(Debug, Clone, Default)]
pub struct Outline {
    entries: Vec<TocEntry>,
}

impl Outline {
    pub fn from_document(document: &Document) -> Self {
        let entries = document
            .content
            .iter()
            .filter_map(|node| match node {
                Node::Heading { level, children } => {
                    let text = leading_text(children);
                    Some(TocEntry {
                        level: *level,
                        text: text.to_string(),
                        target_id: AnchorId::for_heading(text),
                    })
                }
                _ => None,
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[TocEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// An empty outline produces no tracking UI and no observation.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of an anchor within the outline. Duplicate heading texts
    /// collide to one anchor; the first occurrence wins here, which is the
    /// entry a lookup by that anchor resolves to.
    pub fn position(&self, target: &AnchorId) -> Option<usize> {
        self.entries.iter().position(|e| &e.target_id == target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vellum_doc::{HeadingLevel, Inline, ListItem, Marks};

    fn heading(level: HeadingLevel, text: &str) -> Node {
        Node::Heading {
            level,
            children: vec![Inline::Text {
                value: text.into(),
                marks: Marks::default(),
            }],
        }
    }

    #[test]
    fn test_entries_in_document_order() {
        let doc = Document {
            content: vec![
                heading(HeadingLevel::H2, "Introducción"),
                Node::Paragraph { children: vec![] },
                heading(HeadingLevel::H3, "Beneficios"),
                heading(HeadingLevel::H2, "Conclusión"),
            ],
        };
        let outline = Outline::from_document(&doc);
        let levels: Vec<u8> = outline.entries().iter().map(|e| e.level.as_u8()).collect();
        assert_eq!(levels, [2, 3, 2]);
        assert_eq!(outline.entries()[0].target_id.as_str(), "heading-introducci-n");
        assert_eq!(outline.entries()[1].text, "Beneficios");
    }

    #[test]
    fn test_nested_headings_not_discovered() {
        let doc = Document {
            content: vec![Node::UnorderedList {
                items: vec![ListItem {
                    children: vec![heading(HeadingLevel::H3, "Oculto")],
                }],
            }],
        };
        assert!(Outline::from_document(&doc).is_empty());
    }

    #[test]
    fn test_empty_document_yields_empty_outline() {
        let outline = Outline::from_document(&Document::default());
        assert!(outline.is_empty());
        assert_eq!(outline.len(), 0);
    }

    #[test]
    fn test_position_resolves_first_on_collision() {
        let doc = Document {
            content: vec![
                heading(HeadingLevel::H2, "Resumen"),
                heading(HeadingLevel::H3, "Resumen"),
            ],
        };
        let outline = Outline::from_document(&doc);
        assert_eq!(outline.len(), 2);
        assert_eq!(outline.position(&AnchorId::for_heading("Resumen")), Some(0));
    }
}
