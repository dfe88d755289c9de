//! Plain-text extraction over the document tree, used for reading-time
//! estimates and excerpts.

use crate::{Document, Inline, Node};

/// Collects every text run in the document, in document order, separated by
/// single spaces.
pub fn plain_text(document: &Document) -> String {
    let mut out = String::new();
    for node in &document.content {
        collect_block(node, &mut out);
    }
    // Normalize: collect_* appends a trailing separator after each run.
    let trimmed = out.trim_end();
    trimmed.to_string()
}

/// Whitespace-separated word count of the document's text content.
pub fn word_count(document: &Document) -> usize {
    plain_text(document).split_whitespace().count()
}

fn collect_block(node: &Node, out: &mut String) {
    match node {
        Node::Paragraph { children } | Node::Heading { children, .. } => {
            collect_inlines(children, out);
        }
        Node::UnorderedList { items } | Node::OrderedList { items } => {
            for item in items {
                for child in &item.children {
                    collect_block(child, out);
                }
            }
        }
        Node::Table { rows } => {
            for row in rows {
                for cell in &row.cells {
                    for child in &cell.children {
                        collect_block(child, out);
                    }
                }
            }
        }
        Node::EmbeddedAsset { .. } => {}
    }
}

fn collect_inlines(children: &[Inline], out: &mut String) {
    for inline in children {
        match inline {
            Inline::Text { value, .. } => {
                if !value.is_empty() {
                    out.push_str(value);
                    out.push(' ');
                }
            }
            Inline::Hyperlink { children, .. } => collect_inlines(children, out),
        }
    }
}
