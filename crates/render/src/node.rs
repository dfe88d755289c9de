//! Node-kind mapping from the document model to presentational elements.

use vellum_doc::{Asset, Document, Inline, ListItem, Marks, Node, TableRow, leading_text};
use vellum_types::AnchorId;

use crate::error::RenderError;
use crate::html::{Element, HtmlNode, write_html};

/// What to do with an embedded asset whose bound file is missing.
///
/// A missing `file` is a violation of the content model, so the default is to
/// fail the render and surface it. `Skip` drops the node with a warning for
/// hosts that prefer a degraded page over no page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssetPolicy {
    #[default]
    Fail,
    Skip,
}

#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub asset_policy: AssetPolicy,
}

/// Renders a document into presentational HTML nodes, in document order.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Renders every top-level block, preserving document order. Skipped
    /// assets (under [`AssetPolicy::Skip`]) leave no output node.
    pub fn render(&self, document: &Document) -> Result<Vec<HtmlNode>, RenderError> {
        let mut out = Vec::with_capacity(document.content.len());
        for node in &document.content {
            if let Some(rendered) = self.render_block(node)? {
                out.push(rendered);
            }
        }
        Ok(out)
    }

    /// Renders and serializes in one step.
    pub fn render_to_string(&self, document: &Document) -> Result<String, RenderError> {
        Ok(write_html(&self.render(document)?))
    }

    fn render_block(&self, node: &Node) -> Result<Option<HtmlNode>, RenderError> {
        let rendered = match node {
            Node::Paragraph { children } => {
                Element::new("p").children(render_inlines(children)).into()
            }
            Node::Heading { level, children } => {
                // The anchor comes from the leading text child only; a heading
                // without one derives the empty-text anchor rather than failing.
                let anchor = AnchorId::for_heading(leading_text(children));
                Element::new(level.tag())
                    .attr("id", anchor.as_str())
                    .children(render_inlines(children))
                    .into()
            }
            Node::UnorderedList { items } => self.render_list("ul", items)?,
            Node::OrderedList { items } => self.render_list("ol", items)?,
            Node::Table { rows } => self.render_table(rows)?,
            Node::EmbeddedAsset { asset } => return self.render_asset(asset),
        };
        Ok(Some(rendered))
    }

    fn render_list(&self, tag: &'static str, items: &[ListItem]) -> Result<HtmlNode, RenderError> {
        let mut list = Element::new(tag);
        for item in items {
            let mut li = Element::new("li");
            for child in &item.children {
                if let Some(rendered) = self.render_block(child)? {
                    li.children.push(rendered);
                }
            }
            list.children.push(li.into());
        }
        Ok(list.into())
    }

    fn render_table(&self, rows: &[TableRow]) -> Result<HtmlNode, RenderError> {
        let mut table = Element::new("table");
        for row in rows {
            let mut tr = Element::new("tr");
            for cell in &row.cells {
                let tag = if cell.header { "th" } else { "td" };
                let mut rendered_cell = Element::new(tag);
                for child in &cell.children {
                    if let Some(rendered) = self.render_block(child)? {
                        rendered_cell.children.push(rendered);
                    }
                }
                tr.children.push(rendered_cell.into());
            }
            table.children.push(tr.into());
        }
        Ok(table.into())
    }

    fn render_asset(&self, asset: &Asset) -> Result<Option<HtmlNode>, RenderError> {
        let Some(file) = &asset.file else {
            return match self.options.asset_policy {
                AssetPolicy::Fail => Err(RenderError::MissingAssetFile {
                    title: asset.title.clone().unwrap_or_default(),
                }),
                AssetPolicy::Skip => {
                    log::warn!(
                        "skipping embedded asset '{}' with no bound file",
                        asset.title.as_deref().unwrap_or("")
                    );
                    Ok(None)
                }
            };
        };
        let mut img = Element::new("img")
            .attr("src", secure_asset_url(&file.url))
            .attr("alt", asset.title.as_deref().unwrap_or(""));
        if let Some(dims) = file.image {
            img = img
                .attr("width", dims.width.to_string())
                .attr("height", dims.height.to_string());
        }
        Ok(Some(img.into()))
    }
}

fn render_inlines(children: &[Inline]) -> Vec<HtmlNode> {
    children.iter().map(render_inline).collect()
}

fn render_inline(inline: &Inline) -> HtmlNode {
    match inline {
        Inline::Text { value, marks } => render_text(value, marks),
        Inline::Hyperlink { uri, children } => Element::new("a")
            .attr("href", uri.clone())
            .attr("target", "_blank")
            .attr("rel", "noopener noreferrer")
            .children(render_inlines(children))
            .into(),
    }
}

/// Marks wrap the text innermost-to-outermost as code, u, em, strong, so a
/// fully marked run serializes as `<strong><em><u><code>..</code></u></em></strong>`.
fn render_text(value: &str, marks: &Marks) -> HtmlNode {
    let mut node = HtmlNode::text(value);
    if marks.code {
        node = Element::new("code").child(node).into();
    }
    if marks.underline {
        node = Element::new("u").child(node).into();
    }
    if marks.italic {
        node = Element::new("em").child(node).into();
    }
    if marks.bold {
        node = Element::new("strong").child(node).into();
    }
    node
}

/// Upgrades a scheme-relative asset URL to explicit https.
///
/// The CMS delivers asset URLs as `//host/path`; anything already carrying a
/// scheme passes through unchanged.
pub fn secure_asset_url(url: &str) -> String {
    match url.strip_prefix("//") {
        Some(rest) => format!("https://{rest}"),
        None => url.to_string(),
    }
}
