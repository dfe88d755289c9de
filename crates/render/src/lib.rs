//! Document renderer.
//!
//! Transforms a rich-text [`Document`](vellum_doc::Document) into a tree of
//! presentational HTML nodes, preserving document order. Heading elements get
//! their anchor `id` from the shared derivation in `vellum-types`, which is
//! what keeps rendered anchors and TOC lookups in agreement.

mod error;
mod html;
mod node;

pub use error::RenderError;
pub use html::{Element, HtmlNode, write_html};
pub use node::{AssetPolicy, HtmlRenderer, RenderOptions, secure_asset_url};
