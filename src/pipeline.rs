//! One-call page preparation: document to HTML, outline, and reading time.

use vellum_doc::{Document, word_count};
use vellum_render::{HtmlRenderer, RenderOptions, secure_asset_url};
use vellum_source::Post;
use vellum_toc::Outline;

use crate::error::PipelineError;

/// Reading-speed assumption for the reading-time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// Everything a hosting page needs to lay out a post.
#[derive(Debug, Clone)]
pub struct RenderedPost {
    /// The article body as serialized HTML, heading anchors included.
    pub html: String,
    /// The navigable outline; feed it to a `TocTracker` for scroll sync.
    pub outline: Outline,
    /// Estimated minutes of reading, rounded up.
    pub reading_minutes: u32,
    /// Featured image URL, upgraded to an explicit https scheme.
    pub featured_image_url: Option<String>,
}

/// Renders a post's document and derives the page-level extras.
pub fn render_post(post: &Post, options: RenderOptions) -> Result<RenderedPost, PipelineError> {
    log::debug!("rendering post '{}'", post.meta.slug);
    let renderer = HtmlRenderer::new(options);
    let html = renderer.render_to_string(&post.content)?;
    let outline = Outline::from_document(&post.content);
    let featured_image_url = post
        .meta
        .featured_image
        .as_ref()
        .and_then(|asset| asset.file.as_ref())
        .map(|file| secure_asset_url(&file.url));
    Ok(RenderedPost {
        html,
        outline,
        reading_minutes: reading_time_minutes(&post.content),
        featured_image_url,
    })
}

/// Minutes of reading at [`WORDS_PER_MINUTE`], rounded up. Zero only for a
/// document with no text at all.
pub fn reading_time_minutes(document: &Document) -> u32 {
    let words = word_count(document);
    words.div_ceil(WORDS_PER_MINUTE) as u32
}
