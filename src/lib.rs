//! Vellum: CMS rich-text rendering core.
//!
//! Integration layer over the workspace crates. A typical page render:
//!
//! ```ignore
//! use vellum::{InMemorySource, ContentSource, RenderOptions, TocTracker, render_post};
//!
//! let source = InMemorySource::from_json(&listing_json)?;
//! let post = source.get_by_slug("automatizacion-con-ia")?.unwrap();
//! let rendered = render_post(&post, RenderOptions::default())?;
//!
//! // Host mounts `rendered.html`, then wires scroll tracking:
//! let mut tracker = TocTracker::new(rendered.outline.clone());
//! tracker.attach(host_viewport_observer);
//! ```

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{RenderedPost, WORDS_PER_MINUTE, reading_time_minutes, render_post};

// Re-export the member crate surfaces hosts work with.
pub use vellum_doc::{DocError, Document};
pub use vellum_render::{AssetPolicy, HtmlNode, HtmlRenderer, RenderError, RenderOptions, write_html};
pub use vellum_source::{ContentSource, InMemorySource, Post, PostMeta, SourceError};
pub use vellum_toc::{
    ObserverOptions, Outline, TocTracker, ViewportObserver, VisibilityChange,
};
pub use vellum_types::{AnchorId, HeadingLevel, TocEntry};
