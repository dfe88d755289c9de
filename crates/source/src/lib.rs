//! Content source abstractions.
//!
//! The rendering core never talks to the CMS directly; it consumes a
//! [`ContentSource`] that can look a post up by slug and enumerate what is
//! available. Failure of the backing provider is represented, never retried.
//!
//! ## Available sources
//!
//! - [`InMemorySource`]: pre-populated vector of posts, also the test double

mod post;

pub use post::{Post, PostMeta};

use thiserror::Error;

/// Errors surfaced by a content source.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("malformed post payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid document in post '{slug}': {source}")]
    Document {
        slug: String,
        #[source]
        source: vellum_doc::DocError,
    },

    #[error("content backend error: {0}")]
    Backend(String),
}

/// A provider of posts and their rich-text documents.
///
/// Implementations may sit on an HTTP CMS client, a local fixture set, or a
/// cache; the core only relies on this contract. Listings are ordered newest
/// first by publication date.
pub trait ContentSource: Send + Sync {
    /// All known post slugs, newest first.
    fn list_slugs(&self) -> Result<Vec<String>, SourceError>;

    /// Metadata for every post, newest first. Contents are not loaded.
    fn list_posts(&self) -> Result<Vec<PostMeta>, SourceError>;

    /// The full post for a slug, or `None` when no such post exists.
    fn get_by_slug(&self, slug: &str) -> Result<Option<Post>, SourceError>;

    /// Human-readable name for logging.
    fn name(&self) -> &'static str;
}

/// A content source backed by an in-memory vector of posts.
///
/// The simplest source, useful for fixtures and tests. Posts are held sorted
/// newest first so listings need no re-sort.
#[derive(Debug, Default)]
pub struct InMemorySource {
    posts: Vec<Post>,
}

impl InMemorySource {
    pub fn new(mut posts: Vec<Post>) -> Self {
        posts.sort_by(|a, b| b.meta.published_at.cmp(&a.meta.published_at));
        Self { posts }
    }

    /// Builds a source from a CMS listing payload (`{"items": [...]}`).
    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        let listing: serde_json::Value = serde_json::from_str(json)?;
        let items = match listing.get("items") {
            Some(serde_json::Value::Array(items)) => items.clone(),
            _ => return Err(SourceError::Backend("listing has no 'items' array".into())),
        };
        let posts = items
            .into_iter()
            .map(Post::from_value)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(posts))
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl ContentSource for InMemorySource {
    fn list_slugs(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.posts.iter().map(|p| p.meta.slug.clone()).collect())
    }

    fn list_posts(&self) -> Result<Vec<PostMeta>, SourceError> {
        Ok(self.posts.iter().map(|p| p.meta.clone()).collect())
    }

    fn get_by_slug(&self, slug: &str) -> Result<Option<Post>, SourceError> {
        let post = self.posts.iter().find(|p| p.meta.slug == slug);
        if post.is_none() {
            log::debug!("{}: no post for slug '{slug}'", self.name());
        }
        Ok(post.cloned())
    }

    fn name(&self) -> &'static str {
        "in-memory"
    }
}
