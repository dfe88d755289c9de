//! Post payload decoding.
//!
//! The CMS delivers posts as `{sys, fields}` envelopes; `fields.content` is
//! the rich-text document decoded by `vellum-doc`, and `fields.featuredImage`
//! is a standalone asset link.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use vellum_doc::{Asset, Document};

use crate::SourceError;

/// Post metadata, independent of the rich-text body.
#[derive(Debug, Clone)]
pub struct PostMeta {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub category: String,
    pub featured: bool,
    pub published_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub featured_image: Option<Asset>,
}

/// A full post: metadata plus its rich-text document.
#[derive(Debug, Clone)]
pub struct Post {
    pub meta: PostMeta,
    pub content: Document,
}

#[derive(Deserialize)]
struct RawPost {
    sys: RawSys,
    fields: RawFields,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSys {
    id: String,
    updated_at: DateTime<Utc>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFields {
    title: String,
    slug: String,
    #[serde(default)]
    excerpt: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    featured: bool,
    featured_image: Option<serde_json::Value>,
    published_date: DateTime<Utc>,
    content: serde_json::Value,
}

impl Post {
    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        Self::from_value(serde_json::from_str(json)?)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, SourceError> {
        let raw: RawPost = serde_json::from_value(value)?;
        let slug = raw.fields.slug;
        let content = Document::from_value(raw.fields.content).map_err(|source| {
            SourceError::Document {
                slug: slug.clone(),
                source,
            }
        })?;
        let featured_image = raw
            .fields
            .featured_image
            .map(Asset::from_value)
            .transpose()
            .map_err(|source| SourceError::Document {
                slug: slug.clone(),
                source,
            })?;
        Ok(Post {
            meta: PostMeta {
                id: raw.sys.id,
                title: raw.fields.title,
                slug,
                excerpt: raw.fields.excerpt,
                category: raw.fields.category,
                featured: raw.fields.featured,
                published_at: raw.fields.published_date,
                updated_at: raw.sys.updated_at,
                featured_image,
            },
            content,
        })
    }
}
