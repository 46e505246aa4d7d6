//! Models for the WordPress REST API (`/wp-json/wp/v2`).
//!
//! Only the fields the viewer reads are modelled; everything else in the
//! response is ignored by serde.

use serde::Deserialize;

/// A post from `GET /wp-json/wp/v2/posts?_embed`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Post {
    pub id: u64,
    pub date: String,
    pub link: String,
    pub title: Rendered,
    #[serde(default)]
    pub categories: Vec<u64>,
    /// Related resources included by `_embed`.
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<Embedded>,
}

impl Post {
    /// URL of the first embedded featured media entry, if any.
    #[must_use]
    pub fn featured_media_url(&self) -> Option<&str> {
        self.embedded
            .as_ref()?
            .featured_media
            .first()?
            .source_url
            .as_deref()
            .filter(|url| !url.is_empty())
    }
}

/// A `{ "rendered": "..." }` wrapper used for titles, excerpts and content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Rendered {
    #[serde(default)]
    pub rendered: String,
}

/// The `_embedded` object of a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Embedded {
    #[serde(rename = "wp:featuredmedia", default)]
    pub featured_media: Vec<FeaturedMedia>,
}

/// An embedded media item.
///
/// WordPress embeds an error object (`code`, `message`) instead of the media
/// when it is not publicly readable, so every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FeaturedMedia {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub source_url: Option<String>,
}

/// A category from `GET /wp-json/wp/v2/categories`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
}
