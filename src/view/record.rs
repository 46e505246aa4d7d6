//! Shaping API posts into display records.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use scraper::Html;

use crate::constants::UNCATEGORIZED;
use crate::wp::{Category, Post};

/// Category id to name lookup, rebuilt from scratch on every fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryIndex {
    names: HashMap<u64, String>,
}

impl CategoryIndex {
    /// Build an index from a categories response.
    ///
    /// WordPress returns names HTML-escaped (`Tech &amp; Science`), so they go
    /// through the same plain-text step as titles.
    #[must_use]
    pub fn from_categories<'a>(categories: impl IntoIterator<Item = &'a Category>) -> Self {
        let names = categories
            .into_iter()
            .map(|c| (c.id, html_to_text(&c.name)))
            .collect();
        Self { names }
    }

    #[must_use]
    pub fn name(&self, id: u64) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names for `ids` in order, joined with `", "`. Unknown ids are skipped.
    #[must_use]
    pub fn join_names(&self, ids: &[u64]) -> String {
        ids.iter()
            .filter_map(|id| self.name(*id))
            .filter(|name| !name.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A post ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRecord {
    pub id: u64,
    /// Plain-text title. Renderers must escape it.
    pub title: String,
    pub link: String,
    pub image_url: Option<String>,
    /// Long-form publish date, e.g. `March 5, 2024`.
    pub published: String,
    /// Comma-joined category names, or `Uncategorized`.
    pub categories: String,
}

/// Derive the display record for one post.
#[must_use]
pub fn derive_post_record(post: &Post, categories: &CategoryIndex) -> PostRecord {
    let title = html_to_text(&post.title.rendered);
    let joined = categories.join_names(&post.categories);

    PostRecord {
        id: post.id,
        title: if title.is_empty() {
            "Untitled".to_string()
        } else {
            title
        },
        link: post.link.clone(),
        image_url: post.featured_media_url().map(ToString::to_string),
        published: format_long_date(&post.date),
        categories: if joined.is_empty() {
            UNCATEGORIZED.to_string()
        } else {
            joined
        },
    }
}

/// Format a WordPress timestamp as `Month day, year`.
///
/// Accepts the offset-less `date` field (`2024-03-05T00:00:00`), RFC 3339 and
/// bare dates. Anything else is returned unchanged.
#[must_use]
pub fn format_long_date(raw: &str) -> String {
    parse_date(raw.trim()).map_or_else(
        || raw.to_string(),
        |date| date.format("%B %-d, %Y").to_string(),
    )
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Reduce an HTML fragment to its text content.
///
/// Entities are decoded, markup is dropped and runs of whitespace collapse to
/// a single space.
#[must_use]
pub fn html_to_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let text: String = fragment.root_element().text().collect();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
