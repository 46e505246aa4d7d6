//! Card component for displaying a post.

use maud::{html, Markup, Render};

use crate::view::PostRecord;

/// One post: title link, optional featured image, date and categories.
#[derive(Debug, Clone, Copy)]
pub struct PostCard<'a> {
    pub record: &'a PostRecord,
}

impl<'a> PostCard<'a> {
    #[must_use]
    pub const fn new(record: &'a PostRecord) -> Self {
        Self { record }
    }
}

impl Render for PostCard<'_> {
    fn render(&self) -> Markup {
        let record = self.record;

        html! {
            div class="post" data-post-id=(record.id) {
                h2 class="post-title" {
                    a href=(record.link) target="_blank" rel="noopener noreferrer" { (record.title) }
                }
                @if let Some(image) = &record.image_url {
                    img class="post-image" src=(image) alt="featured";
                }
                p class="post-date" { "Published on: " (record.published) }
                p class="post-categories" {
                    "Categories: "
                    strong { (record.categories) }
                }
            }
        }
    }
}
