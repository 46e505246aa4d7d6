//! Base document layout for rendered HTML snapshots.

use maud::{html, Markup, PreEscaped, DOCTYPE};

/// Styles for the post list, inlined so a snapshot is a single file.
const POST_LIST_STYLE: &str = r".container { max-width: 48rem; margin: 0 auto; padding: 1rem; font-family: system-ui, sans-serif; }
.post { border-bottom: 1px solid #ddd; padding: 1rem 0; }
.post-image { max-width: 100%; height: auto; }
.post-date, .post-categories { color: #555; margin: 0.25rem 0; }
.pagination { display: flex; gap: 1rem; align-items: center; justify-content: center; padding: 1rem 0; }
.alert.error { background: #fdecea; border: 1px solid #f5c2c0; padding: 0.75rem; }";

/// Page layout builder.
///
/// # Example
///
/// ```ignore
/// use maud::html;
/// use crate::components::layout::BaseLayout;
///
/// let page = BaseLayout::new("WordPress Posts").render(html! { h1 { "Hello" } });
/// ```
#[derive(Debug, Clone)]
pub struct BaseLayout<'a> {
    title: &'a str,
    source_url: Option<&'a str>,
}

impl<'a> BaseLayout<'a> {
    #[must_use]
    pub const fn new(title: &'a str) -> Self {
        Self {
            title,
            source_url: None,
        }
    }

    /// Site the posts were fetched from, shown in the footer.
    #[must_use]
    pub const fn with_source_url(mut self, url: &'a str) -> Self {
        self.source_url = Some(url);
        self
    }

    /// Render the complete HTML document with the given content.
    #[must_use]
    pub fn render(self, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { (self.title) }
                    style { (PreEscaped(POST_LIST_STYLE)) }
                }
                body {
                    (content)
                    @if let Some(url) = self.source_url {
                        footer class="container" {
                            small {
                                "Posts from "
                                a href=(url) target="_blank" rel="noopener noreferrer" { (url) }
                            }
                        }
                    }
                }
            }
        }
    }
}
