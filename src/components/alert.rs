//! Alert and status message components.

use maud::{html, Markup, Render};

/// An error notice, optionally with a bold title.
///
/// # Example
///
/// ```ignore
/// use crate::components::alert::Alert;
///
/// let alert = Alert::error("request timed out").with_title("Could not load posts.");
/// ```
#[derive(Debug, Clone)]
pub struct Alert<'a> {
    pub title: Option<&'a str>,
    pub message: &'a str,
}

impl<'a> Alert<'a> {
    #[must_use]
    pub const fn error(message: &'a str) -> Self {
        Self {
            title: None,
            message,
        }
    }

    #[must_use]
    pub const fn with_title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }
}

impl Render for Alert<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="alert error" role="alert" {
                @if let Some(title) = self.title {
                    strong { (title) }
                    " "
                }
                (self.message)
            }
        }
    }
}

/// A single-paragraph status line shown in place of the list.
#[derive(Debug, Clone, Copy)]
pub struct StatusMessage {
    pub class: &'static str,
    pub message: &'static str,
}

impl StatusMessage {
    #[must_use]
    pub const fn loading() -> Self {
        Self {
            class: "loading",
            message: "Loading posts...",
        }
    }

    #[must_use]
    pub const fn no_posts() -> Self {
        Self {
            class: "no-posts",
            message: "No posts found.",
        }
    }
}

impl Render for StatusMessage {
    fn render(&self) -> Markup {
        html! {
            p class=(self.class) { (self.message) }
        }
    }
}
