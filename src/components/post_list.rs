//! Full post list view: status line, error notice, cards and pagination.

use maud::{html, Markup, Render};

use crate::components::alert::{Alert, StatusMessage};
use crate::components::card::PostCard;
use crate::components::pagination::PaginationBar;
use crate::view::{PageState, ViewStatus};

/// The whole post list view for one `PageState`.
///
/// While loading only the loading line is shown, and an empty page shows only
/// "No posts found.". A failed fetch adds an error notice above the list.
#[derive(Debug, Clone, Copy)]
pub struct PostListPage<'a> {
    pub state: &'a PageState,
}

impl<'a> PostListPage<'a> {
    #[must_use]
    pub const fn new(state: &'a PageState) -> Self {
        Self { state }
    }

    fn error_notice(&self) -> Markup {
        html! {
            @if let Some(message) = &self.state.last_error {
                (Alert::error(message).with_title("Could not load posts."))
            }
        }
    }
}

impl Render for PostListPage<'_> {
    fn render(&self) -> Markup {
        match self.state.status() {
            ViewStatus::Loading => StatusMessage::loading().render(),
            ViewStatus::Ready { empty: true } => html! {
                (self.error_notice())
                (StatusMessage::no_posts())
            },
            ViewStatus::Ready { empty: false } => {
                let records = self.state.records();
                html! {
                    div class="container" {
                        h1 class="title" { "WordPress Posts" }
                        (self.error_notice())
                        @for record in &records {
                            (PostCard::new(record))
                        }
                        (PaginationBar::from_state(self.state))
                    }
                }
            }
        }
    }
}
