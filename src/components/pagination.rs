//! Prev / "Page X of Y" / Next pagination bar.

use maud::{html, Markup, Render};

use crate::view::PageState;

/// Pagination bar for the post list.
///
/// Page numbers are 1-based. Each button carries the page it leads to in
/// `data-page` and is `disabled` at its boundary or while loading.
#[derive(Debug, Clone, Copy)]
pub struct PaginationBar {
    pub current_page: u32,
    pub total_pages: u32,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl PaginationBar {
    #[must_use]
    pub fn from_state(state: &PageState) -> Self {
        Self {
            current_page: state.current_page,
            total_pages: state.total_pages,
            prev_enabled: state.can_go_prev(),
            next_enabled: state.can_go_next(),
        }
    }
}

impl Render for PaginationBar {
    fn render(&self) -> Markup {
        let prev_page = self.current_page.saturating_sub(1).max(1);
        let next_page = self.current_page.saturating_add(1).min(self.total_pages.max(1));

        html! {
            div class="pagination" {
                button type="button" data-page=(prev_page) disabled[!self.prev_enabled] { "Prev" }
                span { "Page " (self.current_page) " of " (self.total_pages) }
                button type="button" data-page=(next_page) disabled[!self.next_enabled] { "Next" }
            }
        }
    }
}
