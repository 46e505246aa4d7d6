//! Render state of the post list and its transitions.

use crate::view::record::{derive_post_record, CategoryIndex, PostRecord};
use crate::wp::Post;

/// Coarse state of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStatus {
    Loading,
    Ready { empty: bool },
}

/// Everything needed to render the current page.
///
/// Values are replaced as a whole on every transition; see the constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub current_page: u32,
    pub total_pages: u32,
    pub posts: Vec<Post>,
    pub categories: CategoryIndex,
    pub loading: bool,
    /// Message from the most recent failed fetch, cleared on success.
    pub last_error: Option<String>,
}

impl Default for PageState {
    fn default() -> Self {
        Self::initial()
    }
}

impl PageState {
    /// State of a freshly mounted view.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            posts: Vec::new(),
            categories: CategoryIndex::default(),
            loading: true,
            last_error: None,
        }
    }

    /// Same content, now loading `page`.
    #[must_use]
    pub fn loading(&self, page: u32) -> Self {
        Self {
            current_page: page.max(1),
            loading: true,
            ..self.clone()
        }
    }

    /// A successfully fetched page.
    #[must_use]
    pub fn ready(page: u32, total_pages: u32, posts: Vec<Post>, categories: CategoryIndex) -> Self {
        Self {
            current_page: page.max(1),
            total_pages: total_pages.max(1),
            posts,
            categories,
            loading: false,
            last_error: None,
        }
    }

    /// Previous content kept after a failed fetch for `page`.
    ///
    /// The page number stays within the last known page count.
    #[must_use]
    pub fn failed(&self, page: u32, message: String) -> Self {
        Self {
            current_page: page.clamp(1, self.total_pages.max(1)),
            loading: false,
            last_error: Some(message),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn status(&self) -> ViewStatus {
        if self.loading {
            ViewStatus::Loading
        } else {
            ViewStatus::Ready {
                empty: self.posts.is_empty(),
            }
        }
    }

    /// Whether the Prev control is enabled.
    #[must_use]
    pub fn can_go_prev(&self) -> bool {
        !self.loading && self.current_page > 1
    }

    /// Whether the Next control is enabled.
    #[must_use]
    pub fn can_go_next(&self) -> bool {
        !self.loading && self.current_page < self.total_pages
    }

    /// Display records for the current posts.
    #[must_use]
    pub fn records(&self) -> Vec<PostRecord> {
        self.posts
            .iter()
            .map(|post| derive_post_record(post, &self.categories))
            .collect()
    }
}
