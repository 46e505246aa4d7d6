//! The post list view controller.
//!
//! A fetch cycle is `begin_load` → `fetch` → `apply`. `load_page` runs all
//! three; the pieces are public so callers that overlap cycles still get
//! last-requested-wins ordering.

use tracing::{debug, error, info};

use crate::constants::DEFAULT_POSTS_PER_PAGE;
use crate::error::FetchError;
use crate::view::record::{CategoryIndex, PostRecord};
use crate::view::state::PageState;
use crate::wp::{Post, PostSource};

/// Identifies one fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub page: u32,
    generation: u64,
}

/// Data gathered by a successful fetch cycle.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub posts: Vec<Post>,
    pub total_pages: u32,
    pub categories: CategoryIndex,
}

/// Drives fetching, state transitions and pagination for the post list.
#[derive(Debug)]
pub struct PostListView<S> {
    source: S,
    per_page: u32,
    state: PageState,
    generation: u64,
}

impl<S: PostSource> PostListView<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_per_page(source, DEFAULT_POSTS_PER_PAGE)
    }

    #[must_use]
    pub fn with_per_page(source: S, per_page: u32) -> Self {
        Self {
            source,
            per_page: per_page.max(1),
            state: PageState::initial(),
            generation: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> &PageState {
        &self.state
    }

    #[must_use]
    pub fn records(&self) -> Vec<PostRecord> {
        self.state.records()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Initial load after the view is created.
    pub async fn mount(&mut self, start_page: u32) {
        self.load_page(start_page).await;
    }

    /// Called whenever the page number changes; starts a load for it.
    pub async fn on_page_changed(&mut self, new_page: u32) {
        self.load_page(new_page).await;
    }

    /// Load `page` and apply the outcome.
    pub async fn load_page(&mut self, page: u32) {
        let ticket = self.begin_load(page);
        let outcome = self.fetch(ticket).await;
        self.apply(ticket, outcome);
    }

    /// Go one page back. Returns false when Prev is disabled.
    pub async fn handle_prev(&mut self) -> bool {
        if !self.state.can_go_prev() {
            return false;
        }
        self.on_page_changed(self.state.current_page - 1).await;
        true
    }

    /// Go one page forward. Returns false when Next is disabled.
    pub async fn handle_next(&mut self) -> bool {
        if !self.state.can_go_next() {
            return false;
        }
        self.on_page_changed(self.state.current_page + 1).await;
        true
    }

    /// Fetch the current page again.
    pub async fn reload(&mut self) {
        self.load_page(self.state.current_page).await;
    }

    /// Enter the loading state for `page` and start a new cycle.
    ///
    /// Any cycle started earlier becomes stale.
    pub fn begin_load(&mut self, page: u32) -> FetchTicket {
        self.generation += 1;
        self.state = self.state.loading(page);
        debug!(page = self.state.current_page, generation = self.generation, "Loading page");
        FetchTicket {
            page: self.state.current_page,
            generation: self.generation,
        }
    }

    /// Fetch posts and categories for a cycle. Does not touch state.
    ///
    /// # Errors
    ///
    /// Returns the first error from either request.
    pub async fn fetch(&self, ticket: FetchTicket) -> Result<FetchedPage, FetchError> {
        let (page, categories) = tokio::try_join!(
            self.source.fetch_posts(ticket.page, self.per_page),
            self.source.fetch_categories(),
        )?;

        Ok(FetchedPage {
            posts: page.posts,
            total_pages: page.total_pages,
            categories: CategoryIndex::from_categories(&categories),
        })
    }

    /// Apply the outcome of a cycle. Returns false if the cycle was stale.
    pub fn apply(&mut self, ticket: FetchTicket, outcome: Result<FetchedPage, FetchError>) -> bool {
        if ticket.generation != self.generation {
            debug!(
                page = ticket.page,
                generation = ticket.generation,
                current = self.generation,
                "Discarding stale page response"
            );
            return false;
        }

        self.state = match outcome {
            Ok(fetched) => {
                info!(
                    page = ticket.page,
                    total_pages = fetched.total_pages,
                    posts = fetched.posts.len(),
                    categories = fetched.categories.len(),
                    "Loaded page"
                );
                PageState::ready(
                    ticket.page,
                    fetched.total_pages,
                    fetched.posts,
                    fetched.categories,
                )
            }
            Err(e) => {
                error!(page = ticket.page, kind = ?e.kind(), "Error fetching posts: {e}");
                self.state.failed(ticket.page, e.to_string())
            }
        };
        true
    }
}
