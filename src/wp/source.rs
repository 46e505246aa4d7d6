use async_trait::async_trait;

use crate::error::FetchError;
use crate::wp::models::{Category, Post};

/// One page of the posts collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostsPage {
    pub posts: Vec<Post>,
    /// Value of `X-WP-TotalPages`.
    pub total_pages: u32,
}

/// Where the post list view gets its data from.
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Fetch page `page` (1-based) of published posts with embedded media.
    async fn fetch_posts(&self, page: u32, per_page: u32) -> Result<PostsPage, FetchError>;

    /// Fetch every category of the site.
    async fn fetch_categories(&self) -> Result<Vec<Category>, FetchError>;
}
