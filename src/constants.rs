//! Shared constants used across the application.

/// Site used when `WP_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "https://imin.com";

/// Posts shown per page.
pub const DEFAULT_POSTS_PER_PAGE: u32 = 10;

/// Categories requested per categories call.
pub const DEFAULT_CATEGORIES_PER_PAGE: u32 = 100;

/// Largest `per_page` the WordPress REST API accepts.
pub const MAX_PER_PAGE: u32 = 100;

/// Upper bound on categories pages followed in one fetch cycle.
pub const MAX_CATEGORY_PAGES: u32 = 50;

/// Response header carrying the number of pages for a collection.
pub const TOTAL_PAGES_HEADER: &str = "X-WP-TotalPages";


/// User agent sent with every API request.
pub const USER_AGENT: &str = concat!("wp-post-viewer/", env!("CARGO_PKG_VERSION"));

/// Label shown when none of a post's categories resolve to a name.
pub const UNCATEGORIZED: &str = "Uncategorized";
