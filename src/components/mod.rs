//! Maud HTML components for the post list.
//!
//! - `layout`: document skeleton
//! - `alert`: error notices and status lines
//! - `card`: a single post
//! - `pagination`: Prev / Next bar
//! - `post_list`: the full view for a `PageState`
//!
//! # Example
//!
//! ```ignore
//! use crate::components::{BaseLayout, PostListPage, Render};
//!
//! let page = BaseLayout::new("WordPress Posts").render(PostListPage::new(view.state()).render());
//! ```

pub mod alert;
pub mod card;
pub mod layout;
pub mod pagination;
pub mod post_list;

pub use alert::{Alert, StatusMessage};
pub use card::PostCard;
pub use layout::BaseLayout;
pub use pagination::PaginationBar;
pub use post_list::PostListPage;

/// Re-export maud for convenience
pub use maud::{html, Markup, Render, DOCTYPE};
