//! WordPress REST API access.

pub mod client;
pub mod models;
pub mod source;

pub use client::WpClient;
pub use models::{Category, Embedded, FeaturedMedia, Post, Rendered};
pub use source::{PostSource, PostsPage};
