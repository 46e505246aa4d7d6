//! WordPress post viewer library.
//!
//! Fetches published posts and categories from a WordPress REST API and
//! presents them as a paginated list, either as text in a terminal or as an
//! HTML document.

pub mod components;
pub mod config;
pub mod constants;
pub mod error;
pub mod terminal;
pub mod view;
pub mod wp;
