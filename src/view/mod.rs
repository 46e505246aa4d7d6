//! The paginated post list: display records, page state and the controller.

pub mod controller;
pub mod record;
pub mod state;

pub use controller::{FetchTicket, FetchedPage, PostListView};
pub use record::{derive_post_record, format_long_date, html_to_text, CategoryIndex, PostRecord};
pub use state::{PageState, ViewStatus};
