//! Feed Listing
//!
//! Query composition, single-page ordering and the stale-safe composer.

mod query;
mod sort;
mod composer;


pub use query::{page_count, FeedQuery, ListEndpoint, ListRequest, SortMode, MAX_PAGE};
pub use sort::sort_posts;
pub use composer::{fetch_page, FeedComposer, FeedPage, FeedState, QueryTicket};
