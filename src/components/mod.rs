//! UI Components
//!
//! Reusable Leptos components.

mod link;
mod navbar;
mod avatar;
mod post_card;
mod pagination;
mod post_filter;

pub use link::Link;
pub use navbar::Navbar;
pub use avatar::Avatar;
pub use post_card::{PostCard, PostCardSkeleton};
pub use pagination::Pagination;
pub use post_filter::PostFilter;
