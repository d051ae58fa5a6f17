//! Frontend Models
//!
//! View models projected by feed-core; components render nothing else.

pub use feed_core::view::{AuthorView, CommentView, PaginationView, PostCardView};
