//! Views
//!
//! One component per route.

mod feed;
mod post_detail;
mod profile;
mod search;
mod login;
mod not_found;

pub use feed::FeedView;
pub use post_detail::PostView;
pub use profile::ProfileView;
pub use search::SearchView;
pub use login::LoginView;
pub use not_found::NotFoundView;
