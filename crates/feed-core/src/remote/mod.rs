//! Remote Content Service
//!
//! Contract of the upstream REST API and its HTTP client.

mod error;
mod traits;
mod http;

#[cfg(test)]
pub(crate) mod fake;

pub use error::{FetchError, FetchResult};
pub use traits::ContentService;
pub use http::HttpContentService;
