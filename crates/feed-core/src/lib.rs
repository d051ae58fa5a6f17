//! SocialSphere Feed Core
//!
//! Target-agnostic orchestration behind the feed front end:
//! - domain: Records served by the remote content service
//! - remote: Service contract and its HTTP client
//! - session: Mock login gate over an injected token store
//! - feed: List query composition with stale-result protection
//! - detail / profile / search: Multi-fetch view aggregation
//! - tags, view, routes: Pure helpers for the presentation layer

pub mod config;
pub mod domain;
pub mod remote;
pub mod session;
pub mod generation;
pub mod feed;
pub mod detail;
pub mod profile;
pub mod search;
pub mod tags;
pub mod view;
pub mod routes;

pub use config::{FeedConfig, PAGE_SIZE};
pub use generation::Outcome;
pub use remote::{ContentService, FetchError, FetchResult, HttpContentService};
pub use routes::Route;
