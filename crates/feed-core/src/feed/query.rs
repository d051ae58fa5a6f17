//! Feed Query
//!
//! Translates the feed parameters into exactly one remote listing call.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::PAGE_SIZE;
use crate::domain::PostPage;
use crate::remote::{ContentService, FetchResult};

/// Client-side ordering of a fetched page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortMode {
    /// Order returned by the service
    #[default]
    #[serde(rename = "default")]
    Default,
    /// Descending like count
    #[serde(rename = "reactions")]
    MostLiked,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Default => "default",
            SortMode::MostLiked => "reactions",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Default => "Default",
            SortMode::MostLiked => "Most Liked",
        }
    }
}

impl FromStr for SortMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "reactions" | "most-liked" | "likes" => SortMode::MostLiked,
            _ => SortMode::Default,
        })
    }
}

/// Which listing endpoint a query resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEndpoint {
    Search(String),
    Tag(String),
    All,
}

/// A fully resolved listing call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub endpoint: ListEndpoint,
    pub limit: u32,
    pub skip: u32,
}

impl ListRequest {
    pub async fn execute<S: ContentService + ?Sized>(&self, service: &S) -> FetchResult<PostPage> {
        match &self.endpoint {
            ListEndpoint::Search(query) => service.search_posts(query, self.limit, self.skip).await,
            ListEndpoint::Tag(tag) => service.list_posts_by_tag(tag, self.limit, self.skip).await,
            ListEndpoint::All => service.list_posts(self.limit, self.skip).await,
        }
    }
}

/// Highest page whose offset still fits in a `u32`
pub const MAX_PAGE: u32 = u32::MAX / PAGE_SIZE + 1;

/// Feed parameters: page, free-text query, tag filter and sort mode.
///
/// The page index is never below 1. When both a search text and a tag are
/// set, the search text is the active filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedQuery {
    page: u32,
    search: Option<String>,
    tag: Option<String>,
    sort: SortMode,
}

impl Default for FeedQuery {
    fn default() -> Self {
        Self {
            page: 1,
            search: None,
            tag: None,
            sort: SortMode::Default,
        }
    }
}

impl FeedQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at_page(page: u32) -> Self {
        Self::default().with_page(page)
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.clamp(1, MAX_PAGE);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search: String = search.into();
        self.search = if search.is_empty() { None } else { Some(search) };
        self
    }

    pub fn with_tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag.filter(|t| !t.is_empty());
        self
    }

    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    /// Submit a search from the feed: back to the first page
    pub fn submit_search(self, search: impl Into<String>) -> Self {
        self.with_search(search).with_page(1)
    }

    /// Pick (or clear) a tag filter: back to the first page, search text dropped
    pub fn select_tag(mut self, tag: Option<String>) -> Self {
        self.search = None;
        self.with_tag(tag).with_page(1)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Raw search text as entered
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Search text that actually narrows the listing (non-blank)
    pub fn active_search(&self) -> Option<&str> {
        self.search.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn sort(&self) -> SortMode {
        self.sort
    }

    pub fn limit(&self) -> u32 {
        PAGE_SIZE
    }

    pub fn skip(&self) -> u32 {
        (self.page - 1) * PAGE_SIZE
    }

    pub fn endpoint(&self) -> ListEndpoint {
        if let Some(search) = self.active_search() {
            ListEndpoint::Search(search.to_string())
        } else if let Some(tag) = self.tag() {
            ListEndpoint::Tag(tag.to_string())
        } else {
            ListEndpoint::All
        }
    }

    pub fn request(&self) -> ListRequest {
        ListRequest {
            endpoint: self.endpoint(),
            limit: self.limit(),
            skip: self.skip(),
        }
    }
}

/// Number of pages needed for `total` matching posts
pub fn page_count(total: u32) -> u32 {
    total.div_ceil(PAGE_SIZE)
}
