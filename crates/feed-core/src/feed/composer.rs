//! List Query Composer
//!
//! Owns the visible feed state. Each load takes a fresh generation; a
//! response is applied only if no newer load was issued in the meantime.

use std::cell::RefCell;

use crate::domain::Post;
use crate::generation::{Generation, GenerationCounter, Outcome};
use crate::remote::{ContentService, FetchResult};
use super::query::{page_count, FeedQuery};
use super::sort::sort_posts;

/// One ordered page of posts plus the page count of the whole listing
#[derive(Debug, Clone, PartialEq)]
pub struct FeedPage {
    pub posts: Vec<Post>,
    pub page_count: u32,
}

/// Fetch and order one page for `query`
pub async fn fetch_page<S: ContentService + ?Sized>(service: &S, query: &FeedQuery) -> FetchResult<FeedPage> {
    let request = query.request();
    log::debug!("[feed] fetching {:?}", request);
    let page = request.execute(service).await?;
    let mut posts = page.posts;
    sort_posts(&mut posts, query.sort());
    Ok(FeedPage {
        posts,
        page_count: page_count(page.total),
    })
}

/// What the feed currently shows.
///
/// A failed fetch and an empty result look the same to the reader; `failed`
/// is only kept for logging and tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedState {
    /// Query of the most recently issued load
    pub query: Option<FeedQuery>,
    pub posts: Vec<Post>,
    /// None until a load succeeds, and again after a failure
    pub page_count: Option<u32>,
    pub loading: bool,
    pub failed: bool,
}

/// Issued load that has not been applied yet
#[derive(Debug, Clone)]
pub struct QueryTicket {
    generation: Generation,
    query: FeedQuery,
}

impl QueryTicket {
    pub fn query(&self) -> &FeedQuery {
        &self.query
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }
}

pub struct FeedComposer<S> {
    service: S,
    generations: GenerationCounter,
    state: RefCell<FeedState>,
}

impl<S: ContentService> FeedComposer<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            generations: GenerationCounter::new(),
            state: RefCell::new(FeedState::default()),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Snapshot of the visible state
    pub fn state(&self) -> FeedState {
        self.state.borrow().clone()
    }

    /// Issue a load: supersedes every earlier ticket and enters loading
    pub fn begin(&self, query: FeedQuery) -> QueryTicket {
        let generation = self.generations.issue();
        let mut state = self.state.borrow_mut();
        state.query = Some(query.clone());
        state.loading = true;
        QueryTicket { generation, query }
    }

    /// Apply a finished load if it is still the latest one
    pub fn finish(&self, ticket: QueryTicket, result: FetchResult<FeedPage>) -> Outcome {
        if !self.generations.is_current(ticket.generation) {
            log::debug!(
                "[feed] discarding stale result for generation {} (latest {})",
                ticket.generation.value(),
                self.generations.latest().value()
            );
            return Outcome::Stale;
        }

        let mut state = self.state.borrow_mut();
        state.loading = false;
        match result {
            Ok(page) => {
                log::debug!("[feed] showing {} posts, {} pages", page.posts.len(), page.page_count);
                state.posts = page.posts;
                state.page_count = Some(page.page_count);
                state.failed = false;
            }
            Err(e) => {
                log::warn!("[feed] error fetching posts: {}", e);
                state.posts.clear();
                state.page_count = None;
                state.failed = true;
            }
        }
        Outcome::Applied
    }

    /// Issue, fetch and apply in one go
    pub async fn load(&self, query: FeedQuery) -> Outcome {
        let ticket = self.begin(query);
        let result = fetch_page(&self.service, ticket.query()).await;
        self.finish(ticket, result)
    }
}
