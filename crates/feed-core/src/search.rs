//! Search Aggregation
//!
//! The search view queries posts (paged) and authors at the same time.
//! A blank query fetches nothing.

use std::cell::RefCell;

use crate::domain::{Author, Post};
use crate::feed::{fetch_page, FeedPage, FeedQuery};
use crate::generation::{GenerationCounter, Outcome};
use crate::remote::{ContentService, FetchResult};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    pub query: String,
    pub page: u32,
    pub posts: Vec<Post>,
    pub page_count: u32,
    pub authors: Vec<Author>,
}

pub async fn run_search<S: ContentService + ?Sized>(service: &S, query: &str, page: u32) -> FetchResult<SearchResults> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(SearchResults::default());
    }

    let feed_query = FeedQuery::at_page(page).with_search(query);
    let (posts, authors): (FeedPage, Vec<Author>) = futures::try_join!(
        fetch_page(service, &feed_query),
        service.search_authors(query),
    )?;

    Ok(SearchResults {
        query: query.to_string(),
        page: feed_query.page(),
        posts: posts.posts,
        page_count: posts.page_count,
        authors,
    })
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub results: SearchResults,
    pub loading: bool,
}

/// Stale-safe holder for the search view
pub struct SearchComposer<S> {
    service: S,
    generations: GenerationCounter,
    state: RefCell<SearchState>,
}

impl<S: ContentService> SearchComposer<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            generations: GenerationCounter::new(),
            state: RefCell::new(SearchState::default()),
        }
    }

    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    pub async fn search(&self, query: &str, page: u32) -> Outcome {
        let generation = self.generations.issue();
        self.state.borrow_mut().loading = true;

        let result = run_search(&self.service, query, page).await;
        if !self.generations.is_current(generation) {
            return Outcome::Stale;
        }

        let mut state = self.state.borrow_mut();
        state.loading = false;
        state.results = match result {
            Ok(results) => results,
            Err(e) => {
                log::warn!("[search] error performing search {:?}: {}", query, e);
                SearchResults {
                    query: query.trim().to_string(),
                    ..SearchResults::default()
                }
            }
        };
        Outcome::Applied
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::feed::MAX_PAGE;
    use crate::remote::fake::{sample_posts, Call, FakeContentService};

    fn fixture() -> FakeContentService {
        FakeContentService::new()
            .with_posts(sample_posts(25))
            .with_author(Author::new(1, "Emily", "Johnson", "emilys"))
            .with_author(Author::new(2, "Emma", "Miller", "emmaj"))
            .with_author(Author::new(3, "Noah", "Hernandez", "noahh"))
    }

    #[tokio::test]
    async fn test_blank_query_fetches_nothing() {
        let service = fixture();
        let results = run_search(&service, "   ", 1).await.unwrap();
        assert!(results.posts.is_empty());
        assert!(service.calls().is_empty());
    }

    #[tokio::test]
    async fn test_posts_and_authors_together() {
        let service = fixture();
        let results = run_search(&service, "post 2", 1).await.unwrap();

        // "Post 2" and "Post 20".."Post 25"
        assert_eq!(results.posts.len(), 7);
        assert_eq!(results.page_count, 1);
        assert!(results.authors.is_empty());

        let results = run_search(&service, "em", 2).await.unwrap();
        assert_eq!(results.page, 2);
        assert_eq!(results.authors.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 2]);
        assert!(service.calls().contains(&Call::SearchPosts { query: "em".into(), limit: 10, skip: 10 }));
    }

    #[tokio::test]
    async fn test_huge_page_does_not_overflow() {
        let service = fixture();
        let results = run_search(&service, "post", u32::MAX).await.unwrap();
        assert!(results.posts.is_empty());
        assert_eq!(results.page, MAX_PAGE);
    }

    #[tokio::test]
    async fn test_superseded_search_is_discarded() {
        let composer = SearchComposer::new(Rc::new(fixture()));
        let release_first = composer.service.hold_listing(0);

        let first = composer.search("post", 1);
        let second = async {
            let outcome = composer.search("post", 2).await;
            release_first.send(()).unwrap();
            outcome
        };
        let (first, second) = futures::join!(first, second);

        assert_eq!(second, Outcome::Applied);
        assert_eq!(first, Outcome::Stale);

        let state = composer.state();
        assert_eq!(state.results.page, 2);
        assert_eq!(state.results.posts.first().map(|p| p.id), Some(11));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_failure_clears_results() {
        let composer = SearchComposer::new(Rc::new(fixture()));
        composer.search("post", 1).await;
        assert_eq!(composer.state().results.posts.len(), 10);

        composer.service.fail("search_authors");
        assert_eq!(composer.search("post", 1).await, Outcome::Applied);

        let state = composer.state();
        assert!(state.results.posts.is_empty());
        assert_eq!(state.results.query, "post");
        assert!(!state.loading);
    }
}
