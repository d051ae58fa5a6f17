//! Detail Aggregator
//!
//! Builds the post-detail view model from a fixed chain of dependent
//! fetches: post, its author, its comments, then every distinct commenter
//! profile in parallel. Any failure aborts the whole aggregation.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use futures::future::try_join_all;

use crate::domain::{index_by_id, Author, Comment, Post};
use crate::generation::{GenerationCounter, Outcome};
use crate::remote::{ContentService, FetchError};

#[derive(Debug, Clone, PartialEq)]
pub struct PostDetail {
    pub post: Post,
    pub author: Author,
    /// In service order
    pub comments: Vec<Comment>,
    /// Commenter profiles by author ID
    pub commenters: HashMap<u32, Author>,
}

/// Failure stage of a detail aggregation, in pipeline order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailError {
    ItemFetchFailed(FetchError),
    AuthorFetchFailed(FetchError),
    CommentsFetchFailed(FetchError),
    CommenterFetchFailed(FetchError),
}

impl std::fmt::Display for DetailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetailError::ItemFetchFailed(e) => write!(f, "Failed to fetch post: {}", e),
            DetailError::AuthorFetchFailed(e) => write!(f, "Failed to fetch author: {}", e),
            DetailError::CommentsFetchFailed(e) => write!(f, "Failed to fetch comments: {}", e),
            DetailError::CommenterFetchFailed(e) => write!(f, "Failed to fetch commenter: {}", e),
        }
    }
}

impl std::error::Error for DetailError {}

/// Distinct commenter IDs in order of first appearance
pub fn commenter_ids(comments: &[Comment]) -> Vec<u32> {
    let mut seen = HashSet::new();
    comments
        .iter()
        .map(Comment::author_id)
        .filter(|id| seen.insert(*id))
        .collect()
}

pub async fn aggregate_post<S: ContentService + ?Sized>(service: &S, post_id: u32) -> Result<PostDetail, DetailError> {
    log::debug!("[detail] aggregating post {}", post_id);

    let post = service
        .get_post(post_id)
        .await
        .map_err(DetailError::ItemFetchFailed)?;

    let author = service
        .get_author(post.user_id)
        .await
        .map_err(DetailError::AuthorFetchFailed)?;

    let comments = service
        .get_comments(post_id)
        .await
        .map_err(DetailError::CommentsFetchFailed)?;

    let ids = commenter_ids(&comments);
    let commenters = if ids.is_empty() {
        HashMap::new()
    } else {
        let profiles = try_join_all(ids.iter().map(|id| service.get_author(*id)))
            .await
            .map_err(DetailError::CommenterFetchFailed)?;
        index_by_id(profiles)
    };

    Ok(PostDetail {
        post,
        author,
        comments,
        commenters,
    })
}

/// What the detail view shows
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DetailState {
    #[default]
    Loading,
    Ready(Box<PostDetail>),
    /// Any aggregation failure renders as "Post not found"
    NotFound,
}

/// Stale-safe holder for the detail view: navigating to another post while
/// one is still loading never lets the older aggregation win.
pub struct DetailLoader<S> {
    service: S,
    generations: GenerationCounter,
    state: RefCell<DetailState>,
}

impl<S: ContentService> DetailLoader<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            generations: GenerationCounter::new(),
            state: RefCell::new(DetailState::Loading),
        }
    }

    pub fn state(&self) -> DetailState {
        self.state.borrow().clone()
    }

    pub async fn load(&self, post_id: u32) -> Outcome {
        let generation = self.generations.issue();
        *self.state.borrow_mut() = DetailState::Loading;

        let result = aggregate_post(&self.service, post_id).await;
        if !self.generations.is_current(generation) {
            log::debug!("[detail] discarding stale aggregation of post {}", post_id);
            return Outcome::Stale;
        }

        *self.state.borrow_mut() = match result {
            Ok(detail) => DetailState::Ready(Box::new(detail)),
            Err(e) => {
                log::warn!("[detail] post {}: {}", post_id, e);
                DetailState::NotFound
            }
        };
        Outcome::Applied
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::remote::fake::{Call, FakeContentService};

    fn fixture() -> FakeContentService {
        FakeContentService::new()
            .with_posts(vec![Post::new(1, "Hello", "World", 3)])
            .with_author(Author::new(3, "Emily", "Johnson", "emilys"))
            .with_author(Author::new(7, "Michael", "Williams", "michaelw"))
            .with_author(Author::new(9, "Sophia", "Brown", "sophiab"))
            .with_comments(
                1,
                vec![
                    Comment::new(10, 1, "first", 7, "michaelw"),
                    Comment::new(11, 1, "second", 7, "michaelw"),
                    Comment::new(12, 1, "third", 9, "sophiab"),
                ],
            )
    }

    #[tokio::test]
    async fn test_aggregates_post_author_comments_and_commenters() {
        let service = fixture();
        let detail = aggregate_post(&service, 1).await.unwrap();

        assert_eq!(detail.post.title, "Hello");
        assert_eq!(detail.author.username, "emilys");
        assert_eq!(detail.comments.iter().map(|c| c.id).collect::<Vec<_>>(), vec![10, 11, 12]);
        assert_eq!(detail.commenters.len(), 2);
        assert_eq!(detail.commenters[&9].first_name, "Sophia");
    }

    #[tokio::test]
    async fn test_fetches_each_commenter_once() {
        let service = fixture();
        aggregate_post(&service, 1).await.unwrap();
        // author of the post, then commenters 7 and 9
        assert_eq!(service.author_fetches(), vec![3, 7, 9]);
    }

    #[tokio::test]
    async fn test_commenter_profiles_are_fetched_together() {
        let service = fixture();
        let release = service.hold_author(7);

        let (detail, in_flight) = futures::join!(aggregate_post(&service, 1), async {
            // 7 is still held here, so 9 must already be requested
            let in_flight = service.author_fetches();
            release.send(()).unwrap();
            in_flight
        });

        assert_eq!(in_flight, vec![3, 7, 9]);
        assert_eq!(detail.unwrap().commenters.len(), 2);
    }

    #[tokio::test]
    async fn test_loader_ignores_superseded_post() {
        let service = Rc::new(fixture().with_posts(vec![
            Post::new(1, "Hello", "World", 3),
            Post::new(2, "Later", "Second post", 9),
        ]));
        let loader = DetailLoader::new(service.clone());
        let release_first = service.hold_author(3);

        let first = loader.load(1);
        let second = async {
            let outcome = loader.load(2).await;
            release_first.send(()).unwrap();
            outcome
        };
        let (first, second) = futures::join!(first, second);

        assert_eq!(second, Outcome::Applied);
        assert_eq!(first, Outcome::Stale);
        assert!(matches!(loader.state(), DetailState::Ready(detail) if detail.post.id == 2));
    }

    #[tokio::test]
    async fn test_author_failure_skips_comments() {
        let service = fixture();
        service.fail("get_author");

        let err = aggregate_post(&service, 1).await.unwrap_err();

        assert_eq!(err, DetailError::AuthorFetchFailed(FetchError::Status(500)));
        assert!(!service.calls().iter().any(|c| matches!(c, Call::GetComments(_))));
    }

    #[tokio::test]
    async fn test_missing_post_aborts_first() {
        let service = fixture();
        let err = aggregate_post(&service, 42).await.unwrap_err();
        assert_eq!(err, DetailError::ItemFetchFailed(FetchError::Status(404)));
        assert_eq!(service.calls(), vec![Call::GetPost(42)]);
    }

    #[tokio::test]
    async fn test_comments_failure() {
        let service = fixture();
        service.fail("get_comments");
        let err = aggregate_post(&service, 1).await.unwrap_err();
        assert!(matches!(err, DetailError::CommentsFetchFailed(_)));
    }

    #[tokio::test]
    async fn test_one_failed_commenter_fails_the_join() {
        let service = fixture();
        service.fail_author(9);
        let err = aggregate_post(&service, 1).await.unwrap_err();
        assert_eq!(err, DetailError::CommenterFetchFailed(FetchError::Status(500)));
    }

    #[tokio::test]
    async fn test_no_comments_means_no_extra_fetches() {
        let service = FakeContentService::new()
            .with_posts(vec![Post::new(2, "Quiet", "Nobody replied", 3)])
            .with_author(Author::new(3, "Emily", "Johnson", "emilys"));

        let detail = aggregate_post(&service, 2).await.unwrap();

        assert!(detail.comments.is_empty());
        assert!(detail.commenters.is_empty());
        assert_eq!(service.author_fetches(), vec![3]);
    }

    #[test]
    fn test_commenter_ids_keep_first_appearance() {
        let comments = vec![
            Comment::new(1, 1, "a", 9, "x"),
            Comment::new(2, 1, "b", 7, "y"),
            Comment::new(3, 1, "c", 9, "x"),
        ];
        assert_eq!(commenter_ids(&comments), vec![9, 7]);
    }

    #[tokio::test]
    async fn test_loader_reports_not_found() {
        let loader = DetailLoader::new(Rc::new(fixture()));
        assert_eq!(loader.state(), DetailState::Loading);

        assert_eq!(loader.load(99).await, Outcome::Applied);
        assert_eq!(loader.state(), DetailState::NotFound);

        loader.load(1).await;
        assert!(matches!(loader.state(), DetailState::Ready(detail) if detail.post.id == 1));
    }
}
