//! Scripted in-memory content service for tests.
//!
//! Serves fixtures, records every call in order, and can hold individual
//! listing responses until the test releases them.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use futures::channel::oneshot;

use crate::domain::{Author, Comment, Post, PostPage};
use super::error::{FetchError, FetchResult};
use super::traits::ContentService;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListPosts { limit: u32, skip: u32 },
    SearchPosts { query: String, limit: u32, skip: u32 },
    ListPostsByTag { tag: String, limit: u32, skip: u32 },
    GetPost(u32),
    ListPostsByAuthor(u32),
    GetComments(u32),
    GetAuthor(u32),
    SearchAuthors(String),
}

#[derive(Default)]
pub struct FakeContentService {
    posts: Vec<Post>,
    authors: HashMap<u32, Author>,
    comments: HashMap<u32, Vec<Comment>>,
    failing: RefCell<HashSet<&'static str>>,
    failing_authors: RefCell<HashSet<u32>>,
    held: RefCell<HashMap<u32, oneshot::Receiver<()>>>,
    held_authors: RefCell<HashMap<u32, oneshot::Receiver<()>>>,
    calls: RefCell<Vec<Call>>,
}

impl FakeContentService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts(mut self, posts: Vec<Post>) -> Self {
        self.posts = posts;
        self
    }

    pub fn with_author(mut self, author: Author) -> Self {
        self.authors.insert(author.id, author);
        self
    }

    pub fn with_comments(mut self, post_id: u32, comments: Vec<Comment>) -> Self {
        self.comments.insert(post_id, comments);
        self
    }

    /// Make every call of the named operation fail with status 500
    pub fn fail(&self, operation: &'static str) {
        self.failing.borrow_mut().insert(operation);
    }

    pub fn fail_author(&self, id: u32) {
        self.failing_authors.borrow_mut().insert(id);
    }

    /// Hold listing responses for `skip` until the returned sender fires
    pub fn hold_listing(&self, skip: u32) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.held.borrow_mut().insert(skip, rx);
        tx
    }

    /// Hold author lookups for `id` until the returned sender fires
    pub fn hold_author(&self, id: u32) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.held_authors.borrow_mut().insert(id, rx);
        tx
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn author_fetches(&self) -> Vec<u32> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::GetAuthor(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn check(&self, operation: &'static str) -> FetchResult<()> {
        if self.failing.borrow().contains(operation) {
            Err(FetchError::Status(500))
        } else {
            Ok(())
        }
    }

    async fn release(&self, skip: u32) {
        let held = self.held.borrow_mut().remove(&skip);
        if let Some(rx) = held {
            let _ = rx.await;
        }
    }

    fn page(&self, matching: Vec<Post>, limit: u32, skip: u32) -> PostPage {
        let total = matching.len() as u32;
        let posts: Vec<Post> = matching
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect();
        PostPage { limit: posts.len() as u32, posts, total, skip }
    }
}

#[async_trait(?Send)]
impl ContentService for FakeContentService {
    async fn list_posts(&self, limit: u32, skip: u32) -> FetchResult<PostPage> {
        self.record(Call::ListPosts { limit, skip });
        self.release(skip).await;
        self.check("list_posts")?;
        Ok(self.page(self.posts.clone(), limit, skip))
    }

    async fn search_posts(&self, query: &str, limit: u32, skip: u32) -> FetchResult<PostPage> {
        self.record(Call::SearchPosts { query: query.to_string(), limit, skip });
        self.release(skip).await;
        self.check("search_posts")?;
        let needle = query.to_lowercase();
        let matching = self
            .posts
            .iter()
            .filter(|p| p.title.to_lowercase().contains(&needle) || p.body.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        Ok(self.page(matching, limit, skip))
    }

    async fn list_posts_by_tag(&self, tag: &str, limit: u32, skip: u32) -> FetchResult<PostPage> {
        self.record(Call::ListPostsByTag { tag: tag.to_string(), limit, skip });
        self.release(skip).await;
        self.check("list_posts_by_tag")?;
        let matching = self
            .posts
            .iter()
            .filter(|p| p.tags.iter().any(|t| t == tag))
            .cloned()
            .collect();
        Ok(self.page(matching, limit, skip))
    }

    async fn get_post(&self, id: u32) -> FetchResult<Post> {
        self.record(Call::GetPost(id));
        self.check("get_post")?;
        self.posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(FetchError::Status(404))
    }

    async fn list_posts_by_author(&self, author_id: u32) -> FetchResult<Vec<Post>> {
        self.record(Call::ListPostsByAuthor(author_id));
        self.check("list_posts_by_author")?;
        Ok(self.posts.iter().filter(|p| p.user_id == author_id).cloned().collect())
    }

    async fn get_comments(&self, post_id: u32) -> FetchResult<Vec<Comment>> {
        self.record(Call::GetComments(post_id));
        self.check("get_comments")?;
        Ok(self.comments.get(&post_id).cloned().unwrap_or_default())
    }

    async fn get_author(&self, id: u32) -> FetchResult<Author> {
        self.record(Call::GetAuthor(id));
        let held = self.held_authors.borrow_mut().remove(&id);
        if let Some(rx) = held {
            let _ = rx.await;
        }
        self.check("get_author")?;
        if self.failing_authors.borrow().contains(&id) {
            return Err(FetchError::Status(500));
        }
        self.authors.get(&id).cloned().ok_or(FetchError::Status(404))
    }

    async fn search_authors(&self, query: &str) -> FetchResult<Vec<Author>> {
        self.record(Call::SearchAuthors(query.to_string()));
        self.check("search_authors")?;
        let needle = query.to_lowercase();
        let mut found: Vec<Author> = self
            .authors
            .values()
            .filter(|a| a.username.to_lowercase().contains(&needle) || a.full_name().to_lowercase().contains(&needle))
            .cloned()
            .collect();
        found.sort_by_key(|a| a.id);
        Ok(found)
    }
}

/// `count` posts with IDs 1..=count, author `id % 3 + 1`, likes `id * 3 % 7`
pub fn sample_posts(count: u32) -> Vec<Post> {
    (1..=count)
        .map(|id| {
            Post::new(id, format!("Post {}", id), format!("Body of post {}", id), id % 3 + 1)
                .with_reactions(id * 3 % 7, id % 2)
        })
        .collect()
}
