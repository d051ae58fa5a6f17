//! Remote Content Service - Core Trait
//!
//! The logical operations consumed from the upstream REST API. The service
//! itself is a black box; implementations only translate calls to requests.

use std::rc::Rc;

use async_trait::async_trait;

use crate::domain::{Author, Comment, Post, PostPage};
use super::error::FetchResult;

/// Read-only access to posts, authors and comments.
///
/// Futures are not `Send`: the same implementation runs on the browser's
/// single-threaded executor and on a current-thread runtime in tests.
#[async_trait(?Send)]
pub trait ContentService {
    /// One page of the unfiltered post listing
    async fn list_posts(&self, limit: u32, skip: u32) -> FetchResult<PostPage>;

    /// One page of posts matching a free-text query
    async fn search_posts(&self, query: &str, limit: u32, skip: u32) -> FetchResult<PostPage>;

    /// One page of posts carrying a tag
    async fn list_posts_by_tag(&self, tag: &str, limit: u32, skip: u32) -> FetchResult<PostPage>;

    async fn get_post(&self, id: u32) -> FetchResult<Post>;

    /// All posts owned by an author
    async fn list_posts_by_author(&self, author_id: u32) -> FetchResult<Vec<Post>>;

    /// Comments of a post, in service order
    async fn get_comments(&self, post_id: u32) -> FetchResult<Vec<Comment>>;

    async fn get_author(&self, id: u32) -> FetchResult<Author>;

    async fn search_authors(&self, query: &str) -> FetchResult<Vec<Author>>;
}

#[async_trait(?Send)]
impl<T: ContentService + ?Sized> ContentService for Rc<T> {
    async fn list_posts(&self, limit: u32, skip: u32) -> FetchResult<PostPage> {
        (**self).list_posts(limit, skip).await
    }

    async fn search_posts(&self, query: &str, limit: u32, skip: u32) -> FetchResult<PostPage> {
        (**self).search_posts(query, limit, skip).await
    }

    async fn list_posts_by_tag(&self, tag: &str, limit: u32, skip: u32) -> FetchResult<PostPage> {
        (**self).list_posts_by_tag(tag, limit, skip).await
    }

    async fn get_post(&self, id: u32) -> FetchResult<Post> {
        (**self).get_post(id).await
    }

    async fn list_posts_by_author(&self, author_id: u32) -> FetchResult<Vec<Post>> {
        (**self).list_posts_by_author(author_id).await
    }

    async fn get_comments(&self, post_id: u32) -> FetchResult<Vec<Comment>> {
        (**self).get_comments(post_id).await
    }

    async fn get_author(&self, id: u32) -> FetchResult<Author> {
        (**self).get_author(id).await
    }

    async fn search_authors(&self, query: &str) -> FetchResult<Vec<Author>> {
        (**self).search_authors(query).await
    }
}
