//! Paginated Envelopes
//!
//! Every list endpoint wraps its records as `{ <items>, total, skip, limit }`.

use serde::{Deserialize, Serialize};
use super::{Author, Comment, Post};

/// One page of posts plus the total number of matching posts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostPage {
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub skip: u32,
    #[serde(default)]
    pub limit: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthorPage {
    #[serde(default)]
    pub users: Vec<Author>,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub skip: u32,
    #[serde(default)]
    pub limit: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommentPage {
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub skip: u32,
    #[serde(default)]
    pub limit: u32,
}

impl PostPage {
    pub fn new(posts: Vec<Post>, total: u32) -> Self {
        let limit = posts.len() as u32;
        Self { posts, total, skip: 0, limit }
    }
}
