//! HTTP Content Service
//!
//! `reqwest`-backed implementation of [`ContentService`] against the
//! DummyJSON REST layout. Uses the browser fetch API on wasm.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::config::FeedConfig;
use crate::domain::{Author, AuthorPage, Comment, CommentPage, Post, PostPage};
use super::error::{FetchError, FetchResult};
use super::traits::ContentService;

#[derive(Debug, Clone)]
pub struct HttpContentService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpContentService {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &FeedConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    /// Build the full request URL for a path and query pairs
    pub fn url(&self, path: &str, query: &[(&str, String)]) -> FetchResult<Url> {
        let raw = format!("{}{}", self.base_url, path);
        if query.is_empty() {
            Url::parse(&raw)
        } else {
            Url::parse_with_params(&raw, query)
        }
        .map_err(|e| FetchError::Transport(format!("bad url {}: {}", raw, e)))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> FetchResult<T> {
        log::debug!("[remote] GET {}", url);
        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            log::warn!("[remote] GET {} failed: {}", url, e);
            FetchError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("[remote] GET {} returned {}", url, status);
            return Err(FetchError::Status(status.as_u16()));
        }

        response.json::<T>().await.map_err(|e| {
            log::warn!("[remote] GET {} decode failed: {}", url, e);
            FetchError::Decode(e.to_string())
        })
    }
}

fn paging(limit: u32, skip: u32) -> [(&'static str, String); 2] {
    [("limit", limit.to_string()), ("skip", skip.to_string())]
}

fn segment(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

#[async_trait(?Send)]
impl ContentService for HttpContentService {
    async fn list_posts(&self, limit: u32, skip: u32) -> FetchResult<PostPage> {
        let url = self.url("/posts", &paging(limit, skip))?;
        self.get_json(url).await
    }

    async fn search_posts(&self, query: &str, limit: u32, skip: u32) -> FetchResult<PostPage> {
        let [limit_param, skip_param] = paging(limit, skip);
        let url = self.url("/posts/search", &[("q", query.to_string()), limit_param, skip_param])?;
        self.get_json(url).await
    }

    async fn list_posts_by_tag(&self, tag: &str, limit: u32, skip: u32) -> FetchResult<PostPage> {
        let url = self.url(&format!("/posts/tag/{}", segment(tag)), &paging(limit, skip))?;
        self.get_json(url).await
    }

    async fn get_post(&self, id: u32) -> FetchResult<Post> {
        let url = self.url(&format!("/posts/{}", id), &[])?;
        self.get_json(url).await
    }

    async fn list_posts_by_author(&self, author_id: u32) -> FetchResult<Vec<Post>> {
        let url = self.url(&format!("/posts/user/{}", author_id), &[])?;
        let page: PostPage = self.get_json(url).await?;
        Ok(page.posts)
    }

    async fn get_comments(&self, post_id: u32) -> FetchResult<Vec<Comment>> {
        let url = self.url(&format!("/posts/{}/comments", post_id), &[])?;
        let page: CommentPage = self.get_json(url).await?;
        Ok(page.comments)
    }

    async fn get_author(&self, id: u32) -> FetchResult<Author> {
        let url = self.url(&format!("/users/{}", id), &[])?;
        self.get_json(url).await
    }

    async fn search_authors(&self, query: &str) -> FetchResult<Vec<Author>> {
        let url = self.url("/users/search", &[("q", query.to_string())])?;
        let page: AuthorPage = self.get_json(url).await?;
        Ok(page.users)
    }
}
