//! Profile Aggregation
//!
//! An author profile and every post that author owns.

use std::cell::RefCell;

use crate::domain::{Author, Post};
use crate::generation::{GenerationCounter, Outcome};
use crate::remote::{ContentService, FetchError};

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDetail {
    pub author: Author,
    pub posts: Vec<Post>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    AuthorFetchFailed(FetchError),
    PostsFetchFailed(FetchError),
}

impl std::fmt::Display for ProfileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileError::AuthorFetchFailed(e) => write!(f, "Failed to fetch user: {}", e),
            ProfileError::PostsFetchFailed(e) => write!(f, "Failed to fetch user posts: {}", e),
        }
    }
}

impl std::error::Error for ProfileError {}

pub async fn aggregate_profile<S: ContentService + ?Sized>(service: &S, author_id: u32) -> Result<ProfileDetail, ProfileError> {
    log::debug!("[profile] aggregating author {}", author_id);

    let author = service
        .get_author(author_id)
        .await
        .map_err(ProfileError::AuthorFetchFailed)?;

    let posts = service
        .list_posts_by_author(author_id)
        .await
        .map_err(ProfileError::PostsFetchFailed)?;

    Ok(ProfileDetail { author, posts })
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ProfileState {
    #[default]
    Loading,
    Ready(Box<ProfileDetail>),
    /// Any aggregation failure renders as "User not found"
    NotFound,
}

/// Stale-safe holder for the profile view
pub struct ProfileLoader<S> {
    service: S,
    generations: GenerationCounter,
    state: RefCell<ProfileState>,
}

impl<S: ContentService> ProfileLoader<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            generations: GenerationCounter::new(),
            state: RefCell::new(ProfileState::Loading),
        }
    }

    pub fn state(&self) -> ProfileState {
        self.state.borrow().clone()
    }

    pub async fn load(&self, author_id: u32) -> Outcome {
        let generation = self.generations.issue();
        *self.state.borrow_mut() = ProfileState::Loading;

        let result = aggregate_profile(&self.service, author_id).await;
        if !self.generations.is_current(generation) {
            log::debug!("[profile] discarding stale profile of author {}", author_id);
            return Outcome::Stale;
        }

        *self.state.borrow_mut() = match result {
            Ok(profile) => ProfileState::Ready(Box::new(profile)),
            Err(e) => {
                log::warn!("[profile] author {}: {}", author_id, e);
                ProfileState::NotFound
            }
        };
        Outcome::Applied
    }
}
