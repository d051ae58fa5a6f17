//! Comment Entity

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Commenting user reference. Only the ID and handle, never a full profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentUser {
    pub id: u32,
    pub username: String,
}

/// A comment on a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u32,
    pub post_id: u32,
    pub body: String,
    pub user: CommentUser,
    #[serde(default)]
    pub likes: u32,
}

impl Comment {
    pub fn new(id: u32, post_id: u32, body: impl Into<String>, user_id: u32, username: impl Into<String>) -> Self {
        Self {
            id,
            post_id,
            body: body.into(),
            user: CommentUser {
                id: user_id,
                username: username.into(),
            },
            likes: 0,
        }
    }

    pub fn author_id(&self) -> u32 {
        self.user.id
    }
}

impl Entity for Comment {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
