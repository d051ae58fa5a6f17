//! Post Entity
//!
//! A feed post as served by the remote content service.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Reaction counters attached to a post
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ReactionsWire")]
pub struct Reactions {
    pub likes: u32,
    pub dislikes: u32,
}

/// Older API revisions report a bare like count instead of an object.
#[derive(Deserialize)]
#[serde(untagged)]
enum ReactionsWire {
    Counts {
        #[serde(default)]
        likes: u32,
        #[serde(default)]
        dislikes: u32,
    },
    Likes(u32),
}

impl From<ReactionsWire> for Reactions {
    fn from(wire: ReactionsWire) -> Self {
        match wire {
            ReactionsWire::Counts { likes, dislikes } => Reactions { likes, dislikes },
            ReactionsWire::Likes(likes) => Reactions { likes, dislikes: 0 },
        }
    }
}

/// A feed post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique identifier
    pub id: u32,
    pub title: String,
    pub body: String,
    /// Owning author
    pub user_id: u32,
    /// Tag labels, unordered
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub reactions: Reactions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<u32>,
}

impl Post {
    pub fn new(id: u32, title: impl Into<String>, body: impl Into<String>, user_id: u32) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            user_id,
            tags: Vec::new(),
            reactions: Reactions::default(),
            views: None,
        }
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_reactions(mut self, likes: u32, dislikes: u32) -> Self {
        self.reactions = Reactions { likes, dislikes };
        self
    }

    pub fn likes(&self) -> u32 {
        self.reactions.likes
    }
}

impl Entity for Post {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
