//! Domain Layer
//!
//! Records owned by the remote content service. The client never mutates
//! them, it only fetches and displays them.

mod entity;
mod post;
mod author;
mod comment;
mod page;

pub use entity::{index_by_id, Entity};
pub use post::{Post, Reactions};
pub use author::{Address, Author, Company};
pub use comment::{Comment, CommentUser};
pub use page::{AuthorPage, CommentPage, PostPage};
