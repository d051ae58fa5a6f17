//! View Models
//!
//! Projection from domain records to what the presentation layer renders.
//! Domain types never carry display strings; these types never go back
//! to the service.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::domain::{Author, Comment, Post};
use crate::routes::Route;

/// Feed card body excerpt length, in characters
pub const EXCERPT_LEN: usize = 150;

/// Number of numbered page links shown
pub const PAGE_LINKS: u32 = 5;

/// Cut `text` to `max` characters, appending "..." when cut
pub fn truncate_text(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
        None => text.to_string(),
    }
}

fn initials(first: &str, last: &str) -> String {
    first.chars().take(1).chain(last.chars().take(1)).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostCardView {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub author_id: u32,
    pub tags: Vec<String>,
    /// "Likes: 12, Dislikes: 3"
    pub reactions_label: String,
    pub href: String,
    pub author_href: String,
}

impl PostCardView {
    pub fn from_post(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            excerpt: truncate_text(&post.body, EXCERPT_LEN),
            author_id: post.user_id,
            tags: post.tags.clone(),
            reactions_label: format!(
                "Likes: {}, Dislikes: {}",
                post.reactions.likes, post.reactions.dislikes
            ),
            href: Route::Post(post.id).to_href(),
            author_href: Route::Profile(post.user_id).to_href(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthorView {
    pub id: u32,
    pub full_name: String,
    /// "@username"
    pub handle: String,
    pub initials: String,
    pub avatar: String,
    pub href: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// "City, State"
    pub location: Option<String>,
    /// "Title at Company"
    pub occupation: Option<String>,
    pub born: Option<String>,
}

impl AuthorView {
    pub fn from_author(author: &Author) -> Self {
        Self {
            id: author.id,
            full_name: author.full_name(),
            handle: format!("@{}", author.username),
            initials: initials(&author.first_name, &author.last_name),
            avatar: author.image.clone(),
            href: Route::Profile(author.id).to_href(),
            email: author.email.clone(),
            phone: author.phone.clone(),
            location: author
                .address
                .as_ref()
                .map(|a| format!("{}, {}", a.city, a.state)),
            occupation: author
                .company
                .as_ref()
                .map(|c| format!("{} at {}", c.title, c.name)),
            born: author.birth_date.as_deref().map(format_birth_date),
        }
    }
}

/// "1996-5-30" becomes "May 30, 1996"; anything unparseable is shown raw
pub fn format_birth_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommentView {
    pub id: u32,
    pub body: String,
    pub author_id: u32,
    pub handle: String,
    /// Full name when the commenter profile is known, handle otherwise
    pub display_name: String,
    pub initials: String,
    pub avatar: Option<String>,
    pub author_href: String,
}

impl CommentView {
    pub fn from_comment(comment: &Comment, commenters: &HashMap<u32, Author>) -> Self {
        let profile = commenters.get(&comment.author_id());
        Self {
            id: comment.id,
            body: comment.body.clone(),
            author_id: comment.author_id(),
            handle: format!("@{}", comment.user.username),
            display_name: profile
                .map(Author::full_name)
                .unwrap_or_else(|| comment.user.username.clone()),
            initials: profile
                .map(|a| initials(&a.first_name, &a.last_name))
                .unwrap_or_else(|| comment.user.username.chars().take(2).collect()),
            avatar: profile.map(|a| a.image.clone()),
            author_href: Route::Profile(comment.author_id()).to_href(),
        }
    }
}

/// Pagination strip under a list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub current: u32,
    pub total: u32,
    /// Numbered links, the first `PAGE_LINKS` pages at most
    pub pages: Vec<u32>,
    pub has_prev: bool,
    pub has_next: bool,
}

impl PaginationView {
    pub fn new(current: u32, total: u32) -> Self {
        Self {
            current,
            total,
            pages: (1..=total.min(PAGE_LINKS)).collect(),
            has_prev: current > 1,
            has_next: current < total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Address, Company};

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 150), "short");
        assert_eq!(truncate_text("abcdef", 3), "abc...");
        assert_eq!(truncate_text("héllo", 2), "hé...");
        assert_eq!(truncate_text("abc", 3), "abc");
    }

    #[test]
    fn test_post_card_reactions_label() {
        let post = Post::new(5, "Title", "x".repeat(200), 8).with_reactions(12, 3);
        let card = PostCardView::from_post(&post);
        assert_eq!(card.reactions_label, "Likes: 12, Dislikes: 3");
        assert_eq!(card.excerpt.chars().count(), 153);
        assert_eq!(card.href, "/post/5");
        assert_eq!(card.author_href, "/profile/8");
    }

    #[test]
    fn test_author_view() {
        let mut author = Author::new(1, "Emily", "Johnson", "emilys");
        author.birth_date = Some("1996-5-30".into());
        author.address = Some(Address { city: "Phoenix".into(), state: "Mississippi".into() });
        author.company = Some(Company { name: "Dooley".into(), title: "Sales Manager".into() });

        let view = AuthorView::from_author(&author);
        assert_eq!(view.handle, "@emilys");
        assert_eq!(view.initials, "EJ");
        assert_eq!(view.location.as_deref(), Some("Phoenix, Mississippi"));
        assert_eq!(view.occupation.as_deref(), Some("Sales Manager at Dooley"));
        assert_eq!(view.born.as_deref(), Some("May 30, 1996"));
    }

    #[test]
    fn test_birth_date_fallback() {
        assert_eq!(format_birth_date("someday"), "someday");
    }

    #[test]
    fn test_comment_view_uses_lookup() {
        let comment = Comment::new(1, 1, "nice", 7, "michaelw");
        let mut commenters = HashMap::new();

        let bare = CommentView::from_comment(&comment, &commenters);
        assert_eq!(bare.display_name, "michaelw");
        assert_eq!(bare.avatar, None);

        commenters.insert(7, Author::new(7, "Michael", "Williams", "michaelw"));
        let full = CommentView::from_comment(&comment, &commenters);
        assert_eq!(full.display_name, "Michael Williams");
        assert_eq!(full.initials, "MW");
        assert_eq!(full.handle, "@michaelw");
    }

    #[test]
    fn test_pagination_window() {
        let view = PaginationView::new(1, 25);
        assert_eq!(view.pages, vec![1, 2, 3, 4, 5]);
        assert!(!view.has_prev);
        assert!(view.has_next);

        let view = PaginationView::new(3, 3);
        assert_eq!(view.pages, vec![1, 2, 3]);
        assert!(view.has_prev);
        assert!(!view.has_next);

        assert!(PaginationView::new(1, 0).pages.is_empty());
    }
}
