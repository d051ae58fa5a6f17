//! Client-side ordering of a single fetched page.

use crate::domain::Post;
use super::query::SortMode;

/// Order one page in place. Never reorders across pages.
///
/// `MostLiked` is a stable sort by descending like count, so ties keep
/// the order the service returned them in.
pub fn sort_posts(posts: &mut [Post], mode: SortMode) {
    match mode {
        SortMode::Default => {}
        SortMode::MostLiked => posts.sort_by(|a, b| b.likes().cmp(&a.likes())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u32, likes: u32) -> Post {
        Post::new(id, "t", "b", 1).with_reactions(likes, 0)
    }

    fn ids(posts: &[Post]) -> Vec<u32> {
        posts.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_most_liked_descending_and_stable() {
        let mut posts = vec![post(1, 5), post(2, 9), post(3, 5), post(4, 0), post(5, 9)];
        sort_posts(&mut posts, SortMode::MostLiked);
        assert_eq!(ids(&posts), vec![2, 5, 1, 3, 4]);
    }

    #[test]
    fn test_most_liked_is_idempotent() {
        let mut once = vec![post(1, 2), post(2, 7), post(3, 2), post(4, 7)];
        sort_posts(&mut once, SortMode::MostLiked);
        let mut twice = once.clone();
        sort_posts(&mut twice, SortMode::MostLiked);
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn test_default_keeps_service_order() {
        let mut posts = vec![post(3, 1), post(1, 8), post(2, 4)];
        sort_posts(&mut posts, SortMode::Default);
        assert_eq!(ids(&posts), vec![3, 1, 2]);
    }
}
