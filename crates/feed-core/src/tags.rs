//! Popular Tags
//!
//! Tag popularity is tallied over an explicit sample of posts. The ranking
//! reflects only that sample, never the full corpus.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::FeedConfig;
use crate::domain::Post;
use crate::remote::ContentService;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub tag: String,
    pub count: u32,
}

/// Rank tags by occurrence count, most frequent first.
///
/// Ties keep the order in which the tags were first seen in `sample`.
pub fn rank_tags(sample: &[Post], top_n: usize) -> Vec<TagCount> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut ranked: Vec<TagCount> = Vec::new();

    for tag in sample.iter().flat_map(|p| p.tags.iter()) {
        match positions.get(tag.as_str()) {
            Some(&index) => ranked[index].count += 1,
            None => {
                positions.insert(tag.as_str(), ranked.len());
                ranked.push(TagCount { tag: tag.clone(), count: 1 });
            }
        }
    }

    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(top_n);
    ranked
}

/// Sample the newest posts and return the most frequent tag names.
/// A failed fetch yields no tags.
pub async fn fetch_popular_tags<S: ContentService + ?Sized>(service: &S, config: &FeedConfig) -> Vec<String> {
    match service.list_posts(config.tag_sample_size, 0).await {
        Ok(page) => rank_tags(&page.posts, config.popular_tag_count)
            .into_iter()
            .map(|t| t.tag)
            .collect(),
        Err(e) => {
            log::warn!("[tags] error fetching tags: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::fake::{Call, FakeContentService};

    fn tagged(id: u32, tags: &[&str]) -> Post {
        Post::new(id, "t", "b", 1).with_tags(tags.iter().copied())
    }

    #[test]
    fn test_counts_and_orders_by_frequency() {
        let sample = vec![
            tagged(1, &["history", "crime"]),
            tagged(2, &["love", "crime"]),
            tagged(3, &["crime", "love", "magic"]),
        ];
        let ranked = rank_tags(&sample, 10);
        assert_eq!(
            ranked,
            vec![
                TagCount { tag: "crime".into(), count: 3 },
                TagCount { tag: "love".into(), count: 2 },
                TagCount { tag: "history".into(), count: 1 },
                TagCount { tag: "magic".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_top_n_cut() {
        let sample = vec![tagged(1, &["a", "b", "c"]), tagged(2, &["c"])];
        let ranked = rank_tags(&sample, 2);
        assert_eq!(ranked.iter().map(|t| t.tag.as_str()).collect::<Vec<_>>(), vec!["c", "a"]);
    }

    #[test]
    fn test_empty_sample() {
        assert!(rank_tags(&[], 10).is_empty());
    }

    #[tokio::test]
    async fn test_fetch_uses_configured_sample() {
        let service = FakeContentService::new().with_posts(vec![tagged(1, &["x"]), tagged(2, &["y", "x"])]);
        let tags = fetch_popular_tags(&service, &FeedConfig::default()).await;
        assert_eq!(tags, vec!["x", "y"]);
        assert_eq!(service.calls(), vec![Call::ListPosts { limit: 100, skip: 0 }]);
    }

    #[tokio::test]
    async fn test_fetch_failure_yields_nothing() {
        let service = FakeContentService::new();
        service.fail("list_posts");
        assert!(fetch_popular_tags(&service, &FeedConfig::default()).await.is_empty());
    }
}
