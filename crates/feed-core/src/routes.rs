//! Routes
//!
//! Every view is a pure function of its route. Routes parse from a path and
//! query string and render back to an href.

use std::borrow::Cow;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::feed::{FeedQuery, SortMode};

const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/` or `/dashboard?page=&q=&tag=&sort=`
    Feed(FeedQuery),
    /// `/post/{id}`
    Post(u32),
    /// `/profile/{id}`
    Profile(u32),
    /// `/search?q=&page=`
    Search { query: String, page: u32 },
    Login,
    NotFound,
}

fn decode(value: &str) -> String {
    let spaced = value.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

fn encode(value: &str) -> Cow<'_, str> {
    utf8_percent_encode(value, QUERY_VALUE).into()
}

fn query_pairs(query: &str) -> Vec<(String, String)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (decode(key), decode(value)),
            None => (decode(pair), String::new()),
        })
        .collect()
}

fn lookup<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn parse_page(pairs: &[(String, String)]) -> u32 {
    lookup(pairs, "page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(1)
}

impl Route {
    /// Parse a location. `query` may include the leading `?`.
    pub fn parse(path: &str, query: &str) -> Route {
        let pairs = query_pairs(query);
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] | ["dashboard"] => {
                let mut feed = FeedQuery::at_page(parse_page(&pairs));
                if let Some(q) = lookup(&pairs, "q") {
                    feed = feed.with_search(q);
                }
                feed = feed.with_tag(lookup(&pairs, "tag").map(str::to_string));
                if let Some(sort) = lookup(&pairs, "sort").and_then(|s| s.parse::<SortMode>().ok()) {
                    feed = feed.with_sort(sort);
                }
                Route::Feed(feed)
            }
            ["post", id] => id.parse().map(Route::Post).unwrap_or(Route::NotFound),
            ["profile", id] => id.parse().map(Route::Profile).unwrap_or(Route::NotFound),
            ["search"] => Route::Search {
                query: lookup(&pairs, "q").unwrap_or_default().to_string(),
                page: parse_page(&pairs).max(1),
            },
            ["login"] => Route::Login,
            _ => Route::NotFound,
        }
    }

    pub fn to_href(&self) -> String {
        match self {
            Route::Feed(feed) => {
                let mut params = Vec::new();
                if feed.page() > 1 {
                    params.push(format!("page={}", feed.page()));
                }
                if let Some(q) = feed.search() {
                    params.push(format!("q={}", encode(q)));
                }
                if let Some(tag) = feed.tag() {
                    params.push(format!("tag={}", encode(tag)));
                }
                if feed.sort() != SortMode::Default {
                    params.push(format!("sort={}", feed.sort().as_str()));
                }
                if params.is_empty() {
                    "/dashboard".to_string()
                } else {
                    format!("/dashboard?{}", params.join("&"))
                }
            }
            Route::Post(id) => format!("/post/{}", id),
            Route::Profile(id) => format!("/profile/{}", id),
            Route::Search { query, page } => {
                if query.is_empty() {
                    "/search".to_string()
                } else if *page > 1 {
                    format!("/search?q={}&page={}", encode(query), page)
                } else {
                    format!("/search?q={}", encode(query))
                }
            }
            Route::Login => "/login".to_string(),
            Route::NotFound => "/".to_string(),
        }
    }

    /// Feed link filtered to one tag
    pub fn tag(tag: &str) -> Route {
        Route::Feed(FeedQuery::new().select_tag(Some(tag.to_string())))
    }

    /// Apply the login gate: only the login view is reachable without a
    /// session, and the login view bounces to the feed once logged in.
    pub fn guard(self, authenticated: bool) -> Route {
        match (self, authenticated) {
            (Route::Login, true) => Route::Feed(FeedQuery::new()),
            (_, false) => Route::Login,
            (route, true) => route,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_feed_params() {
        let route = Route::parse("/dashboard", "?page=3&tag=history&sort=reactions");
        let expected = FeedQuery::at_page(3)
            .with_tag(Some("history".into()))
            .with_sort(SortMode::MostLiked);
        assert_eq!(route, Route::Feed(expected));
        assert_eq!(Route::parse("/", ""), Route::Feed(FeedQuery::new()));
    }

    #[test]
    fn test_parse_detail_routes() {
        assert_eq!(Route::parse("/post/12", ""), Route::Post(12));
        assert_eq!(Route::parse("/profile/7/", ""), Route::Profile(7));
        assert_eq!(Route::parse("/post/abc", ""), Route::NotFound);
        assert_eq!(Route::parse("/nowhere", ""), Route::NotFound);
    }

    #[test]
    fn test_search_query_is_decoded() {
        let route = Route::parse("/search", "q=love+%26+war&page=2");
        assert_eq!(route, Route::Search { query: "love & war".into(), page: 2 });
    }

    #[test]
    fn test_hrefs_round_trip() {
        let routes = vec![
            Route::Feed(FeedQuery::new()),
            Route::Feed(FeedQuery::at_page(4).with_search("his mother").with_sort(SortMode::MostLiked)),
            Route::tag("french"),
            Route::Post(3),
            Route::Profile(9),
            Route::Search { query: "a/b c".into(), page: 2 },
            Route::Login,
        ];
        for route in routes {
            let href = route.to_href();
            let (path, query) = href.split_once('?').unwrap_or((href.as_str(), ""));
            assert_eq!(Route::parse(path, query), route, "href {}", href);
        }
    }

    #[test]
    fn test_guard() {
        assert_eq!(Route::Post(1).guard(false), Route::Login);
        assert_eq!(Route::Post(1).guard(true), Route::Post(1));
        assert_eq!(Route::Login.guard(true), Route::Feed(FeedQuery::new()));
        assert_eq!(Route::Login.guard(false), Route::Login);
    }
}
