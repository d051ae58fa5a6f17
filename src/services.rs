//! Application Services
//!
//! One instance per page load: configuration, the HTTP content client and
//! the stale-safe composers that own each view's remote state.

use feed_core::detail::DetailLoader;
use feed_core::feed::FeedComposer;
use feed_core::profile::ProfileLoader;
use feed_core::search::SearchComposer;
use feed_core::session::SessionGate;
use feed_core::{FeedConfig, HttpContentService};

use crate::browser::LocalStorageTokenStore;

const CONFIG_JSON: &str = include_str!("../feed.config.json");

pub struct Services {
    pub config: FeedConfig,
    pub content: HttpContentService,
    pub session: SessionGate<LocalStorageTokenStore>,
    pub feed: FeedComposer<HttpContentService>,
    pub detail: DetailLoader<HttpContentService>,
    pub profile: ProfileLoader<HttpContentService>,
    pub search: SearchComposer<HttpContentService>,
}

impl Services {
    pub fn init() -> Self {
        let config = FeedConfig::from_json(CONFIG_JSON).unwrap_or_else(|e| {
            log::warn!("[config] {}, using defaults", e);
            FeedConfig::default()
        });
        let content = HttpContentService::from_config(&config);
        let session = SessionGate::restore(LocalStorageTokenStore::new(config.token_key.clone()), &config);

        Self {
            feed: FeedComposer::new(content.clone()),
            detail: DetailLoader::new(content.clone()),
            profile: ProfileLoader::new(content.clone()),
            search: SearchComposer::new(content.clone()),
            content,
            session,
            config,
        }
    }
}
