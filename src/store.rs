//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Each field is a
//! copy of what a feed-core composer last applied.

use feed_core::detail::DetailState;
use feed_core::feed::FeedState;
use feed_core::profile::ProfileState;
use feed_core::search::SearchState;
use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Feed list, page count and loading flag
    pub feed: FeedState,
    /// Tags offered as feed filters
    pub popular_tags: Vec<String>,
    pub popular_tags_loading: bool,
    pub detail: DetailState,
    pub profile: ProfileState,
    pub search: SearchState,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
