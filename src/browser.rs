//! Browser Capabilities
//!
//! Local storage for the session token and timer-based sleeping, injected
//! into the feed-core session gate.

use std::time::Duration;

use async_trait::async_trait;
use feed_core::session::{Sleeper, TokenStore};
use web_sys::Storage;

pub struct LocalStorageTokenStore {
    key: String,
}

impl LocalStorageTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn token(&self) -> Option<String> {
        self.storage()
            .and_then(|s| s.get_item(&self.key).ok().flatten())
    }

    fn store_token(&self, token: &str) {
        match self.storage() {
            Some(storage) => {
                if storage.set_item(&self.key, token).is_err() {
                    log::warn!("[session] could not persist token");
                }
            }
            None => log::warn!("[session] local storage unavailable"),
        }
    }

    fn clear_token(&self) {
        if let Some(storage) = self.storage() {
            if storage.remove_item(&self.key).is_err() {
                log::warn!("[session] could not clear token");
            }
        }
    }
}

/// Sleeps on the browser event loop
pub struct GlooSleeper;

#[async_trait(?Send)]
impl Sleeper for GlooSleeper {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

/// Current path and query string of the page
pub fn current_location() -> (String, String) {
    web_sys::window()
        .map(|w| w.location())
        .map(|l| (l.pathname().unwrap_or_default(), l.search().unwrap_or_default()))
        .unwrap_or_default()
}

/// Push (or replace) a history entry without reloading
pub fn set_location(href: &str, replace: bool) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let result = if replace {
        history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(href))
    } else {
        history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(href))
    };
    if result.is_err() {
        log::warn!("[router] could not update location to {}", href);
    }
}
