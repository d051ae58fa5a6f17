//! Fallback for unknown paths

use feed_core::feed::FeedQuery;
use feed_core::Route;
use leptos::prelude::*;

use crate::components::Link;

#[component]
pub fn NotFoundView() -> impl IntoView {
    view! {
        <div class="empty-state">
            <h1>"Page not found"</h1>
            <Link route=Route::Feed(FeedQuery::new())>"Back to Feed"</Link>
        </div>
    }
}
