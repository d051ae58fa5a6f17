//! Navbar Component
//!
//! Top bar with feed and search links plus logout.

use feed_core::feed::FeedQuery;
use feed_core::Route;
use leptos::prelude::*;

use crate::components::Link;
use crate::context::use_app_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();

    let logout = move |_| {
        ctx.services().session.logout();
        ctx.refresh_session();
        ctx.navigate(Route::Login);
    };

    view! {
        <header class="navbar">
            <Link route=Route::Feed(FeedQuery::new()) class="navbar-brand">"SocialSphere"</Link>
            <nav class="navbar-links">
                <Link route=Route::Feed(FeedQuery::new())>"Home"</Link>
                <Link route=Route::Search { query: String::new(), page: 1 }>"Search"</Link>
                <button class="navbar-logout" on:click=logout>"Log out"</button>
            </nav>
        </header>
    }
}
