//! Feed View
//!
//! Paged post list with search box, sort selector and tag filter. Every
//! change of the query is a navigation, so this component only ever loads
//! the query it was created with.

use feed_core::feed::{fetch_page, FeedQuery};
use feed_core::{Outcome, Route};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Pagination, PostCard, PostCardSkeleton, PostFilter};
use crate::context::use_app_context;
use crate::models::{PaginationView, PostCardView};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FeedView(query: FeedQuery) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let load_query = query.clone();
    Effect::new(move |_| {
        let services = ctx.services();
        let ticket = services.feed.begin(load_query.clone());
        *store.feed().write() = services.feed.state();

        spawn_local(async move {
            let result = fetch_page(services.feed.service(), ticket.query()).await;
            if services.feed.finish(ticket, result) == Outcome::Applied {
                *store.feed().write() = services.feed.state();
            }
        });
    });

    let (search_text, set_search_text) = signal(query.search().unwrap_or_default().to_string());
    let search_query = query.clone();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let text = search_text.get_untracked();
        web_sys::console::log_1(&format!("[FeedView] Searching for {:?}", text).into());
        ctx.navigate(Route::Feed(search_query.clone().submit_search(text)));
    };

    let page_query = query.clone();
    let on_page = Callback::new(move |page: u32| {
        ctx.navigate(Route::Feed(page_query.clone().with_page(page)));
    });

    let current_page = query.page();
    let posts = move || {
        let feed = store.feed().get();
        if feed.loading {
            return view! { <PostCardSkeleton count=5 /> }.into_any();
        }
        if feed.posts.is_empty() {
            return view! {
                <div class="empty-state">
                    <h3>"No posts found"</h3>
                    <p>"Try adjusting your search or filter criteria"</p>
                </div>
            }
            .into_any();
        }

        let pages = PaginationView::new(current_page, feed.page_count.unwrap_or(0));
        view! {
            <div class="post-list">
                {feed
                    .posts
                    .iter()
                    .map(|post| view! { <PostCard card=PostCardView::from_post(post) /> })
                    .collect_view()}
                <Pagination view_model=pages on_select=on_page />
            </div>
        }
        .into_any()
    };

    view! {
        <div class="feed-layout">
            <aside class="feed-sidebar">
                <section class="search-box">
                    <h2>"Search Posts"</h2>
                    <form on:submit=on_submit>
                        <input
                            type="search"
                            placeholder="Search posts..."
                            prop:value=search_text
                            on:input=move |ev| set_search_text.set(event_target_value(&ev))
                        />
                    </form>
                </section>
                <PostFilter query=query />
            </aside>
            <section class="feed-main">
                <h1>"Feed"</h1>
                {posts}
            </section>
        </div>
    }
}
