//! Search View
//!
//! Posts (paged) and matching users for one query, shown in two tabs.

use feed_core::search::SearchResults;
use feed_core::{Outcome, Route};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Avatar, Link, Pagination, PostCard, PostCardSkeleton};
use crate::context::use_app_context;
use crate::models::{AuthorView, PaginationView, PostCardView};
use crate::store::{use_app_store, AppStateStoreFields};

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Posts,
    Users,
}

#[component]
pub fn SearchView(query: String, page: u32) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let has_query = !query.trim().is_empty();

    let load_query = query.clone();
    Effect::new(move |_| {
        let services = ctx.services();
        let query = load_query.clone();
        store.search().write().loading = has_query;
        spawn_local(async move {
            if services.search.search(&query, page).await == Outcome::Applied {
                *store.search().write() = services.search.state();
            }
        });
    });

    let (search_text, set_search_text) = signal(query.clone());
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let text = search_text.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        ctx.navigate(Route::Search { query: text, page: 1 });
    };

    let (tab, set_tab) = signal(Tab::Posts);

    let page_query = query.clone();
    let on_page = Callback::new(move |page: u32| {
        ctx.navigate(Route::Search { query: page_query.clone(), page });
    });

    let results = move || {
        let state = store.search().get();
        if state.loading {
            return view! { <PostCardSkeleton count=3 /> }.into_any();
        }
        match tab.get() {
            Tab::Posts => render_posts(state.results, on_page).into_any(),
            Tab::Users => render_users(state.results).into_any(),
        }
    };

    let tab_class = move |t: Tab| if tab.get() == t { "tab active" } else { "tab" };

    view! {
        <div class="search">
            <h1>"Search"</h1>
            <form class="search-box" on:submit=on_submit>
                <input
                    type="search"
                    placeholder="Search for posts, users, or tags..."
                    prop:value=search_text
                    on:input=move |ev| set_search_text.set(event_target_value(&ev))
                />
                <button type="submit">"Search"</button>
            </form>
            <Show when=move || has_query>
                <div class="tabs">
                    <button class=move || tab_class(Tab::Posts) on:click=move |_| set_tab.set(Tab::Posts)>"Posts"</button>
                    <button class=move || tab_class(Tab::Users) on:click=move |_| set_tab.set(Tab::Users)>"Users"</button>
                </div>
                {results}
            </Show>
        </div>
    }
}

fn render_posts(results: SearchResults, on_page: Callback<u32>) -> impl IntoView {
    if results.posts.is_empty() {
        return view! {
            <div class="empty-state">
                <h3>"No posts found"</h3>
                <p>{format!("No posts matching \"{}\" were found", results.query)}</p>
            </div>
        }
        .into_any();
    }

    let pages = PaginationView::new(results.page, results.page_count);
    view! {
        <div class="post-list">
            {results
                .posts
                .iter()
                .map(|post| view! { <PostCard card=PostCardView::from_post(post) /> })
                .collect_view()}
            <Pagination view_model=pages on_select=on_page />
        </div>
    }
    .into_any()
}

fn render_users(results: SearchResults) -> impl IntoView {
    if results.authors.is_empty() {
        return view! {
            <div class="empty-state">
                <h3>"No users found"</h3>
                <p>{format!("No users matching \"{}\" were found", results.query)}</p>
            </div>
        }
        .into_any();
    }

    results
        .authors
        .iter()
        .map(AuthorView::from_author)
        .map(|author| {
            view! {
                <div class="user-card">
                    <Avatar src=Some(author.avatar.clone()) initials=author.initials.clone() />
                    <div>
                        <Link route=Route::Profile(author.id) class="author-name">{author.full_name.clone()}</Link>
                        <span class="author-handle">{author.handle.clone()}</span>
                        {author.email.clone().map(|email| view! { <p class="author-email">{email}</p> })}
                    </div>
                </div>
            }
        })
        .collect_view()
        .into_any()
}
