//! Post Filter Component
//!
//! Sort selector and the popular-tag badges of the feed sidebar.

use feed_core::feed::{FeedQuery, SortMode};
use feed_core::tags::fetch_popular_tags;
use feed_core::Route;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

const SORT_MODES: [SortMode; 2] = [SortMode::Default, SortMode::MostLiked];

#[component]
pub fn PostFilter(query: FeedQuery) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    // Tags are sampled once per session
    Effect::new(move |_| {
        if !store.popular_tags().read_untracked().is_empty() {
            return;
        }
        *store.popular_tags_loading().write() = true;
        spawn_local(async move {
            let services = ctx.services();
            let tags = fetch_popular_tags(&services.content, &services.config).await;
            web_sys::console::log_1(&format!("[PostFilter] Loaded {} popular tags", tags.len()).into());
            *store.popular_tags().write() = tags;
            *store.popular_tags_loading().write() = false;
        });
    });

    let current_sort = query.sort();
    let selected_tag = query.tag().map(str::to_string);

    let sort_query = query.clone();
    let on_sort = move |ev| {
        let sort = event_target_value(&ev).parse::<SortMode>().unwrap_or_default();
        ctx.navigate(Route::Feed(sort_query.clone().with_sort(sort)));
    };

    let tag_query = query;
    let tag_list = move || {
        let clear = selected_tag.is_some().then(|| {
            let target = tag_query.clone().select_tag(None);
            view! {
                <button class="badge badge-clear" on:click=move |_| ctx.navigate(Route::Feed(target.clone()))>
                    "Clear Filter"
                </button>
            }
        });
        let badges = store
            .popular_tags()
            .get()
            .into_iter()
            .map(|tag| {
                let active = selected_tag.as_deref() == Some(tag.as_str());
                let class = if active { "badge badge-active" } else { "badge" };
                let label = format!("#{}", tag);
                let target = tag_query.clone().select_tag(Some(tag));
                view! {
                    <button class=class on:click=move |_| ctx.navigate(Route::Feed(target.clone()))>
                        {label}
                    </button>
                }
            })
            .collect_view();
        view! { <div class="tag-list">{clear}{badges}</div> }
    };

    view! {
        <section class="post-filter">
            <h3>"Sort By"</h3>
            <select on:change=on_sort>
                {SORT_MODES
                    .iter()
                    .map(|mode| {
                        view! {
                            <option value=mode.as_str() selected=*mode == current_sort>
                                {mode.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>

            <h3>"Popular Tags"</h3>
            <Show
                when=move || !store.popular_tags_loading().get()
                fallback=|| view! { <div class="skeleton tag-skeleton"></div> }
            >
                {tag_list.clone()}
            </Show>
        </section>
    }
}
