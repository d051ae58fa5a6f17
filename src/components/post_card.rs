//! Post Card Component
//!
//! Feed card for one post. The author header loads on its own.

use feed_core::{ContentService, Route};
use leptos::prelude::*;

use crate::components::{Avatar, Link};
use crate::context::use_app_context;
use crate::models::{AuthorView, PostCardView};

#[component]
pub fn PostCard(card: PostCardView) -> impl IntoView {
    let ctx = use_app_context();
    let author_id = card.author_id;

    let author = LocalResource::new(move || {
        let services = ctx.services();
        async move {
            services
                .content
                .get_author(author_id)
                .await
                .map(|a| AuthorView::from_author(&a))
                .ok()
        }
    });

    let header = move || match author.get().flatten() {
        Some(profile) => view! {
            <Link route=Route::Profile(author_id) class="post-card-author">
                <Avatar src=Some(profile.avatar.clone()) initials=profile.initials.clone() />
                <span class="author-name">{profile.full_name.clone()}</span>
                <span class="author-handle">{profile.handle.clone()}</span>
            </Link>
        }
        .into_any(),
        None => view! { <div class="post-card-author skeleton"></div> }.into_any(),
    };

    let tags = card.tags.clone();

    view! {
        <article class="post-card">
            {header}
            <Link route=Route::Post(card.id)>
                <h3 class="post-card-title">{card.title.clone()}</h3>
            </Link>
            <p class="post-card-body">{card.excerpt.clone()}</p>
            <div class="post-card-tags">
                {tags
                    .into_iter()
                    .map(|tag| {
                        let label = format!("#{}", tag);
                        view! { <Link route=Route::tag(&tag) class="badge">{label}</Link> }
                    })
                    .collect_view()}
            </div>
            <footer class="post-card-footer">
                <span class="post-card-reactions">{card.reactions_label.clone()}</span>
                <Link route=Route::Post(card.id)>"Comments"</Link>
            </footer>
        </article>
    }
}

/// Placeholder cards shown while a list loads
#[component]
pub fn PostCardSkeleton(count: usize) -> impl IntoView {
    (0..count)
        .map(|_| {
            view! {
                <div class="post-card skeleton-card">
                    <div class="skeleton skeleton-avatar"></div>
                    <div class="skeleton skeleton-line"></div>
                    <div class="skeleton skeleton-line"></div>
                    <div class="skeleton skeleton-line short"></div>
                </div>
            }
        })
        .collect_view()
}
