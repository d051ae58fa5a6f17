//! Profile View

use feed_core::feed::FeedQuery;
use feed_core::profile::{ProfileDetail, ProfileState};
use feed_core::{Outcome, Route};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Avatar, Link, PostCard};
use crate::context::use_app_context;
use crate::models::{AuthorView, PostCardView};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ProfileView(id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    Effect::new(move |_| {
        let services = ctx.services();
        *store.profile().write() = ProfileState::Loading;
        spawn_local(async move {
            if services.profile.load(id).await == Outcome::Applied {
                *store.profile().write() = services.profile.state();
            }
        });
    });

    view! {
        <div class="profile">
            {move || match store.profile().get() {
                ProfileState::Loading => view! { <div class="skeleton skeleton-profile"></div> }.into_any(),
                ProfileState::NotFound => view! {
                    <div class="empty-state">
                        <h1>"User not found"</h1>
                        <p>"The user you're looking for doesn't exist or has been removed."</p>
                        <Link route=Route::Feed(FeedQuery::new())>"Back to Dashboard"</Link>
                    </div>
                }
                .into_any(),
                ProfileState::Ready(profile) => render_profile(*profile).into_any(),
            }}
        </div>
    }
}

fn detail_row(label: &'static str, value: Option<String>) -> impl IntoView {
    value.map(|value| {
        view! {
            <div class="profile-row">
                <span class="profile-label">{label}</span>
                <span>{value}</span>
            </div>
        }
    })
}

fn render_profile(profile: ProfileDetail) -> impl IntoView {
    let author = AuthorView::from_author(&profile.author);
    let post_count = format!("Posts ({})", profile.posts.len());

    view! {
        <section class="profile-card">
            <Avatar src=Some(author.avatar.clone()) initials=author.initials.clone() />
            <h1>{author.full_name.clone()}</h1>
            <p class="author-handle">{author.handle.clone()}</p>
            {detail_row("Email", author.email.clone())}
            {detail_row("Phone", author.phone.clone())}
            {detail_row("Location", author.location.clone())}
            {detail_row("Work", author.occupation.clone())}
            {detail_row("Born", author.born.clone())}
        </section>

        <section class="profile-posts">
            <h2>{post_count}</h2>
            {if profile.posts.is_empty() {
                view! { <p class="empty-state">"This user hasn't posted anything yet."</p> }.into_any()
            } else {
                profile
                    .posts
                    .iter()
                    .map(|post| view! { <PostCard card=PostCardView::from_post(post) /> })
                    .collect_view()
                    .into_any()
            }}
        </section>
    }
}
