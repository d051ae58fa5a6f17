//! Post Detail View
//!
//! Post, author card and the comment thread with resolved commenter names.

use feed_core::detail::{DetailState, PostDetail};
use feed_core::feed::FeedQuery;
use feed_core::{Outcome, Route};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Avatar, Link};
use crate::context::use_app_context;
use crate::models::{AuthorView, CommentView};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn PostView(id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    Effect::new(move |_| {
        let services = ctx.services();
        *store.detail().write() = DetailState::Loading;
        spawn_local(async move {
            if services.detail.load(id).await == Outcome::Applied {
                *store.detail().write() = services.detail.state();
            }
        });
    });

    view! {
        <div class="post-detail">
            <Link route=Route::Feed(FeedQuery::new()) class="back-link">"Back to Feed"</Link>
            {move || match store.detail().get() {
                DetailState::Loading => view! { <div class="skeleton skeleton-post"></div> }.into_any(),
                DetailState::NotFound => view! {
                    <div class="empty-state">
                        <h1>"Post not found"</h1>
                        <p>"The post you're looking for doesn't exist or has been removed."</p>
                        <Link route=Route::Feed(FeedQuery::new())>"Back to Dashboard"</Link>
                    </div>
                }
                .into_any(),
                DetailState::Ready(detail) => render_detail(*detail).into_any(),
            }}
        </div>
    }
}

fn render_detail(detail: PostDetail) -> impl IntoView {
    let author = AuthorView::from_author(&detail.author);
    let post = detail.post;
    let comments: Vec<CommentView> = detail
        .comments
        .iter()
        .map(|c| CommentView::from_comment(c, &detail.commenters))
        .collect();

    let views = post.views.map(|v| format!("{} views", v));
    let heading = format!("Comments ({})", comments.len());

    view! {
        <article class="post-card post-full">
            <Link route=Route::Profile(author.id) class="post-card-author">
                <Avatar src=Some(author.avatar.clone()) initials=author.initials.clone() />
                <span class="author-name">{author.full_name.clone()}</span>
                <span class="author-handle">{author.handle.clone()}</span>
            </Link>
            <h1>{post.title.clone()}</h1>
            <p class="post-body">{post.body.clone()}</p>
            <div class="post-card-tags">
                {post
                    .tags
                    .iter()
                    .map(|tag| {
                        let label = format!("#{}", tag);
                        view! { <Link route=Route::tag(tag) class="badge">{label}</Link> }
                    })
                    .collect_view()}
            </div>
            <footer class="post-card-footer">
                <span>{format!("{} likes", post.reactions.likes)}</span>
                <span>{format!("{} dislikes", post.reactions.dislikes)}</span>
                {views.map(|v| view! { <span>{v}</span> })}
            </footer>
        </article>

        <section class="comments">
            <h2>{heading}</h2>
            {if comments.is_empty() {
                view! { <p class="empty-state">"No comments yet."</p> }.into_any()
            } else {
                comments
                    .into_iter()
                    .map(|comment| {
                        let name = comment.display_name.clone();
                        view! {
                            <div class="comment">
                                <Avatar src=comment.avatar.clone() initials=comment.initials.clone() />
                                <div class="comment-content">
                                    <Link route=Route::Profile(comment.author_id) class="author-name">
                                        {name}
                                    </Link>
                                    <span class="author-handle">{comment.handle.clone()}</span>
                                    <p>{comment.body.clone()}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </section>
    }
}
