//! SocialSphere Frontend App
//!
//! Root component: provides context, applies the login gate and renders the
//! view for the current route.

use feed_core::Route;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::Navbar;
use crate::context::AppContext;
use crate::pages::{FeedView, LoginView, NotFoundView, PostView, ProfileView, SearchView};
use crate::services::Services;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(Services::init());
    provide_context(ctx);
    provide_context(Store::new(AppState::default()));

    let _ = window_event_listener(leptos::ev::popstate, move |_| ctx.sync_location());

    // Only the login view is reachable without a session
    let guarded = Memo::new(move |_| ctx.route.get().guard(ctx.authenticated.get()));
    Effect::new(move |_| {
        let target = guarded.get();
        if ctx.route.get_untracked() != target {
            web_sys::console::log_1(&format!("[APP] Redirecting to {}", target.to_href()).into());
            ctx.redirect(target);
        }
    });

    view! {
        <Show when=move || guarded.get() != Route::Login>
            <Navbar />
        </Show>
        <main class="container">
            {move || match guarded.get() {
                Route::Feed(query) => view! { <FeedView query=query /> }.into_any(),
                Route::Post(id) => view! { <PostView id=id /> }.into_any(),
                Route::Profile(id) => view! { <ProfileView id=id /> }.into_any(),
                Route::Search { query, page } => view! { <SearchView query=query page=page /> }.into_any(),
                Route::Login => view! { <LoginView /> }.into_any(),
                Route::NotFound => view! { <NotFoundView /> }.into_any(),
            }}
        </main>
    }
}
