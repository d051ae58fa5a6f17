//! In-app Link
//!
//! Anchor that navigates through the app context instead of reloading.

use feed_core::Route;
use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn Link(
    route: Route,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let ctx = use_app_context();
    let href = route.to_href();

    let on_click = move |ev: web_sys::MouseEvent| {
        // let modified clicks open new tabs
        if ev.ctrl_key() || ev.meta_key() || ev.shift_key() {
            return;
        }
        ev.prevent_default();
        ctx.navigate(route.clone());
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
