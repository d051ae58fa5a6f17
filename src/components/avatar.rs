//! Avatar Component

use leptos::prelude::*;

/// Round avatar image with initials fallback
#[component]
pub fn Avatar(
    #[prop(into)] src: Option<String>,
    #[prop(into)] initials: String,
) -> impl IntoView {
    match src.filter(|s| !s.is_empty()) {
        Some(src) => view! { <img class="avatar" src=src alt=initials.clone() /> }.into_any(),
        None => view! { <span class="avatar avatar-fallback">{initials}</span> }.into_any(),
    }
}
