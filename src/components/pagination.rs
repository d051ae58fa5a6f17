//! Pagination Component

use leptos::prelude::*;

use crate::models::PaginationView;

/// Prev / numbered / next strip. `on_select` receives the chosen page.
#[component]
pub fn Pagination(view_model: PaginationView, on_select: Callback<u32>) -> impl IntoView {
    let current = view_model.current;
    let has_prev = view_model.has_prev;
    let has_next = view_model.has_next;

    view! {
        <nav class="pagination">
            <Show when=move || has_prev>
                <button on:click=move |_| on_select.run(current - 1)>"Previous"</button>
            </Show>
            {view_model
                .pages
                .iter()
                .copied()
                .map(|page| {
                    let class = if page == current { "page-link active" } else { "page-link" };
                    view! { <button class=class on:click=move |_| on_select.run(page)>{page}</button> }
                })
                .collect_view()}
            <Show when=move || has_next>
                <button on:click=move |_| on_select.run(current + 1)>"Next"</button>
            </Show>
        </nav>
    }
}
