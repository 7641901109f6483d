//! Previous/next page controls for paginated listings.

use leptos::prelude::*;

/// Pagination controls. Shows the current 1-based page and reports the
/// page the user asks for through `on_page`.
#[component]
pub fn Pager(#[prop(into)] page: Signal<u32>, on_page: Callback<u32>) -> impl IntoView {
    view! {
        <nav class="pager">
            <button
                class="pager__button"
                disabled=move || page.get() <= 1
                on:click=move |_| on_page.run(page.get().saturating_sub(1).max(1))
            >
                "Previous"
            </button>
            <span class="pager__current">{move || format!("Page {}", page.get())}</span>
            <button class="pager__button" on:click=move |_| on_page.run(page.get() + 1)>
                "Next"
            </button>
        </nav>
    }
}
