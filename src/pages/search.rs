//! Title search results for the `q` query parameter.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_query_map;

use crate::components::movie_grid::MovieGrid;
use crate::components::navbar::Navbar;
use crate::components::pager::Pager;

/// Page for the next fetch. A change of term supersedes whatever page
/// the user had reached and restarts from the first.
fn page_for_term(shown_term: &mut Option<String>, term: &str, requested: u32) -> u32 {
    if shown_term.as_deref() == Some(term) {
        requested
    } else {
        *shown_term = Some(term.to_owned());
        1
    }
}

/// Search results page. The navbar's search box navigates here; the term
/// lives in the URL so results survive a reload.
#[component]
pub fn SearchPage() -> impl IntoView {
    let query = use_query_map();
    let requested_page = RwSignal::new(1_u32);
    let shown_term = StoredValue::new(None::<String>);

    // The fetch page derives from the term in one reactive step: a new
    // term restarts at page 1, paging within the same term is honored.
    let page = Memo::new(move |_| {
        let term = query.read().get("q").unwrap_or_default();
        let requested = requested_page.get();
        let mut shown = shown_term.get_value();
        let page = page_for_term(&mut shown, &term, requested);
        shown_term.set_value(shown);
        page
    });

    let results = LocalResource::new(move || {
        let term = query.read().get("q").unwrap_or_default();
        let page = page.get();
        async move {
            if term.trim().is_empty() {
                return Ok(Vec::new());
            }
            crate::net::api::search_movies(&term, page).await
        }
    });

    view! {
        <Title text="Search | ICLIX"/>
        <Navbar/>
        <div class="search-page">
            <h1 class="search-page__title">
                {move || {
                    let term = query.read().get("q").unwrap_or_default();
                    if term.is_empty() {
                        "Search".to_owned()
                    } else {
                        format!("Results for \"{term}\"")
                    }
                }}
            </h1>
            <Suspense fallback=move || view! { <p class="search-page__hint">"Searching..."</p> }>
                {move || {
                    results
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                let empty_term =
                                    query.read().get("q").unwrap_or_default().trim().is_empty();
                                if empty_term {
                                    view! {
                                        <p class="search-page__hint">
                                            "Type a title into the search box above."
                                        </p>
                                    }
                                        .into_any()
                                } else if list.is_empty() {
                                    view! {
                                        <p class="search-page__hint">"No movies matched."</p>
                                    }
                                        .into_any()
                                } else {
                                    view! { <MovieGrid movies=list/> }.into_any()
                                }
                            }
                            Err(_) => {
                                view! {
                                    <p class="search-page__hint search-page__hint--error">
                                        "Search failed. Try again in a moment."
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
            <Pager page=page on_page=Callback::new(move |next| requested_page.set(next))/>
        </div>
    }
}
