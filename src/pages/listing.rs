//! Full paginated view of one curated listing.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::movie_grid::MovieGrid;
use crate::components::navbar::Navbar;
use crate::components::pager::Pager;
use crate::net::types::MovieCategory;

/// One category, one page at a time.
#[component]
pub fn ListingPage(category: MovieCategory) -> impl IntoView {
    let page = RwSignal::new(1_u32);
    let movies = LocalResource::new(move || crate::net::api::fetch_category(category, page.get()));

    view! {
        <Title text=format!("{} | ICLIX", category.display_title())/>
        <Navbar/>
        <div class="listing-page">
            <h1 class="listing-page__title">{category.display_title()}</h1>
            <Suspense fallback=move || view! { <p class="listing-page__hint">"Loading..."</p> }>
                {move || {
                    movies
                        .get()
                        .map(|result| match result {
                            Ok(list) => view! { <MovieGrid movies=list/> }.into_any(),
                            Err(_) => {
                                view! {
                                    <p class="listing-page__hint listing-page__hint--error">
                                        "Could not load this listing. Try again in a moment."
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
            <Pager page=page on_page=Callback::new(move |next| page.set(next))/>
        </div>
    }
}
