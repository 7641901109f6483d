//! Horizontal strip of one curated listing, as shown on the home page.

use leptos::prelude::*;

use crate::components::movie_card::MovieCard;
use crate::net::types::MovieCategory;

/// First page of a category as a scrollable strip with a link to the
/// full listing.
#[component]
pub fn MovieRow(category: MovieCategory) -> impl IntoView {
    let movies = LocalResource::new(move || crate::net::api::fetch_category(category, 1));

    view! {
        <section class="movie-row">
            <header class="movie-row__header">
                <h2 class="movie-row__title">{category.display_title()}</h2>
                <a class="movie-row__see-all" href=category.route()>"See all"</a>
            </header>
            <Suspense fallback=move || view! { <p class="movie-row__hint">"Loading..."</p> }>
                {move || {
                    movies
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <div class="movie-row__strip">
                                        {list
                                            .into_iter()
                                            .map(|movie| view! { <MovieCard movie=movie/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(_) => {
                                view! {
                                    <p class="movie-row__hint movie-row__hint--error">
                                        "Could not load this list."
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}
