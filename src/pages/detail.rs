//! Detail view for a single movie.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::navbar::Navbar;
use crate::net::error::ApiError;
use crate::net::types::MovieDetail;

/// Full detail document for the movie in the `id` route param.
#[component]
pub fn DetailPage() -> impl IntoView {
    let params = use_params_map();
    let movie = LocalResource::new(move || {
        let id = params.read().get("id").and_then(|raw| raw.parse::<i64>().ok());
        async move {
            match id {
                Some(id) => crate::net::api::fetch_movie(id).await,
                // Route param was not a number; same rendering as a fetch miss.
                None => Err(ApiError::Decode),
            }
        }
    });

    view! {
        <Title text="Movie | ICLIX"/>
        <Navbar/>
        <div class="detail-page">
            <Suspense fallback=move || view! { <p class="detail-page__hint">"Loading..."</p> }>
                {move || {
                    movie
                        .get()
                        .map(|result| match result {
                            Ok(movie) => movie_view(movie).into_any(),
                            Err(_) => {
                                view! {
                                    <p class="detail-page__hint detail-page__hint--error">
                                        "Could not load this movie."
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

fn movie_view(detail: MovieDetail) -> impl IntoView {
    let backdrop = detail.movie.backdrop_url();
    let poster = detail.movie.poster_url();
    let year = detail.movie.release_year().map(str::to_owned);
    let rating = detail.movie.rating_label();
    let genres = detail.genre_label();
    let runtime = detail.runtime_label();
    let alt = detail.movie.title.clone();
    let title = detail.movie.title;
    let overview = detail
        .movie
        .overview
        .unwrap_or_else(|| "No overview available.".to_owned());

    view! {
        <article class="detail">
            {backdrop.map(|src| view! { <img class="detail__backdrop" src=src alt=""/> })}
            <div class="detail__body">
                {match poster {
                    Some(src) => {
                        view! { <img class="detail__poster" src=src alt=alt/> }.into_any()
                    }
                    None => {
                        view! { <div class="detail__poster detail__poster--empty">"No poster"</div> }
                            .into_any()
                    }
                }}
                <div class="detail__info">
                    <h1 class="detail__title">{title}</h1>
                    <p class="detail__facts">
                        {year.map(|year| view! { <span class="detail__year">{year}</span> })}
                        {runtime.map(|runtime| view! { <span class="detail__runtime">{runtime}</span> })}
                        {rating
                            .map(|rating| {
                                view! { <span class="detail__rating">{rating}" / 10"</span> }
                            })}
                    </p>
                    {genres.map(|genres| view! { <p class="detail__genres">{genres}</p> })}
                    <p class="detail__overview">{overview}</p>
                </div>
            </div>
        </article>
    }
}
