//! Poster card linking to a movie's detail page.

use leptos::prelude::*;

use crate::net::types::Movie;

/// One movie as a clickable poster card.
#[component]
pub fn MovieCard(movie: Movie) -> impl IntoView {
    let href = format!("/DetailMovie/{}", movie.id);
    let poster = movie.poster_url();
    let rating = movie.rating_label();
    let alt = movie.title.clone();

    view! {
        <a class="movie-card" href=href>
            {match poster {
                Some(src) => {
                    view! { <img class="movie-card__poster" src=src alt=alt loading="lazy"/> }
                        .into_any()
                }
                None => {
                    view! { <div class="movie-card__poster movie-card__poster--empty">"No poster"</div> }
                        .into_any()
                }
            }}
            <div class="movie-card__meta">
                <span class="movie-card__title">{movie.title}</span>
                {rating.map(|label| view! { <span class="movie-card__rating">{label}</span> })}
            </div>
        </a>
    }
}
