//! Responsive grid of movie cards for listing and search pages.

use leptos::prelude::*;

use crate::components::movie_card::MovieCard;
use crate::net::types::Movie;

/// A page of movies as a grid, or an empty hint.
#[component]
pub fn MovieGrid(movies: Vec<Movie>) -> impl IntoView {
    if movies.is_empty() {
        view! { <p class="movie-grid__empty">"Nothing here."</p> }.into_any()
    } else {
        view! {
            <div class="movie-grid">
                {movies
                    .into_iter()
                    .map(|movie| view! { <MovieCard movie=movie/> })
                    .collect::<Vec<_>>()}
            </div>
        }
            .into_any()
    }
}
