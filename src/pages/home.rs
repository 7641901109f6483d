//! Landing page: hero banner plus one row per curated listing.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::movie_row::MovieRow;
use crate::components::navbar::Navbar;
use crate::net::types::{Movie, MovieCategory};

/// Home page: the top popular movie as the hero, then all four category
/// rows. While the featured movie loads (and on SSR) a static banner
/// stands in.
#[component]
pub fn HomePage() -> impl IntoView {
    let featured = LocalResource::new(|| async {
        crate::net::api::fetch_category(MovieCategory::Popular, 1).await
    });

    view! {
        <Title text="ICLIX"/>
        <Navbar/>
        <div class="home-page">
            <Suspense fallback=static_hero>
                {move || {
                    featured
                        .get()
                        .map(|result| match result {
                            Ok(movies) => match movies.into_iter().next() {
                                Some(movie) => featured_hero(movie).into_any(),
                                None => static_hero().into_any(),
                            },
                            Err(_) => static_hero().into_any(),
                        })
                }}
            </Suspense>
            <MovieRow category=MovieCategory::Popular/>
            <MovieRow category=MovieCategory::TopRated/>
            <MovieRow category=MovieCategory::Upcoming/>
            <MovieRow category=MovieCategory::NowPlaying/>
        </div>
    }
}

fn featured_hero(movie: Movie) -> impl IntoView {
    let style = movie
        .backdrop_url()
        .map(|url| {
            format!(
                "background-image: linear-gradient(rgba(13, 13, 16, 0.55), \
                 rgba(13, 13, 16, 0.92)), url('{url}')"
            )
        })
        .unwrap_or_default();
    let detail_href = format!("/DetailMovie/{}", movie.id);
    let title = movie.title;
    let overview = movie.overview.unwrap_or_default();

    view! {
        <section class="hero hero--featured" style=style>
            <h1 class="hero__title">{title}</h1>
            <p class="hero__tagline">{overview}</p>
            <a class="hero__cta" href=detail_href>"See details"</a>
        </section>
    }
}

fn static_hero() -> impl IntoView {
    view! {
        <section class="hero">
            <h1 class="hero__title">"Movies worth your evening."</h1>
            <p class="hero__tagline">
                "Browse what's popular, what's coming, and what the critics rate highest."
            </p>
            <a class="hero__cta" href="/Popular">"Start browsing"</a>
        </section>
    }
}
