//! Top navigation: brand, listing links, title search, session status.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::SessionStore;
use crate::state::auth::AuthState;

/// Site-wide navigation bar. Shown on every browsing page; the auth
/// pages render without it.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let term = RwSignal::new(String::new());
    let signed_in = RwSignal::new(false);
    let requested_search = RwSignal::new(None::<String>);

    // The server always renders signed out; the stored session is only
    // reflected after hydration, and again whenever auth state changes.
    Effect::new(move || {
        signed_in.set(auth.read().user.is_some() || session.token().is_some());
    });

    // Submissions land here; navigation itself stays in the effect.
    Effect::new(move || {
        let Some(query) = requested_search.get() else {
            return;
        };
        requested_search.set(None);
        navigate(
            &format!("/src?q={}", urlencoding::encode(&query)),
            NavigateOptions::default(),
        );
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let query = term.get_untracked();
        let query = query.trim();
        if query.is_empty() {
            return;
        }
        requested_search.set(Some(query.to_owned()));
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"ICLIX"</a>
            <div class="navbar__links">
                <a class="navbar__link" href="/Popular">"Popular"</a>
                <a class="navbar__link" href="/TopRated">"Top Rated"</a>
                <a class="navbar__link" href="/UpComing">"Upcoming"</a>
                <a class="navbar__link" href="/NowPlaying">"Now Playing"</a>
            </div>
            <form class="navbar__search" on:submit=on_search>
                <input
                    class="navbar__search-input"
                    type="search"
                    placeholder="Search movies..."
                    prop:value=move || term.get()
                    on:input=move |ev| term.set(event_target_value(&ev))
                />
                <button class="navbar__search-button" type="submit">"Search"</button>
            </form>
            {move || {
                if signed_in.get() {
                    let label = auth
                        .read()
                        .display_name()
                        .unwrap_or_else(|| "Profile".to_owned());
                    view! {
                        <a class="navbar__link navbar__link--session" href="/Auth-me">{label}</a>
                    }
                        .into_any()
                } else {
                    view! {
                        <a class="navbar__link navbar__link--session" href="/Login">"Login"</a>
                    }
                        .into_any()
                }
            }}
        </nav>
    }
}
