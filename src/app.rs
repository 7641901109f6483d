//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::types::MovieCategory;
use crate::pages::{
    auth_me::AuthMePage, detail::DetailPage, home::HomePage, listing::ListingPage,
    login::LoginPage, oauth_callback::OauthCallbackPage, register::RegisterPage,
    search::SearchPage,
};
use crate::session::SessionStore;
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store and auth context, restores the signed-in
/// profile from the persisted token, and sets up client-side routing.
/// Route paths mirror the historical site, casing included.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::browser();
    provide_context(session.clone());
    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    // Restore the signed-in profile on load. A token that no longer
    // resolves just leaves the app signed out.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            if auth.read_untracked().user.is_some() {
                return;
            }
            let Some(token) = session.token() else {
                return;
            };
            auth.update(AuthState::begin_loading);
            leptos::task::spawn_local(async move {
                let user = crate::net::api::fetch_profile(&token).await.ok();
                auth.update(|state| state.resolve(user));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &session;
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/iclix.css"/>
        <Title text="ICLIX"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("Login") view=LoginPage/>
                <Route path=StaticSegment("Register") view=RegisterPage/>
                <Route path=StaticSegment("Auth-me") view=AuthMePage/>
                <Route path=StaticSegment("src") view=SearchPage/>
                <Route path=(StaticSegment("DetailMovie"), ParamSegment("id")) view=DetailPage/>
                <Route
                    path=StaticSegment("UpComing")
                    view=|| view! { <ListingPage category=MovieCategory::Upcoming/> }
                />
                <Route
                    path=StaticSegment("TopRated")
                    view=|| view! { <ListingPage category=MovieCategory::TopRated/> }
                />
                <Route
                    path=StaticSegment("NowPlaying")
                    view=|| view! { <ListingPage category=MovieCategory::NowPlaying/> }
                />
                <Route
                    path=StaticSegment("Popular")
                    view=|| view! { <ListingPage category=MovieCategory::Popular/> }
                />
                <Route
                    path=(StaticSegment("oauth"), StaticSegment("callback"))
                    view=OauthCallbackPage
                />
            </Routes>
        </Router>
    }
}
