//! Landing page for the Google redirect: validates the URL fragment,
//! exchanges the access token with the backend, and signs the session in.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::SessionStore;
use crate::state::auth::AuthState;
use crate::util::oauth;

/// Finishes the Google round trip. Unlike the form flows there is no
/// banner delay; a successful exchange navigates home at once. Failures
/// stay here and are shown with a way back to the login page.
#[component]
pub fn OauthCallbackPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let error = RwSignal::new(None::<String>);

    // Runs once on the client; the server renders the pending panel.
    Effect::new(move || {
        let params = oauth::current_callback_params();
        let stashed = session.take_oauth_nonce();
        match oauth::validate_callback(&params, stashed.as_deref()) {
            Ok(access_token) => {
                // Grant succeeded; record the method before the exchange.
                session.mark_google_login();
                let session = session.clone();
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::google_exchange(&access_token).await {
                        Ok(success) => {
                            session.set_token(&success.token);
                            auth.update(move |state| state.resolve(Some(success.user)));
                            navigate("/", NavigateOptions::default());
                        }
                        Err(err) => {
                            leptos::logging::warn!("oauth: token exchange failed: {err}");
                            error.set(Some(err.to_string()));
                        }
                    }
                });
            }
            Err(err) => {
                leptos::logging::warn!("oauth: callback rejected: {err}");
                error.set(Some(err.to_string()));
            }
        }
    });

    view! {
        <Title text="Signing in | ICLIX"/>
        <div class="oauth-callback">
            {move || match error.get() {
                Some(message) => {
                    view! {
                        <div class="oauth-callback__panel oauth-callback__panel--error">
                            <p class="oauth-callback__message">{message}</p>
                            <a class="oauth-callback__back" href="/Login">"Back to login"</a>
                        </div>
                    }
                        .into_any()
                }
                None => {
                    view! {
                        <div class="oauth-callback__panel">
                            <p class="oauth-callback__message">
                                "Completing sign-in with Google..."
                            </p>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
