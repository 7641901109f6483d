//! Button that starts the Google sign-in redirect flow.

use leptos::prelude::*;

use crate::session::SessionStore;
use crate::util::oauth;

/// Sends the page to Google's consent screen. The round trip resumes on
/// the callback page, which finishes the token exchange.
#[component]
pub fn GoogleLoginButton(#[prop(into)] label: String) -> impl IntoView {
    let session = expect_context::<SessionStore>();

    view! {
        <button
            type="button"
            class="google-login"
            on:click=move |_| oauth::start_google_login(&session)
        >
            <span class="google-login__mark" aria-hidden="true">"G"</span>
            <span class="google-login__label">{label}</span>
        </button>
    }
}
