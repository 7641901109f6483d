//! Profile page backed by `GET /auth/me`, with sign-out.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::net::types::User;
use crate::session::{LOGIN_METHOD_GOOGLE, SessionStore};
use crate::state::auth::AuthState;

/// Shows the signed-in account, or a sign-in prompt. Logging out drops
/// the token and the login-method marker, then lands on the login page.
#[component]
pub fn AuthMePage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let profile_session = session.clone();
    let profile = LocalResource::new(move || {
        let token = profile_session.token();
        async move {
            match token {
                Some(token) => crate::net::api::fetch_profile(&token).await.map(Some),
                None => Ok(None),
            }
        }
    });

    // Read client-side only, so the server render matches the first
    // client render.
    let via_google = RwSignal::new(false);
    {
        let session = session.clone();
        Effect::new(move || {
            via_google.set(session.login_method().as_deref() == Some(LOGIN_METHOD_GOOGLE));
        });
    }

    // Leaves for the login page once the session has been dropped.
    let logged_out = RwSignal::new(false);
    Effect::new(move || {
        if logged_out.get() {
            navigate("/Login", NavigateOptions::default());
        }
    });

    let on_logout = Callback::new(move |()| {
        session.clear_session();
        auth.update(AuthState::clear);
        logged_out.set(true);
    });

    view! {
        <Title text="My Account | ICLIX"/>
        <Navbar/>
        <div class="auth-me">
            <h1 class="auth-me__title">"My Account"</h1>
            <Suspense fallback=move || {
                view! { <p class="auth-me__hint">"Loading your profile..."</p> }
            }>
                {move || {
                    profile
                        .get()
                        .map(|result| match result {
                            Ok(Some(user)) => profile_view(user, via_google, on_logout).into_any(),
                            Ok(None) => {
                                view! {
                                    <div class="auth-me__signed-out">
                                        <p>"You are not signed in."</p>
                                        <a class="auth-me__login-link" href="/Login">"Go to login"</a>
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(_) => {
                                view! {
                                    <div class="auth-me__signed-out">
                                        <p>
                                            "Could not load your profile. Your session may have expired."
                                        </p>
                                        <a class="auth-me__login-link" href="/Login">"Sign in again"</a>
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

fn profile_view(user: User, via_google: RwSignal<bool>, on_logout: Callback<()>) -> impl IntoView {
    let name = user.name.unwrap_or_else(|| "(no name)".to_owned());
    let email = user.email.unwrap_or_else(|| "(no email)".to_owned());
    let id = user.id.map(|id| id.to_string());

    view! {
        <div class="auth-me__card">
            <dl class="auth-me__fields">
                <dt>"Name"</dt>
                <dd>{name}</dd>
                <dt>"Email"</dt>
                <dd>{email}</dd>
                {id.map(|id| {
                    view! {
                        <dt>"Account ID"</dt>
                        <dd>{id}</dd>
                    }
                })}
            </dl>
            <Show when=move || via_google.get()>
                <p class="auth-me__via">"Signed in with Google"</p>
            </Show>
            <button class="auth-me__logout" on:click=move |_| on_logout.run(())>
                "Log out"
            </button>
        </div>
    }
}
