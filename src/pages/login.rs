//! Email/password login form, with Google sign-in as the alternative.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::google_login::GoogleLoginButton;
use crate::net::types::LoginRequest;
use crate::session::SessionStore;
use crate::state::auth::AuthState;
use crate::state::login::{LOGIN_REDIRECT_TARGET, LoginForm, LoginOutcome};
use crate::util::redirect::{REDIRECT_DELAY_MS, ScheduledRedirect};

fn field_class(base: &str, error: bool) -> String {
    if error { format!("{base} {base}--error") } else { base.to_owned() }
}

/// Login form. On success the welcome banner shows while a short
/// redirect home is pending; leaving the page cancels the redirect.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let form = RwSignal::new(LoginForm::default());
    let redirecting = RwSignal::new(false);
    let redirect = StoredValue::new_local(None::<ScheduledRedirect>);

    // A pending redirect dies with the page.
    on_cleanup(move || redirect.set_value(None));

    // Armed by a successful submission. The banner stays up while the
    // timer runs.
    Effect::new(move || {
        if !redirecting.get() {
            return;
        }
        let navigate = navigate.clone();
        redirect.set_value(Some(ScheduledRedirect::after(REDIRECT_DELAY_MS, move || {
            navigate(LOGIN_REDIRECT_TARGET, NavigateOptions::default());
        })));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !form.try_update(LoginForm::begin_submit).unwrap_or(false) {
            return;
        }
        // A new attempt drops any redirect an earlier success scheduled.
        redirect.set_value(None);
        redirecting.set(false);
        let request = form.with_untracked(|f| LoginRequest {
            email: f.email.clone(),
            password: f.password.clone(),
        });
        let session = session.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::login(&request).await;
            let outcome = form
                .try_update(|f| f.apply_result(&result, &session))
                .unwrap_or(LoginOutcome::Stay);
            if outcome == LoginOutcome::RedirectHome {
                if let Ok(success) = result {
                    auth.update(move |state| state.resolve(Some(success.user)));
                }
                redirecting.set(true);
            }
        });
    };

    view! {
        <Title text="Login | ICLIX"/>
        <div class="auth-shell">
            <a class="auth-shell__brand" href="/">"ICLIX"</a>
            <div class="auth-card">
                <strong class="auth-card__heading">"Login"</strong>
                <form class="auth-card__form" on:submit=on_submit>
                    <input
                        class=move || field_class("auth-card__input", form.with(|f| f.email_error))
                        type="text"
                        placeholder="Email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.set_email(event_target_value(&ev)))
                    />
                    <div class="auth-card__password">
                        <input
                            class=move || {
                                field_class("auth-card__input", form.with(|f| f.password_error))
                            }
                            type=move || {
                                if form.with(|f| f.show_password) { "text" } else { "password" }
                            }
                            placeholder="Password"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| {
                                form.update(|f| f.set_password(event_target_value(&ev)))
                            }
                        />
                        <button
                            type="button"
                            class="auth-card__toggle"
                            on:click=move |_| form.update(LoginForm::toggle_show_password)
                        >
                            {move || if form.with(|f| f.show_password) { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    <button
                        class="auth-card__submit"
                        type="submit"
                        disabled=move || form.with(|f| f.pending)
                    >
                        "Submit"
                    </button>
                </form>
                <GoogleLoginButton label="Login With Google"/>
                <Show when=move || form.with(|f| f.error.is_some())>
                    <p class="auth-card__error">
                        {move || form.with(|f| f.error.clone().unwrap_or_default())}
                    </p>
                </Show>
                <Show when=move || form.with(|f| f.welcome.is_some())>
                    <p class="auth-card__welcome">
                        {move || form.with(|f| f.welcome.clone().unwrap_or_default())}
                    </p>
                </Show>
                <div class="auth-card__footer">
                    <span>"New to Iclix?"</span>
                    <a class="auth-card__switch" href="/Register">"Register now."</a>
                </div>
            </div>
        </div>
    }
}
