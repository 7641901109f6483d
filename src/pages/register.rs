//! Account registration form.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::RegisterRequest;
use crate::session::SessionStore;
use crate::state::register::{
    CREATED, REGISTER_REDIRECT_TARGET, RegisterForm, RegisterOutcome, SubmitGate,
};
use crate::util::redirect::{REDIRECT_DELAY_MS, ScheduledRedirect};

fn field_class(base: &str, error: bool) -> String {
    if error { format!("{base} {base}--error") } else { base.to_owned() }
}

/// Registration form. A created account shows its banner briefly, then
/// moves on to the login page to sign in.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let form = RwSignal::new(RegisterForm::default());
    let redirecting = RwSignal::new(false);
    let redirect = StoredValue::new_local(None::<ScheduledRedirect>);

    // A pending redirect dies with the page.
    on_cleanup(move || redirect.set_value(None));

    // Armed by a created account. The success banner stays up while the
    // timer runs toward the login page.
    Effect::new(move || {
        if !redirecting.get() {
            return;
        }
        let navigate = navigate.clone();
        redirect.set_value(Some(ScheduledRedirect::after(REDIRECT_DELAY_MS, move || {
            navigate(REGISTER_REDIRECT_TARGET, NavigateOptions::default());
        })));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let gate = form
            .try_update(RegisterForm::begin_submit)
            .unwrap_or(SubmitGate::Busy);
        if gate != SubmitGate::Proceed {
            return;
        }
        // A new attempt drops any redirect an earlier success scheduled.
        redirect.set_value(None);
        redirecting.set(false);
        let request = form.with_untracked(|f| RegisterRequest {
            email: f.email.clone(),
            name: f.username.clone(),
            password: f.password.clone(),
        });
        let session = session.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::register(&request).await;
            if let Ok(resp) = &result {
                if resp.status != CREATED {
                    leptos::logging::warn!("register: ignoring unexpected status {}", resp.status);
                }
            }
            let outcome = form
                .try_update(|f| f.apply_result(&result, &session))
                .unwrap_or(RegisterOutcome::Stay);
            if outcome == RegisterOutcome::RedirectLogin {
                redirecting.set(true);
            }
        });
    };

    view! {
        <Title text="Register | ICLIX"/>
        <div class="auth-shell">
            <a class="auth-shell__brand" href="/">"ICLIX"</a>
            <div class="auth-card">
                <strong class="auth-card__heading">"Register"</strong>
                <form class="auth-card__form" on:submit=on_submit>
                    <input
                        class=move || {
                            field_class("auth-card__input", form.with(|f| f.username_error))
                        }
                        type="text"
                        placeholder="Username"
                        prop:value=move || form.with(|f| f.username.clone())
                        on:input=move |ev| form.update(|f| f.set_username(event_target_value(&ev)))
                    />
                    <input
                        class=move || field_class("auth-card__input", form.with(|f| f.email_error))
                        type="text"
                        placeholder="Email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.set_email(event_target_value(&ev)))
                    />
                    <input
                        class=move || {
                            field_class("auth-card__input", form.with(|f| f.password_error))
                        }
                        type="password"
                        placeholder="Password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.set_password(event_target_value(&ev)))
                    />
                    <button
                        class="auth-card__submit"
                        type="submit"
                        disabled=move || form.with(|f| f.pending)
                    >
                        "Submit"
                    </button>
                </form>
                <Show when=move || form.with(|f| f.error.is_some())>
                    <p class="auth-card__error">
                        {move || form.with(|f| f.error.clone().unwrap_or_default())}
                    </p>
                </Show>
                <Show when=move || form.with(|f| f.success)>
                    <p class="auth-card__welcome">"Registration successful!"</p>
                </Show>
                <div class="auth-card__footer">
                    <span>"Already have an account?"</span>
                    <a class="auth-card__switch" href="/Login">"Login here."</a>
                </div>
            </div>
        </div>
    }
}
