//! Login page: email/password form feeding the session container.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::types::LoginRequest;
use crate::state::session;
use crate::state::session::SessionState;

/// Login page. The submit button is disabled while a request is pending,
/// so the UI never issues overlapping login attempts; failures from the
/// backend are rendered inline.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }

        let credentials = LoginRequest {
            email: email.get().trim().to_owned(),
            password: password.get(),
        };
        if credentials.email.is_empty() || credentials.password.is_empty() {
            error.set(Some("Email and password are required.".to_owned()));
            return;
        }

        error.set(None);
        pending.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session::login(session, &credentials).await {
                Ok(()) => {
                    pending.set(false);
                    navigate("/users", NavigateOptions::default());
                }
                Err(err) => {
                    pending.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-page__card" on:submit=on_submit>
                <h1>"Sign in"</h1>

                <label class="auth-page__label">
                    "Email"
                    <input
                        class="auth-page__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>

                <label class="auth-page__label">
                    "Password"
                    <input
                        class="auth-page__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>

                <Show when=move || error.get().is_some()>
                    <p class="auth-page__error" role="alert">
                        {move || error.get().unwrap_or_default()}
                    </p>
                </Show>

                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>

                <p class="auth-page__switch">
                    "No account yet? " <A href="/register">"Register"</A>
                </p>
            </form>
        </div>
    }
}
