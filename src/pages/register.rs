//! Registration page: creates an account then hands off to login.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::types::NewUser;
use crate::util::form;

/// Registration page. Client-side validation mirrors the backend's
/// minimums; backend failures (duplicate email) are rendered verbatim.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }

        let validated = form::require(&name.get(), "Name").and_then(|name| {
            let email = form::validate_email(&email.get())?;
            let password = form::validate_password(&password.get())?;
            Ok(NewUser {
                name,
                email,
                password,
            })
        });
        let new_user = match validated {
            Ok(new_user) => new_user,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };

        error.set(None);
        pending.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::create_user(&new_user).await {
                Ok(_) => {
                    pending.set(false);
                    navigate("/login", NavigateOptions::default());
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
                <h1>"Create account"</h1>

                <label class="auth-page__label">
                    "Name"
                    <input
                        class="auth-page__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>

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
                    {move || if pending.get() { "Creating..." } else { "Create account" }}
                </button>

                <p class="auth-page__switch">
                    "Already registered? " <A href="/login">"Sign in"</A>
                </p>
            </form>
        </div>
    }
}
