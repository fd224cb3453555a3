//! Self-service profile page: edit name/email/password, deactivate account.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::net::api;
use crate::net::http::ApiError;
use crate::net::types::ProfileUpdate;
use crate::state::session;
use crate::state::session::SessionState;
use crate::util::form;

/// Ask the user to confirm account deactivation. Browser-only; native
/// builds refuse, which keeps the destructive path unreachable there.
fn confirm_deactivation() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().is_some_and(|window| {
            window
                .confirm_with_message(
                    "Are you sure you want to delete your account? This cannot be undone.",
                )
                .unwrap_or(false)
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Profile page. Loads the fresh profile by id (the session copy may be
/// stale), submits only the fields the user actually changed a value for,
/// and deactivation ends the session and returns to login.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let profile = LocalResource::new(move || {
        let id = session
            .get()
            .user
            .map(|user| user.id)
            .unwrap_or_default();
        async move {
            if id.is_empty() {
                return Err(ApiError::Network("no active session".to_owned()));
            }
            api::fetch_user(&id).await
        }
    });

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    // Seed the form whenever a fresh profile arrives.
    Effect::new(move || {
        if let Some(Ok(user)) = profile.get() {
            name.set(user.name);
            email.set(user.email);
            password.set(String::new());
        }
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }
        let Some(user_id) = session.get().user.map(|user| user.id) else {
            error.set(Some("No active session.".to_owned()));
            return;
        };

        let validated = form::require(&name.get(), "Name").and_then(|name| {
            let email = form::validate_email(&email.get())?;
            let password = form::validate_optional_password(&password.get())?;
            Ok(ProfileUpdate {
                name: Some(name),
                email: Some(email),
                password,
            })
        });
        let update = match validated {
            Ok(update) => update,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };

        error.set(None);
        notice.set(None);
        pending.set(true);
        leptos::task::spawn_local(async move {
            match api::update_profile(&user_id, &update).await {
                Ok(_) => {
                    notice.set(Some("Profile updated.".to_owned()));
                    password.set(String::new());
                    profile.refetch();
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            pending.set(false);
        });
    };

    let on_deactivate = {
        let navigate = navigate.clone();
        move |_| {
            if pending.get() {
                return;
            }
            let Some(user_id) = session.get().user.map(|user| user.id) else {
                return;
            };
            if !confirm_deactivation() {
                return;
            }
            pending.set(true);
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api::deactivate_account(&user_id).await {
                    Ok(()) => {
                        session::logout(session);
                        pending.set(false);
                        navigate(
                            "/login",
                            NavigateOptions {
                                replace: true,
                                ..NavigateOptions::default()
                            },
                        );
                    }
                    Err(err) => {
                        pending.set(false);
                        error.set(Some(err.to_string()));
                    }
                }
            });
        }
    };

    view! {
        <div class="profile-page">
            <NavBar/>

            <Suspense fallback=move || view! { <p>"Loading profile..."</p> }>
                {move || {
                    profile.get().map(|result| match result {
                        Ok(_) => view! {
                            <form class="profile-page__card" on:submit=on_save>
                                <h1>"Edit profile"</h1>

                                <label class="profile-page__label">
                                    "Name"
                                    <input
                                        class="profile-page__input"
                                        type="text"
                                        prop:value=move || name.get()
                                        on:input=move |ev| name.set(event_target_value(&ev))
                                    />
                                </label>

                                <label class="profile-page__label">
                                    "Email"
                                    <input
                                        class="profile-page__input"
                                        type="email"
                                        prop:value=move || email.get()
                                        on:input=move |ev| email.set(event_target_value(&ev))
                                    />
                                </label>

                                <label class="profile-page__label">
                                    "New password (optional)"
                                    <input
                                        class="profile-page__input"
                                        type="password"
                                        prop:value=move || password.get()
                                        on:input=move |ev| password.set(event_target_value(&ev))
                                    />
                                </label>

                                <Show when=move || error.get().is_some()>
                                    <p class="profile-page__error" role="alert">
                                        {move || error.get().unwrap_or_default()}
                                    </p>
                                </Show>
                                <Show when=move || notice.get().is_some()>
                                    <p class="profile-page__notice">
                                        {move || notice.get().unwrap_or_default()}
                                    </p>
                                </Show>

                                <div class="profile-page__actions">
                                    <button
                                        class="btn btn--primary"
                                        type="submit"
                                        disabled=move || pending.get()
                                    >
                                        {move || if pending.get() { "Saving..." } else { "Save" }}
                                    </button>
                                    <button
                                        class="btn btn--danger"
                                        type="button"
                                        disabled=move || pending.get()
                                        on:click=on_deactivate.clone()
                                    >
                                        "Delete account"
                                    </button>
                                </div>
                            </form>
                        }
                            .into_any(),
                        Err(err) => view! {
                            <p class="profile-page__error" role="alert">{err.to_string()}</p>
                        }
                            .into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
