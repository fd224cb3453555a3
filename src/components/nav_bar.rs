//! Application header with navigation, the current user, and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session;
use crate::state::session::SessionState;

/// Top navigation bar for authenticated pages.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let user_name = move || {
        session
            .get()
            .user
            .map(|u| u.name)
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        session::logout(session);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <header class="nav-bar">
            <A attr:class="nav-bar__brand" href="/users">"Accounts"</A>
            <nav class="nav-bar__links">
                <A href="/users">"Users"</A>
                <A href="/profile">"Profile"</A>
            </nav>
            <div class="nav-bar__session">
                <span class="nav-bar__user">{user_name}</span>
                <button class="btn" on:click=on_logout>
                    "Sign out"
                </button>
            </div>
        </header>
    }
}
