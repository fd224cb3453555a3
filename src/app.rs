//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::route_guard::RequireAuth;
use crate::pages::{
    login::LoginPage, profile::ProfilePage, register::RegisterPage, users::UsersPage,
};
use crate::state::session;
use crate::state::session::SessionState;

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
/// Constructs the one session container for the page (restored from
/// durable storage before the first render, so no loading roundtrip),
/// provides it via context, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(session::initial_session());
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/accounts-client.css"/>
        <Title text="Accounts"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomeRedirect/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=StaticSegment("users")
                    view=|| view! { <RequireAuth><UsersPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("profile")
                    view=|| view! { <RequireAuth><ProfilePage/></RequireAuth> }
                />
            </Routes>
        </Router>
    }
}

/// Root path: straight to the user list when signed in, otherwise login.
#[component]
fn HomeRedirect() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    move || {
        if session.get().is_authenticated() {
            view! { <Redirect path="/users"/> }.into_any()
        } else {
            view! { <Redirect path="/login"/> }.into_any()
        }
    }
}
