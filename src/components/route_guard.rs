//! Route guard gating protected pages on session presence.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::session::SessionState;

/// Renders its children only for an authenticated session.
///
/// Three outcomes: a placeholder while the session is still restoring, a
/// client-side redirect to `/login` when unauthenticated, or the protected
/// content. Restoration is synchronous, so the placeholder is a degenerate
/// transient rather than a real network wait.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    move || {
        let state = session.get();
        if state.loading {
            view! { <p class="route-guard__loading">"Restoring session..."</p> }.into_any()
        } else if state.is_authenticated() {
            children()
        } else {
            view! { <Redirect path="/login"/> }.into_any()
        }
    }
}
