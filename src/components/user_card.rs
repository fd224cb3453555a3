//! Card rendering a single user in the list and search results.

use leptos::prelude::*;

use crate::net::types::User;

/// User summary card: name, email, and status when present.
#[component]
pub fn UserCard(user: User) -> impl IntoView {
    let status = user.status.clone();
    view! {
        <article class="user-card">
            <h3 class="user-card__name">{user.name.clone()}</h3>
            <p class="user-card__email">{user.email.clone()}</p>
            {status.map(|s| view! { <span class="user-card__status">{s}</span> })}
        </article>
    }
}
