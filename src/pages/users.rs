//! Users list page with by-email search.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::components::user_card::UserCard;
use crate::net::api;
use crate::net::types::User;

/// Outcome of a by-email search, kept separate from the full list so
/// clearing the search restores the list without refetching.
#[derive(Clone, Debug, PartialEq)]
enum SearchOutcome {
    Found(User),
    NotFound(String),
    Failed(String),
}

/// Users list page: full listing plus a by-email lookup. A 404 on the
/// lookup renders as "no user found", never as an error.
#[component]
pub fn UsersPage() -> impl IntoView {
    let users = LocalResource::new(|| api::list_users());

    let query = RwSignal::new(String::new());
    let outcome = RwSignal::new(None::<SearchOutcome>);
    let searching = RwSignal::new(false);

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email = query.get().trim().to_owned();
        if email.is_empty() {
            outcome.set(None);
            return;
        }
        searching.set(true);
        leptos::task::spawn_local(async move {
            let result = match api::fetch_user_by_email(&email).await {
                Ok(Some(user)) => SearchOutcome::Found(user),
                Ok(None) => SearchOutcome::NotFound(email),
                Err(err) => SearchOutcome::Failed(err.to_string()),
            };
            outcome.set(Some(result));
            searching.set(false);
        });
    };

    let on_clear = move |_| {
        query.set(String::new());
        outcome.set(None);
    };

    view! {
        <div class="users-page">
            <NavBar/>

            <header class="users-page__header">
                <h1>"Users"</h1>
                <form class="users-page__search" on:submit=on_search>
                    <input
                        class="users-page__search-input"
                        type="text"
                        placeholder="Search by email"
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit" disabled=move || searching.get()>
                        "Search"
                    </button>
                    <Show when=move || outcome.get().is_some()>
                        <button class="btn" type="button" on:click=on_clear>
                            "Clear"
                        </button>
                    </Show>
                </form>
            </header>

            {move || match outcome.get() {
                Some(SearchOutcome::Found(user)) => view! {
                    <div class="users-page__grid">
                        <UserCard user=user/>
                    </div>
                }
                    .into_any(),
                Some(SearchOutcome::NotFound(email)) => view! {
                    <p class="users-page__empty">{format!("No user found with email {email}.")}</p>
                }
                    .into_any(),
                Some(SearchOutcome::Failed(message)) => view! {
                    <p class="users-page__error" role="alert">{message}</p>
                }
                    .into_any(),
                None => view! {
                    <Suspense fallback=move || view! { <p>"Loading users..."</p> }>
                        {move || {
                            users.get().map(|result| match result {
                                Ok(list) if list.is_empty() => view! {
                                    <p class="users-page__empty">"No users registered."</p>
                                }
                                    .into_any(),
                                Ok(list) => view! {
                                    <div class="users-page__grid">
                                        {list
                                            .into_iter()
                                            .map(|user| view! { <UserCard user=user/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any(),
                                Err(err) => view! {
                                    <p class="users-page__error" role="alert">{err.to_string()}</p>
                                }
                                    .into_any(),
                            })
                        }}
                    </Suspense>
                }
                    .into_any(),
            }}
        </div>
    }
}
