//! User-details card: fetches `/users/me` on demand and renders the result.
//!
//! ERROR HANDLING
//! ==============
//! Fetch failures are logged and replaced by a fixed message; nothing is
//! re-thrown and nothing is retried.

use leptos::prelude::*;

use crate::net::types::User;
#[cfg(feature = "hydrate")]
use crate::state::user_details::settle_fetch;
use crate::state::user_details::UserDetailsState;
use crate::util::initials::user_initials;
use crate::util::member_since::format_member_since;

/// Card with a fetch/refresh button, an error banner, and the user summary.
#[component]
pub fn UserDetails() -> impl IntoView {
    let state = RwSignal::new(UserDetailsState::default());

    let on_fetch = move |_| {
        let Some(seq) = state.try_update(UserDetailsState::begin) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = settle_fetch(seq, crate::net::api::fetch_current_user()).await;
            // Signal is gone if the card unmounted while the request was in flight.
            let _ = state.try_update(|s| outcome.apply(s));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = seq;
    };

    view! {
        <div class="card user-details">
            <div class="card__header">
                <h2 class="card__title">"User Details"</h2>
                <p class="card__description">"View your account information"</p>
            </div>
            <div class="card__content">
                <Show when=move || state.with(UserDetailsState::shows_prompt)>
                    <div class="user-details__prompt">
                        <p>"Click the button below to fetch your user details"</p>
                    </div>
                </Show>

                {move || {
                    state
                        .with(|s| s.error.clone())
                        .map(|message| {
                            view! {
                                <div class="user-details__error">
                                    <p class="text-destructive">{message}</p>
                                </div>
                            }
                        })
                }}

                {move || state.with(|s| s.user.clone()).map(|user| view! { <UserCard user=user/> })}

                <button
                    class="btn btn--primary user-details__fetch"
                    on:click=on_fetch
                    disabled=move || state.with(|s| s.loading)
                >
                    {move || state.with(UserDetailsState::button_label)}
                </button>
            </div>
        </div>
    }
}

/// Avatar plus name, email, and optional member-since line.
#[component]
fn UserCard(user: User) -> impl IntoView {
    let initials = user_initials(&user);
    let alt = user.name().unwrap_or(&user.email).to_owned();
    let display_name = user.name().unwrap_or("No name set").to_owned();
    let member_since = user.created_at.as_deref().and_then(format_member_since);
    let avatar = match user.avatar_url() {
        Some(src) => view! { <img class="avatar__image" src=src.to_owned() alt=alt/> }.into_any(),
        None => view! { <span class="avatar__fallback">{initials}</span> }.into_any(),
    };

    view! {
        <div class="user-card">
            <span class="avatar">{avatar}</span>
            <div class="user-card__body">
                <p class="user-card__name">{display_name}</p>
                <p class="user-card__email">{user.email.clone()}</p>
                {member_since.map(|date| view! { <p class="user-card__meta">"Member since " {date}</p> })}
            </div>
        </div>
    }
}
