//! Landing page hosting the user-details card.

use leptos::prelude::*;

use crate::components::user_details::UserDetails;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home-page">
            <UserDetails/>
            <p class="home-page__links">
                <a href="/login">"Sign in with a different account"</a>
            </p>
        </main>
    }
}
