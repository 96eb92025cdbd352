//! Landing page for failed login/signup form actions.

use leptos::prelude::*;

#[component]
pub fn ErrorPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <p class="login-message">"Sorry, something went wrong"</p>
                <a href="/login" class="login-button">"Back to sign in"</a>
            </div>
        </div>
    }
}
