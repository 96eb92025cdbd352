//! Login page with email + password sign-in and account creation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both buttons submit the same form; `formaction` picks the server action.
//! The actions talk to the auth provider and answer with a redirect, so the
//! page works before (and without) hydration.

use leptos::prelude::*;

/// Server action that signs in with the submitted credentials.
pub const LOGIN_ACTION: &str = "/auth/login";
/// Server action that creates an account with the submitted credentials.
pub const SIGNUP_ACTION: &str = "/auth/signup";

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <h1 class="login-card__title">"Welcome back"</h1>
                <p class="login-card__subtitle">"Enter your credentials to access your account"</p>
                <form class="login-form" method="post" action=LOGIN_ACTION>
                    <label for="email" class="login-label">"Email"</label>
                    <input
                        id="email"
                        name="email"
                        class="login-input"
                        type="email"
                        placeholder="Enter your email"
                        required=true
                    />
                    <label for="password" class="login-label">"Password"</label>
                    <input
                        id="password"
                        name="password"
                        class="login-input"
                        type="password"
                        placeholder="Enter your password"
                        required=true
                    />
                    <button class="login-button" type="submit" formaction=LOGIN_ACTION>
                        "Sign In"
                    </button>
                    <button class="login-button login-button--outline" type="submit" formaction=SIGNUP_ACTION>
                        "Create Account"
                    </button>
                </form>
            </div>
        </div>
    }
}
