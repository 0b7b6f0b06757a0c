//! Landing page with the Google sign-in button.

use leptos::prelude::*;

pub const GOOGLE_SIGN_IN_PATH: &str = "/auth/google";

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <div class="landing-card">
                <h1>"Welcome to OptiCloud"</h1>
                <p class="landing-card__subtitle">"To access your account, please sign in."</p>
                <a href=GOOGLE_SIGN_IN_PATH class="landing-button" rel="external">
                    "Sign in with Google"
                </a>
            </div>
        </div>
    }
}
