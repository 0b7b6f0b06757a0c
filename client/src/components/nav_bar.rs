//! Top navigation bar shown on authenticated pages.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    // The reload to the sign-in page is the only navigation on logout.
    let on_logout = move |_| {
        if !auth.try_update(AuthState::begin_logout).unwrap_or(false) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(crate::util::auth::SIGN_IN_PATH);
            }
        });
    };

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href="/dashboard">"OptiCloud"</a>
            <ul class="nav-bar__links">
                <li><a href="/dashboard">"Dashboard"</a></li>
                <li><a href="/aws-setup">"Setup"</a></li>
            </ul>
            <button class="nav-bar__logout" on:click=on_logout disabled=move || auth.with(|s| s.logging_out)>
                "Logout"
            </button>
        </nav>
    }
}
