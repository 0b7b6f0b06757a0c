//! Dashboard page: greeting, stored role ARN, carbon footprint and one bar
//! chart per metric.
//!
//! SYSTEM CONTEXT
//! ==============
//! Role ARN and metrics are fetched independently once the session is known.
//! Until metrics arrive the page shows its loading view, with the error
//! message underneath if the fetch failed.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::bar_chart::BarChart;
use crate::components::nav_bar::NavBar;
use crate::state::auth::{AuthState, SessionStatus};
use crate::state::dashboard::{DashboardPhase, DashboardState, RoleArnLine};
use crate::util::auth::install_auth_gate;

fn greeting(auth: &AuthState) -> String {
    let name = auth.user.as_ref().map_or("there", |u| u.display_name());
    format!("Welcome, {name}!")
}

fn format_reduction(percentage: f64) -> String {
    format!("{percentage:.1}%")
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let dashboard = RwSignal::new(DashboardState::default());
    install_auth_gate(auth, use_navigate());

    // Fetch once per mount, after the session resolves to a user.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get_untracked() || auth.get().status() != SessionStatus::Authenticated {
            return;
        }
        requested.set(true);

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_role_arn().await;
                dashboard.update(|s| s.apply_role_arn(result));
            });
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_metrics().await;
                if let Err(e) = &result {
                    log::warn!("metrics fetch failed: {e}");
                }
                dashboard.update(|s| s.apply_metrics(result));
            });
        }
    });

    let phase = move || dashboard.with(|s| s.phase(auth.get().status()));

    view! {
        <div class="page">
            <NavBar/>
            <main class="dashboard">
                {move || match phase() {
                    DashboardPhase::Loading => view! { <p class="loading">"Loading..."</p> }.into_any(),
                    DashboardPhase::Redirecting => view! { <p class="loading">"Redirecting to sign-in..."</p> }.into_any(),
                    DashboardPhase::FetchingData => view! {
                        <p class="loading">"Loading metrics..."</p>
                        <Show when=move || dashboard.with(|s| s.metrics_message.is_some())>
                            <p class="message message--error">
                                {move || dashboard.with(|s| s.metrics_message.clone().unwrap_or_default())}
                            </p>
                        </Show>
                    }
                    .into_any(),
                    DashboardPhase::Ready => view! {
                        <h1 class="dashboard__title">{move || auth.with(greeting)}</h1>
                        {move || match dashboard.with(DashboardState::role_arn_line) {
                            RoleArnLine::Failed(message) => view! {
                                <p class="dashboard__arn message message--error">{message}</p>
                            }
                            .into_any(),
                            RoleArnLine::Stored(role_arn) => view! {
                                <p class="dashboard__arn">"Role ARN: " <code>{role_arn}</code></p>
                            }
                            .into_any(),
                            RoleArnLine::Missing => view! {
                                <p class="dashboard__arn">
                                    "No Role ARN on file. " <a href="/aws-setup">"Set up AWS Monitoring"</a>
                                </p>
                            }
                            .into_any(),
                        }}
                        {move || {
                            dashboard
                                .with(|s| s.metrics.as_ref().and_then(model::MetricsDocument::carbon_reduction))
                                .map(|pct| view! {
                                    <p class="dashboard__carbon">
                                        "Carbon footprint reduction: " {format_reduction(pct)}
                                    </p>
                                })
                        }}
                        <div class="dashboard__charts">
                            {move || {
                                dashboard
                                    .with(DashboardState::charts)
                                    .into_iter()
                                    .map(|chart| view! { <BarChart chart=chart/> })
                                    .collect_view()
                            }}
                        </div>
                    }
                    .into_any(),
                }}
            </main>
        </div>
    }
}
