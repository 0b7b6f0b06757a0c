//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the OAuth endpoints and the JSON API consumed by the
//! browser, and stitches them with Leptos SSR rendering under a single Axum
//! router. Protected pages sit behind the session guard; the API routes
//! enforce auth per handler through the `AuthUser` extractor.

pub mod auth;
pub mod metrics;
pub mod role_arn;
pub mod users;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// OAuth + JSON API routes.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/auth/google", get(auth::google_redirect))
        .route("/auth/google/callback", get(auth::google_callback))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/user-data", post(users::record_user))
        .route("/api/role-arn", get(role_arn::get_role_arn).post(role_arn::submit_role_arn))
        .route("/api/metrics", get(metrics::get_metrics))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Wrap `router` with the protected-page session guard.
pub fn guard_pages(router: Router, state: AppState) -> Router {
    router.layer(axum::middleware::from_fn_with_state(state, auth::require_session))
}

/// API routes + Leptos SSR pages + static site assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section or `LEPTOS_*` variables).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Leptos static assets (WASM, CSS, JS) live under the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let app = api_routes(state.clone())
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")));

    Ok(guard_pages(app, state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
