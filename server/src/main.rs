mod backend;
mod routes;
mod services;
mod state;

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("server=info,tower_http=info")))
        .init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let backend = backend::HttpBackend::from_env().expect("backend client init failed");
    tracing::info!(base_url = backend.base_url(), "backend client initialized");

    // Non-fatal: sign-in is disabled until the Google credentials are set.
    let google = services::auth::GoogleConfig::from_env();
    if google.is_none() {
        tracing::warn!("GOOGLE_CLIENT_ID/GOOGLE_CLIENT_SECRET/GOOGLE_REDIRECT_URI not set; sign-in disabled");
    }

    let sessions = services::session::SessionStore::from_env();
    let _reaper = services::session::spawn_reaper(
        sessions.clone(),
        Duration::from_secs(services::session::DEFAULT_REAP_INTERVAL_SECS),
    );

    let state = state::AppState::new(sessions, Arc::new(backend), google);

    let app = routes::leptos_app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "opticloud listening");
    axum::serve(listener, app).await.expect("server failed");
}
