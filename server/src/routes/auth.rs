//! Auth routes: Google OAuth flow, session cookie, page guard.

use axum::extract::{FromRef, Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use model::User;
use serde::Deserialize;
use time::Duration;

use crate::services::{auth as auth_svc, session};
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "session_token";
const OAUTH_STATE_COOKIE_NAME: &str = "oauth_state";

/// Custom sign-in page; never guarded, so redirects to it cannot loop.
pub const SIGN_IN_PATH: &str = "/";
/// Fixed destination after a successful sign-in.
pub const POST_LOGIN_PATH: &str = "/dashboard";
/// Page routes that require a live session.
pub const PROTECTED_PAGES: &[&str] = &["/dashboard", "/aws-setup"];

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn cookie_secure() -> bool {
    cookie_secure_from(env_bool("COOKIE_SECURE"), std::env::var("GOOGLE_REDIRECT_URI").ok().as_deref())
}

/// An explicit `COOKIE_SECURE` wins; otherwise follow the redirect URI scheme.
pub(crate) fn cookie_secure_from(explicit: Option<bool>, redirect_uri: Option<&str>) -> bool {
    explicit.unwrap_or_else(|| redirect_uri.is_some_and(|uri| uri.trim().starts_with("https://")))
}

fn base_cookie(name: &'static str, value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

fn expired_cookie(name: &'static str, secure: bool) -> Cookie<'static> {
    let mut cookie = base_cookie(name, String::new(), secure);
    cookie.set_max_age(Duration::ZERO);
    cookie
}

/// Resolve the session referenced by the cookie jar, if it is live.
pub(crate) fn session_from_jar(state: &AppState, jar: &CookieJar) -> Option<(String, User)> {
    let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
    if token.is_empty() {
        return None;
    }
    let user = state.sessions.get(token)?;
    Some((token.to_owned(), user))
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: User,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let app_state = AppState::from_ref(state);
        let (token, user) = session_from_jar(&app_state, &jar).ok_or(StatusCode::UNAUTHORIZED)?;
        Ok(Self { user, token })
    }
}

// =============================================================================
// PAGE GUARD
// =============================================================================

/// Middleware: protected pages without a live session get a single redirect
/// to the sign-in page. Every other path passes through untouched.
pub async fn require_session(State(state): State<AppState>, jar: CookieJar, request: Request, next: Next) -> Response {
    let path = request.uri().path();
    let protected = PROTECTED_PAGES
        .iter()
        .any(|page| path == *page || path.strip_prefix(page).is_some_and(|rest| rest.starts_with('/')));

    if protected && session_from_jar(&state, &jar).is_none() {
        tracing::debug!(%path, "unauthenticated page request; redirecting to sign-in");
        return Redirect::temporary(SIGN_IN_PATH).into_response();
    }
    next.run(request).await
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /auth/google`: redirect to the Google consent page.
pub async fn google_redirect(State(state): State<AppState>) -> Response {
    let Some(config) = &state.google else {
        return (StatusCode::SERVICE_UNAVAILABLE, "Google sign-in not configured").into_response();
    };

    let oauth_state = session::generate_token();
    let mut cookie = base_cookie(OAUTH_STATE_COOKIE_NAME, oauth_state.clone(), cookie_secure());
    cookie.set_max_age(Duration::minutes(10));

    let jar = CookieJar::new().add(cookie);
    (jar, Redirect::temporary(&config.authorize_url(&oauth_state))).into_response()
}

#[derive(Deserialize)]
pub struct CallbackQuery {
    code: Option<String>,
    state: Option<String>,
    error: Option<String>,
}

/// `GET /auth/google/callback`: exchange code, create session, set cookie,
/// redirect to the dashboard.
pub async fn google_callback(
    State(state): State<AppState>,
    jar: CookieJar,
    axum::extract::Query(params): axum::extract::Query<CallbackQuery>,
) -> Response {
    let Some(config) = &state.google else {
        return (StatusCode::SERVICE_UNAVAILABLE, "Google sign-in not configured").into_response();
    };
    let secure = cookie_secure();

    if let Some(error) = params.error.as_deref() {
        tracing::warn!(%error, "google sign-in declined");
        return Redirect::temporary(SIGN_IN_PATH).into_response();
    }

    // Verify OAuth CSRF state from cookie.
    let Some(callback_state) = params.state.as_deref() else {
        return (StatusCode::BAD_REQUEST, "missing oauth state").into_response();
    };
    let expected_state = jar
        .get(OAUTH_STATE_COOKIE_NAME)
        .map(Cookie::value)
        .unwrap_or_default();
    if expected_state.is_empty() || expected_state != callback_state {
        return (StatusCode::UNAUTHORIZED, "invalid oauth state").into_response();
    }
    let Some(code) = params.code.as_deref() else {
        return (StatusCode::BAD_REQUEST, "missing oauth code").into_response();
    };

    // Exchange code for access token.
    let access_token = match auth_svc::exchange_code(config, code).await {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(error = %e, "oauth code exchange failed");
            return (StatusCode::BAD_GATEWAY, "OAuth code exchange failed").into_response();
        }
    };

    // Fetch Google profile.
    let google_user = match auth_svc::fetch_google_user(&access_token).await {
        Ok(u) => u,
        Err(e) => {
            tracing::error!(error = %e, "google profile fetch failed");
            return (StatusCode::BAD_GATEWAY, "Failed to fetch Google profile").into_response();
        }
    };

    let token = state.sessions.create(google_user.into_user());
    tracing::info!(sessions = state.sessions.len(), "session created");

    let jar = jar
        .add(base_cookie(COOKIE_NAME, token, secure))
        .add(expired_cookie(OAUTH_STATE_COOKIE_NAME, secure));
    (jar, Redirect::temporary(POST_LOGIN_PATH)).into_response()
}

/// `GET /api/auth/me`: return current user.
pub async fn me(auth: AuthUser) -> Json<User> {
    Json(auth.user)
}

/// `POST /api/auth/logout`: delete session, clear cookie.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    state.sessions.remove(&auth.token);

    let jar = CookieJar::new().add(expired_cookie(COOKIE_NAME, cookie_secure()));
    (jar, StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
