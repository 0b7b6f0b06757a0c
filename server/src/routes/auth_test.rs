use std::sync::Arc;

use axum::http::{StatusCode, header};
use serde_json::json;

use super::*;
use crate::routes::test_support::{body_json, location, request, send, test_router};
use crate::services::auth::GoogleConfig;
use crate::state::test_helpers::{MockBackend, seed_session, test_app_state};

// =============================================================================
// env_bool / cookie_secure
// =============================================================================

#[test]
fn env_bool_accepts_common_spellings() {
    for (i, (raw, expected)) in [("1", true), ("  YES ", true), ("off", false), ("False", false)].iter().enumerate() {
        let key = format!("__OPTICLOUD_ENV_BOOL_{i}__");
        unsafe { std::env::set_var(&key, raw) };
        assert_eq!(env_bool(&key), Some(*expected), "raw {raw:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_unset_or_garbage_is_none() {
    assert_eq!(env_bool("__OPTICLOUD_ENV_BOOL_UNSET__"), None);
    let key = "__OPTICLOUD_ENV_BOOL_GARBAGE__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn cookie_secure_follows_https_redirect_uri() {
    assert!(cookie_secure_from(None, Some("https://opticloud.example/auth/google/callback")));
    assert!(!cookie_secure_from(None, Some("http://localhost:3000/auth/google/callback")));
    assert!(!cookie_secure_from(None, None));
}

#[test]
fn cookie_secure_explicit_setting_wins() {
    assert!(!cookie_secure_from(Some(false), Some("https://opticloud.example/auth/google/callback")));
    assert!(cookie_secure_from(Some(true), Some("http://localhost:3000/auth/google/callback")));
    assert!(cookie_secure_from(Some(true), None));
}

// =============================================================================
// page guard
// =============================================================================

#[tokio::test]
async fn protected_page_without_session_redirects_to_sign_in() {
    let state = test_app_state(Arc::new(MockBackend::default()));
    for page in PROTECTED_PAGES {
        let resp = send(test_router(state.clone()), request("GET", page, None, None)).await;
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT, "page {page}");
        assert_eq!(location(&resp), Some(SIGN_IN_PATH));
    }
}

#[tokio::test]
async fn sign_in_page_is_never_redirected() {
    let state = test_app_state(Arc::new(MockBackend::default()));
    let resp = send(test_router(state), request("GET", SIGN_IN_PATH, None, None)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(location(&resp), None);
}

#[tokio::test]
async fn protected_page_with_session_renders() {
    let state = test_app_state(Arc::new(MockBackend::default()));
    let token = seed_session(&state);
    let resp = send(test_router(state), request("GET", "/dashboard", Some(&token), None)).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_session_token_is_treated_as_signed_out() {
    let state = test_app_state(Arc::new(MockBackend::default()));
    let resp = send(test_router(state), request("GET", "/aws-setup", Some("deadbeef"), None)).await;
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn api_paths_are_not_redirected() {
    let state = test_app_state(Arc::new(MockBackend::default()));
    let resp = send(test_router(state), request("GET", "/api/metrics", None, None)).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn healthz_is_public() {
    let state = test_app_state(Arc::new(MockBackend::default()));
    let resp = send(test_router(state), request("GET", "/healthz", None, None)).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

// =============================================================================
// session endpoints
// =============================================================================

#[tokio::test]
async fn me_requires_session() {
    let state = test_app_state(Arc::new(MockBackend::default()));
    let resp = send(test_router(state), request("GET", "/api/auth/me", None, None)).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn me_returns_session_user() {
    let state = test_app_state(Arc::new(MockBackend::default()));
    let token = seed_session(&state);
    let resp = send(test_router(state), request("GET", "/api/auth/me", Some(&token), None)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["email"], "test@example.com");
    assert_eq!(body["id"], "test-sub-1");
}

#[tokio::test]
async fn logout_removes_session_and_expires_cookie() {
    let state = test_app_state(Arc::new(MockBackend::default()));
    let token = seed_session(&state);

    let resp = send(test_router(state.clone()), request("POST", "/api/auth/logout", Some(&token), None)).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let set_cookie = resp.headers().get(header::SET_COOKIE).and_then(|v| v.to_str().ok()).unwrap();
    assert!(set_cookie.starts_with("session_token="));
    assert!(set_cookie.contains("Max-Age=0"));
    assert!(state.sessions.get(&token).is_none());

    let resp = send(test_router(state), request("GET", "/dashboard", Some(&token), None)).await;
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn logout_without_session_is_unauthorized() {
    let state = test_app_state(Arc::new(MockBackend::default()));
    let resp = send(test_router(state), request("POST", "/api/auth/logout", None, None)).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

// =============================================================================
// Google OAuth
// =============================================================================

fn google_config() -> GoogleConfig {
    GoogleConfig {
        client_id: "client-123".into(),
        client_secret: "secret".into(),
        redirect_uri: "http://localhost:3000/auth/google/callback".into(),
    }
}

#[tokio::test]
async fn google_redirect_without_config_is_unavailable() {
    let state = test_app_state(Arc::new(MockBackend::default()));
    let resp = send(test_router(state), request("GET", "/auth/google", None, None)).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn google_redirect_sets_state_cookie() {
    let mut state = test_app_state(Arc::new(MockBackend::default()));
    state.google = Some(google_config());

    let resp = send(test_router(state), request("GET", "/auth/google", None, None)).await;
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    let target = location(&resp).unwrap();
    assert!(target.starts_with("https://accounts.google.com/"));
    assert!(target.contains("client_id=client-123"));
    let set_cookie = resp.headers().get(header::SET_COOKIE).and_then(|v| v.to_str().ok()).unwrap();
    assert!(set_cookie.starts_with("oauth_state="));
}

#[tokio::test]
async fn google_callback_rejects_mismatched_state() {
    let mut state = test_app_state(Arc::new(MockBackend::default()));
    state.google = Some(google_config());

    let req = axum::http::Request::builder()
        .uri("/auth/google/callback?code=abc&state=forged")
        .header(header::COOKIE, "oauth_state=expected")
        .body(axum::body::Body::empty())
        .unwrap();
    let resp = send(test_router(state.clone()), req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(state.sessions.is_empty());
}

#[tokio::test]
async fn google_callback_missing_state_is_bad_request() {
    let mut state = test_app_state(Arc::new(MockBackend::default()));
    state.google = Some(google_config());
    let resp = send(test_router(state), request("GET", "/auth/google/callback?code=abc", None, None)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn google_callback_declined_returns_to_sign_in() {
    let mut state = test_app_state(Arc::new(MockBackend::default()));
    state.google = Some(google_config());
    let resp = send(
        test_router(state),
        request("GET", "/auth/google/callback?error=access_denied", None, None),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp), Some(SIGN_IN_PATH));
}

// =============================================================================
// user recording
// =============================================================================

async fn settle(backend: &MockBackend, name: &str, expected: usize) {
    for _ in 0..100 {
        if backend.call_count(name) >= expected {
            break;
        }
        tokio::task::yield_now().await;
    }
}

#[tokio::test]
async fn record_user_reaches_backend_once_per_session() {
    let backend = Arc::new(MockBackend::default());
    let state = test_app_state(backend.clone());
    let token = seed_session(&state);

    let resp = send(test_router(state.clone()), request("POST", "/api/user-data", Some(&token), Some(json!({})))).await;
    assert_eq!(resp.status(), StatusCode::ACCEPTED);
    settle(&backend, "record_user", 1).await;

    let resp = send(test_router(state), request("POST", "/api/user-data", Some(&token), None)).await;
    assert_eq!(resp.status(), StatusCode::ACCEPTED);
    settle(&backend, "record_user", 2).await;

    assert_eq!(backend.call_count("record_user"), 1);
}

#[tokio::test]
async fn record_user_requires_session() {
    let backend = Arc::new(MockBackend::default());
    let state = test_app_state(backend.clone());
    let resp = send(test_router(state), request("POST", "/api/user-data", None, None)).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(backend.calls().is_empty());
}
