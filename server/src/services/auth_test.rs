use super::*;

fn config() -> GoogleConfig {
    GoogleConfig {
        client_id: "client-123.apps.googleusercontent.com".into(),
        client_secret: "shh".into(),
        redirect_uri: "http://localhost:3000/auth/google/callback".into(),
    }
}

#[test]
fn authorize_url_encodes_query_values() {
    let url = config().authorize_url("abc123");
    assert!(url.starts_with("https://accounts.google.com/o/oauth2/v2/auth?"));
    assert!(url.contains("client_id=client-123.apps.googleusercontent.com"));
    assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fauth%2Fgoogle%2Fcallback"));
    assert!(url.contains("scope=openid%20email%20profile"));
    assert!(url.contains("response_type=code"));
    assert!(url.contains("state=abc123"));
}

#[test]
fn authorize_url_never_leaks_secret() {
    assert!(!config().authorize_url("s").contains("shh"));
}

#[test]
fn token_response_parses_access_token() {
    let token = parse_token_response(r#"{"access_token":"ya29.x","expires_in":3599,"token_type":"Bearer"}"#).unwrap();
    assert_eq!(token, "ya29.x");
}

#[test]
fn token_error_body_is_reported() {
    let err = parse_token_response(r#"{"error":"invalid_grant"}"#).unwrap_err();
    assert!(err.to_string().contains("invalid_grant"));
}

#[test]
fn google_user_maps_to_session_user() {
    let google: GoogleUser = serde_json::from_str(
        r#"{"sub":"1089","name":"Ada Lovelace","email":"ada@example.com","picture":"https://lh3/x.png","email_verified":true}"#,
    )
    .unwrap();
    let user = google.into_user();
    assert_eq!(user.id.as_deref(), Some("1089"));
    assert_eq!(user.name.as_deref(), Some("Ada Lovelace"));
    assert_eq!(user.email.as_deref(), Some("ada@example.com"));
    assert_eq!(user.image.as_deref(), Some("https://lh3/x.png"));
}

#[test]
fn google_user_optional_fields() {
    let google: GoogleUser = serde_json::from_str(r#"{"sub":"7"}"#).unwrap();
    let user = google.into_user();
    assert_eq!(user.id.as_deref(), Some("7"));
    assert!(user.name.is_none());
}
