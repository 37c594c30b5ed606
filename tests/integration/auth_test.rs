//! Integration tests for registration, login, `me` and the session guard.

mod helpers;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::json;
use uuid::Uuid;

use chatgate_auth::TokenService;
use chatgate_core::config::AuthConfig;
use chatgate_entity::account::Role;

#[tokio::test]
async fn test_register_returns_session() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({ "email": "a@x.com", "password": "secret1" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["success"], true);
    let data = &response.body["data"];
    assert!(data["token"].as_str().is_some());
    assert!(data["expiresAt"].as_str().is_some());
    assert_eq!(data["account"]["email"], "a@x.com");
    assert_eq!(data["account"]["isAdmin"], false);
    assert!(data["account"]["id"].as_str().is_some());
    assert!(!response.raw.contains("secret1"));
    assert!(!response.raw.contains("argon2"));

    let token = data["token"].as_str().unwrap();
    let verified = app.state.tokens.verify(token).unwrap();
    assert_eq!(
        verified.account_id.to_string(),
        data["account"]["id"].as_str().unwrap()
    );
}

#[tokio::test]
async fn test_register_cannot_self_promote() {
    let app = helpers::TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({ "email": "a@x.com", "password": "secret1", "isAdmin": true })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["account"]["isAdmin"], false);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = helpers::TestApp::new();
    app.register("a@x.com", "secret1").await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({ "email": "a@x.com", "password": "different-password" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.error_code(), "DUPLICATE_EMAIL");
    assert_eq!(app.store.len(), 1);
}

#[tokio::test]
async fn test_register_invalid_input() {
    let app = helpers::TestApp::new();

    for body in [
        json!({ "email": "", "password": "secret1" }),
        json!({ "email": "not-an-address", "password": "secret1" }),
        json!({ "email": "a@x.com", "password": "12345" }),
        json!({ "email": "a@x.com" }),
    ] {
        let response = app
            .request("POST", "/api/auth/register", Some(body.clone()), None)
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(response.error_code(), "INVALID_INPUT", "{body}");
    }
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn test_malformed_json_is_invalid_input() {
    let app = helpers::TestApp::new();
    let response = app
        .request_raw("POST", "/api/auth/login", "{not json".to_string(), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "INVALID_INPUT");
}

#[tokio::test]
async fn test_login_failures_are_identical() {
    let app = helpers::TestApp::new();
    app.register("a@x.com", "secret1").await;

    let wrong_password = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "a@x.com", "password": "wrong-password" })),
            None,
        )
        .await;
    let unknown_email = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "nobody@x.com", "password": "secret1" })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.error_code(), "INVALID_CREDENTIALS");
    assert_eq!(wrong_password.status, unknown_email.status);
    assert_eq!(wrong_password.body, unknown_email.body);
}

#[tokio::test]
async fn test_register_login_me() {
    let app = helpers::TestApp::new();
    app.register("a@x.com", "secret1").await;
    let token = app.login("a@x.com", "secret1").await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["account"]["email"], "a@x.com");
    assert_eq!(response.body["data"]["account"]["isAdmin"], false);
}

#[tokio::test]
async fn test_me_without_authorization() {
    let app = helpers::TestApp::new();
    let response = app.request("GET", "/api/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "UNAUTHENTICATED");
    assert_eq!(response.body["message"], "Authentication required");
}

#[tokio::test]
async fn test_rejected_tokens_are_indistinguishable() {
    let app = helpers::TestApp::new();
    let token = app.register("a@x.com", "secret1").await;
    let account_id = app.state.tokens.verify(&token).unwrap().account_id;

    let expired = app
        .state
        .tokens
        .issue_at(account_id, Role::User, Utc::now() - Duration::days(2))
        .unwrap()
        .token;
    let foreign = TokenService::new(&AuthConfig {
        jwt_secret: "some-other-secret".to_string(),
        ..AuthConfig::default()
    })
    .unwrap()
    .issue(account_id, Role::User)
    .unwrap()
    .token;

    let headers = [
        "Basic YTpiCg==".to_string(),
        "Bearer".to_string(),
        "Bearer ".to_string(),
        "Bearer not.a.token".to_string(),
        format!("Bearer {expired}"),
        format!("Bearer {foreign}"),
    ];

    let baseline = app.request("GET", "/api/auth/me", None, None).await;
    for header in &headers {
        let response = app
            .request_raw("GET", "/api/auth/me", String::new(), Some(header))
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{header}");
        assert_eq!(response.body, baseline.body, "{header}");
    }
}

#[tokio::test]
async fn test_bearer_scheme_case_insensitive() {
    let app = helpers::TestApp::new();
    let token = app.register("a@x.com", "secret1").await;

    let response = app
        .request_raw(
            "GET",
            "/api/auth/me",
            String::new(),
            Some(&format!("bearer {token}")),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_token_for_missing_account_is_unauthenticated() {
    let app = helpers::TestApp::new();
    let token = app
        .state
        .tokens
        .issue(Uuid::new_v4(), Role::User)
        .unwrap()
        .token;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_change_password() {
    let app = helpers::TestApp::new();
    let token = app.register("a@x.com", "secret1").await;

    let response = app
        .request(
            "PUT",
            "/api/auth/password",
            Some(json!({ "currentPassword": "wrong-one", "newPassword": "secret2" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "INVALID_CREDENTIALS");

    let response = app
        .request(
            "PUT",
            "/api/auth/password",
            Some(json!({ "currentPassword": "secret1", "newPassword": "secret2" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    app.login("a@x.com", "secret2").await;
    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "a@x.com", "password": "secret1" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new();
    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert!(response.body["data"]["version"].as_str().is_some());
}
