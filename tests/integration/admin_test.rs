//! Integration tests for admin-only account management.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

fn account_id(app: &helpers::TestApp, token: &str) -> Uuid {
    app.state.tokens.verify(token).unwrap().account_id
}

#[tokio::test]
async fn test_non_admin_is_forbidden_not_unauthenticated() {
    let app = helpers::TestApp::new();
    let token = app.register("u@x.com", "secret1").await;
    let id = account_id(&app, &token);

    let responses = [
        app.request("GET", "/api/admin/accounts", None, Some(&token))
            .await,
        app.request("GET", &format!("/api/admin/accounts/{id}"), None, Some(&token))
            .await,
        app.request(
            "PUT",
            &format!("/api/admin/accounts/{id}/role"),
            Some(json!({ "isAdmin": true })),
            Some(&token),
        )
        .await,
    ];

    for response in responses {
        assert_eq!(response.status, StatusCode::FORBIDDEN);
        assert_eq!(response.error_code(), "FORBIDDEN");
    }
    assert!(!app.store.is_empty());
}

#[tokio::test]
async fn test_admin_routes_without_token() {
    let app = helpers::TestApp::new();
    let response = app.request("GET", "/api/admin/accounts", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_admin_lists_and_fetches_accounts() {
    let app = helpers::TestApp::new();
    let admin = app.create_admin("root@x.com", "secret1").await;
    let user = app.register("u@x.com", "secret1").await;
    let user_id = account_id(&app, &user);

    let response = app
        .request("GET", "/api/admin/accounts", None, Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let accounts = response.body["data"].as_array().unwrap();
    assert_eq!(accounts.len(), 2);
    assert!(!response.raw.contains("passwordHash"));
    assert!(!response.raw.contains("argon2"));

    let response = app
        .request(
            "GET",
            &format!("/api/admin/accounts/{user_id}"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["email"], "u@x.com");
    assert_eq!(response.body["data"]["isAdmin"], false);
}

#[tokio::test]
async fn test_admin_get_unknown_and_invalid_id() {
    let app = helpers::TestApp::new();
    let admin = app.create_admin("root@x.com", "secret1").await;

    let response = app
        .request(
            "GET",
            &format!("/api/admin/accounts/{}", Uuid::new_v4()),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), "NOT_FOUND");

    let response = app
        .request("GET", "/api/admin/accounts/not-a-uuid", None, Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "INVALID_INPUT");
}

#[tokio::test]
async fn test_promotion_applies_to_new_tokens() {
    let app = helpers::TestApp::new();
    let admin = app.create_admin("root@x.com", "secret1").await;
    let old_token = app.register("u@x.com", "secret1").await;
    let user_id = account_id(&app, &old_token);

    let response = app
        .request(
            "PUT",
            &format!("/api/admin/accounts/{user_id}/role"),
            Some(json!({ "isAdmin": true })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["isAdmin"], true);

    // Tokens carry the role they were issued with
    let response = app
        .request("GET", "/api/admin/accounts", None, Some(&old_token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let new_token = app.login("u@x.com", "secret1").await;
    let response = app
        .request("GET", "/api/admin/accounts", None, Some(&new_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", "/api/auth/me", None, Some(&new_token))
        .await;
    assert_eq!(response.body["data"]["account"]["isAdmin"], true);
}

#[tokio::test]
async fn test_admin_cannot_demote_self() {
    let app = helpers::TestApp::new();
    let admin = app.create_admin("root@x.com", "secret1").await;
    let admin_id = account_id(&app, &admin);

    let response = app
        .request(
            "PUT",
            &format!("/api/admin/accounts/{admin_id}/role"),
            Some(json!({ "isAdmin": false })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "INVALID_INPUT");
}

#[tokio::test]
async fn test_set_role_requires_flag() {
    let app = helpers::TestApp::new();
    let admin = app.create_admin("root@x.com", "secret1").await;
    let user = app.register("u@x.com", "secret1").await;
    let user_id = account_id(&app, &user);

    let response = app
        .request(
            "PUT",
            &format!("/api/admin/accounts/{user_id}/role"),
            Some(json!({ "role": "admin" })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "INVALID_INPUT");
}
