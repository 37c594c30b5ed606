//! Integration tests for the per-account settings panel.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_new_account_gets_defaults() {
    let app = helpers::TestApp::new();
    let token = app.register("a@x.com", "secret1").await;

    let response = app.request("GET", "/api/settings", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["data"],
        json!({
            "defaultModel": "gemini",
            "gemini": { "temperature": 0.9, "hasApiKey": false },
            "grok": { "hasApiKey": false },
        })
    );
}

#[tokio::test]
async fn test_settings_require_authentication() {
    let app = helpers::TestApp::new();

    let get = app.request("GET", "/api/settings", None, None).await;
    let put = app
        .request(
            "PUT",
            "/api/settings",
            Some(json!({ "defaultModel": "gemini" })),
            None,
        )
        .await;

    for response in [get, put] {
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.error_code(), "UNAUTHENTICATED");
    }
}

#[tokio::test]
async fn test_partial_update_keeps_other_fields() {
    let app = helpers::TestApp::with_config(|c| c.providers.grok_enabled = true);
    let token = app.register("a@x.com", "secret1").await;

    let response = app
        .request(
            "PUT",
            "/api/settings",
            Some(json!({ "defaultModel": "grok" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "PUT",
            "/api/settings",
            Some(json!({ "gemini": { "temperature": 0.25 } })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["defaultModel"], "grok");
    assert_eq!(response.body["data"]["gemini"]["temperature"], 0.25);

    let response = app.request("GET", "/api/settings", None, Some(&token)).await;
    assert_eq!(response.body["data"]["defaultModel"], "grok");
    assert_eq!(response.body["data"]["gemini"]["temperature"], 0.25);
}

#[tokio::test]
async fn test_temperature_out_of_range() {
    let app = helpers::TestApp::new();
    let token = app.register("a@x.com", "secret1").await;

    for temperature in [json!(-0.5), json!(1.01), json!(7)] {
        let response = app
            .request(
                "PUT",
                "/api/settings",
                Some(json!({ "gemini": { "temperature": temperature } })),
                Some(&token),
            )
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{temperature}");
        assert_eq!(response.error_code(), "INVALID_INPUT");
    }
}

#[tokio::test]
async fn test_grok_disabled() {
    let app = helpers::TestApp::new();
    let token = app.register("a@x.com", "secret1").await;

    let response = app
        .request(
            "PUT",
            "/api/settings",
            Some(json!({ "defaultModel": "grok" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "INVALID_INPUT");

    let response = app.request("GET", "/api/settings", None, Some(&token)).await;
    assert_eq!(response.body["data"]["defaultModel"], "gemini");
}

#[tokio::test]
async fn test_unknown_model_rejected() {
    let app = helpers::TestApp::new();
    let token = app.register("a@x.com", "secret1").await;

    let response = app
        .request(
            "PUT",
            "/api/settings",
            Some(json!({ "defaultModel": "gpt" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "INVALID_INPUT");
}

#[tokio::test]
async fn test_api_keys_never_returned() {
    let app = helpers::TestApp::new();
    let token = app.register("a@x.com", "secret1").await;

    let response = app
        .request(
            "PUT",
            "/api/settings",
            Some(json!({
                "gemini": { "apiKey": "AIza-very-secret" },
                "grok": { "apiKey": "xai-very-secret" },
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["gemini"]["hasApiKey"], true);
    assert_eq!(response.body["data"]["grok"]["hasApiKey"], true);
    assert!(!response.raw.contains("very-secret"));

    let response = app.request("GET", "/api/settings", None, Some(&token)).await;
    assert!(!response.raw.contains("very-secret"));
    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert!(!response.raw.contains("very-secret"));

    let response = app
        .request(
            "PUT",
            "/api/settings",
            Some(json!({ "gemini": { "apiKey": "" } })),
            Some(&token),
        )
        .await;
    assert_eq!(response.body["data"]["gemini"]["hasApiKey"], false);
    assert_eq!(response.body["data"]["grok"]["hasApiKey"], true);
}

#[tokio::test]
async fn test_unknown_fields_ignored() {
    let app = helpers::TestApp::new();
    let token = app.register("a@x.com", "secret1").await;

    let response = app
        .request(
            "PUT",
            "/api/settings",
            Some(json!({ "theme": "dark", "gemini": { "topK": 3 } })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["defaultModel"], "gemini");
}

#[tokio::test]
async fn test_settings_isolated_per_account() {
    let app = helpers::TestApp::new();
    let alice = app.register("alice@x.com", "secret1").await;
    let bob = app.register("bob@x.com", "secret1").await;

    app.request(
        "PUT",
        "/api/settings",
        Some(json!({ "gemini": { "temperature": 0.1 } })),
        Some(&alice),
    )
    .await;

    let response = app.request("GET", "/api/settings", None, Some(&bob)).await;
    assert_eq!(response.body["data"]["gemini"]["temperature"], 0.9);
}
