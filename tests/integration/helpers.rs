//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use chatgate_api::{AppState, build_app};
use chatgate_auth::PasswordHasher;
use chatgate_core::config::AppConfig;
use chatgate_database::MemoryAccountStore;
use chatgate_entity::account::Role;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for issuing tokens directly
    pub state: AppState,
    /// The in-memory store behind the router
    pub store: MemoryAccountStore,
}

impl TestApp {
    /// Create a test application over an empty in-memory store
    pub fn new() -> Self {
        Self::with_config(|_| {})
    }

    /// Same as [`TestApp::new`] after adjusting the configuration
    pub fn with_config(adjust: impl FnOnce(&mut AppConfig)) -> Self {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = "integration-test-secret".to_string();
        adjust(&mut config);

        let store = MemoryAccountStore::new();
        let hasher = PasswordHasher::with_cost(1024, 1).expect("Failed to build hasher");
        let state = AppState::new(config, Arc::new(store.clone()), hasher)
            .expect("Failed to build app state");

        Self {
            router: build_app(state.clone()),
            state,
            store,
        }
    }

    /// Register through the API and return the token
    pub async fn register(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/register",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Register failed: {:?}",
            response.body
        );
        token_of(&response)
    }

    /// Login through the API and return the token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );
        token_of(&response)
    }

    /// Create an admin the way the CLI does and return a token for it
    pub async fn create_admin(&self, email: &str, password: &str) -> String {
        self.state
            .accounts
            .register(email, password, Role::Admin)
            .await
            .expect("Failed to create admin")
            .token
            .token
    }

    /// Make an HTTP request with an optional bearer token
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let authorization = token.map(|t| format!("Bearer {t}"));
        let body = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.request_raw(method, path, body, authorization.as_deref())
            .await
    }

    /// Make an HTTP request with a raw body and raw `Authorization` value
    pub async fn request_raw(
        &self,
        method: &str,
        path: &str,
        body: String,
        authorization: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(value) = authorization {
            req = req.header("Authorization", value);
        }

        let req = req.body(Body::from(body)).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let raw = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body, raw }
    }
}

fn token_of(response: &TestResponse) -> String {
    response.body["data"]["token"]
        .as_str()
        .expect("No token in response")
        .to_string()
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
    /// Body as text
    pub raw: String,
}

impl TestResponse {
    /// The `error` code of an error body
    pub fn error_code(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}
