//! HTTP transport: explicit request construction and response decoding.

use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ClientError;
use crate::types::{Envelope, ErrorBody};

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Thin wrapper over `reqwest::Client` bound to one server.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for `base_url` (e.g. `http://localhost:5000`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(APP_USER_AGENT)
            .build()?;
        Ok(Self::with_client(http, base_url))
    }

    /// Uses a preconfigured `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// Server root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds a request to `path`. The bearer header is set only when a
    /// token is passed.
    pub fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let builder = self
            .http
            .request(method, format!("{}{}", self.base_url, path));
        match token {
            Some(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
            None => builder,
        }
    }

    /// Sends `request` and unwraps the `{success, data}` envelope, or maps
    /// the `{error, message}` body to a [`ClientError`].
    pub async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    let bytes = response.bytes().await?;

    if status.is_success() {
        let envelope: Envelope<T> = serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::UnexpectedResponse(format!("{status}: {e}")))?;
        return Ok(envelope.data);
    }

    match serde_json::from_slice::<ErrorBody>(&bytes) {
        Ok(body) => {
            debug!(status = status.as_u16(), code = %body.error, "Server returned an error");
            Err(ClientError::from_server(&body.error, body.message))
        }
        Err(_) => Err(ClientError::Server {
            code: status.as_u16().to_string(),
            message: String::from_utf8_lossy(&bytes).into_owned(),
        }),
    }
}
