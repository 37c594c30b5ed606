//! Client-side mirror of the server error taxonomy.

use thiserror::Error;

/// Errors surfaced to client code. Server-reported variants carry the
/// server's human-readable message.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    DuplicateEmail(String),
    #[error("{0}")]
    InvalidCredentials(String),
    #[error("{0}")]
    Unauthenticated(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Upstream(String),
    /// 5xx or an error code this client does not know.
    #[error("server error ({code}): {message}")]
    Server { code: String, message: String },
    /// The request never produced an HTTP response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// A response arrived but was not in the expected shape.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
    /// Reading or writing the persisted token failed.
    #[error("token storage error: {0}")]
    Storage(#[from] std::io::Error),
}

impl ClientError {
    /// Maps a server error body to a variant.
    pub fn from_server(code: &str, message: String) -> Self {
        match code {
            "INVALID_INPUT" => Self::InvalidInput(message),
            "DUPLICATE_EMAIL" => Self::DuplicateEmail(message),
            "INVALID_CREDENTIALS" => Self::InvalidCredentials(message),
            "UNAUTHENTICATED" => Self::Unauthenticated(message),
            "FORBIDDEN" => Self::Forbidden(message),
            "NOT_FOUND" => Self::NotFound(message),
            "UPSTREAM_FAILURE" => Self::Upstream(message),
            _ => Self::Server {
                code: code.to_string(),
                message,
            },
        }
    }

    /// Whether this error means the session is no longer valid.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::Unauthenticated(_))
    }
}
