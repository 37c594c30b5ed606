//! CORS layer configuration.

use std::str::FromStr;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

use chatgate_core::config::CorsConfig;

/// Builds the CORS layer. Entries that fail to parse are logged and
/// skipped.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(parse_all::<Method>("method", &config.allowed_methods))
        .max_age(config.max_age());

    let layer = if config.any_origin() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(parse_all::<HeaderValue>("origin", &config.allowed_origins))
    };

    if config.any_header() {
        layer.allow_headers(Any)
    } else {
        layer.allow_headers(parse_all::<HeaderName>("header", &config.allowed_headers))
    }
}

fn parse_all<T: FromStr>(what: &str, raw: &[String]) -> Vec<T> {
    raw.iter()
        .filter_map(|entry| match entry.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(entry = %entry, "Ignoring unparsable CORS {what}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_skips_bad_entries() {
        let methods = parse_all::<Method>("method", &["GET".into(), "BAD METHOD".into()]);
        assert_eq!(methods, vec![Method::GET]);
    }
}
