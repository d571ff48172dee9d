//! Correlation ids for requests.
//!
//! Every response carries an `x-request-id`. A well-formed id supplied by a
//! fronting proxy is kept; anything else is replaced by a fresh UUID v4. The
//! id lands on the `http_request` span and as a tag on the request's Sentry
//! scope, so log lines and error reports for one request can be joined.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Span;
use uuid::Uuid;

/// Header carrying the correlation id in both directions.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest upstream id accepted verbatim.
const MAX_UPSTREAM_ID_LEN: usize = 64;

/// Pick the id for a request from its headers.
///
/// Upstream ids are accepted only if they are short and made of ASCII
/// alphanumerics, `-`, `_` or `.`, which keeps them safe to log and echo.
#[must_use]
pub fn resolve_request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|id| is_acceptable_id(id))
        .map_or_else(|| Uuid::new_v4().to_string(), str::to_owned)
}

fn is_acceptable_id(id: &str) -> bool {
    (1..=MAX_UPSTREAM_ID_LEN).contains(&id.len())
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'))
}

/// Attach a correlation id to the span, the Sentry scope and the response.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = resolve_request_id(request.headers());

    Span::current().record("request_id", request_id.as_str());
    sentry::configure_scope(|scope| scope.set_tag("request_id", &request_id));

    let mut response = next.run(request).await;

    // Ids are ASCII by construction
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn headers_with(id: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static(id));
        headers
    }

    #[test]
    fn test_upstream_id_is_kept() {
        let headers = headers_with("cf-8a1b2c.edge_01");
        assert_eq!(resolve_request_id(&headers), "cf-8a1b2c.edge_01");
    }

    #[test]
    fn test_missing_id_is_generated() {
        let id = resolve_request_id(&HeaderMap::new());
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn test_malformed_upstream_id_is_replaced() {
        for bad in ["", "has space", "quote\"d", "semi;colon"] {
            let id = resolve_request_id(&headers_with(bad));
            assert!(Uuid::parse_str(&id).is_ok(), "{bad:?} should be replaced");
        }

        let long = "a".repeat(MAX_UPSTREAM_ID_LEN + 1);
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_str(&long).unwrap());
        assert_ne!(resolve_request_id(&headers), long);
    }
}
