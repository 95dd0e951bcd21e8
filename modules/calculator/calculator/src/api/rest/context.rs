//! Per-request context attached to Problem responses.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;

/// Headers consulted for a correlation id, most specific first.
const TRACE_HEADERS: [&str; 3] = ["x-trace-id", "x-request-id", "traceparent"];

/// Correlation id supplied by the caller or by the request-id middleware.
#[must_use]
pub fn extract_trace_id(headers: &HeaderMap) -> Option<String> {
    TRACE_HEADERS
        .iter()
        .find_map(|name| headers.get(*name))
        .and_then(|v| v.to_str().ok())
        .map(ToOwned::to_owned)
}

/// Request path and correlation id, extracted before the body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub path: String,
    pub trace_id: Option<String>,
}

impl RequestContext {
    #[must_use]
    pub fn from_parts(parts: &Parts) -> Self {
        Self {
            path: parts.uri.path().to_owned(),
            trace_id: extract_trace_id(&parts.headers),
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for RequestContext {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_parts(parts))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use axum::http::{HeaderValue, Request};

    use super::*;

    #[test]
    fn trace_id_prefers_explicit_trace_header() {
        let mut headers = HeaderMap::new();
        headers.insert("x-request-id", HeaderValue::from_static("req-1"));
        assert_eq!(extract_trace_id(&headers).as_deref(), Some("req-1"));

        headers.insert("x-trace-id", HeaderValue::from_static("trace-9"));
        assert_eq!(extract_trace_id(&headers).as_deref(), Some("trace-9"));
    }

    #[test]
    fn no_headers_no_trace_id() {
        assert_eq!(extract_trace_id(&HeaderMap::new()), None);
    }

    #[test]
    fn context_from_parts() {
        let (parts, ()) = Request::builder()
            .uri("/api/calculate/add?x=1")
            .header("x-request-id", "abc")
            .body(())
            .unwrap()
            .into_parts();
        let ctx = RequestContext::from_parts(&parts);
        assert_eq!(ctx.path, "/api/calculate/add");
        assert_eq!(ctx.trace_id.as_deref(), Some("abc"));
    }
}
