//! RFC 9457 Problem Details returned by every failing calculator endpoint.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::ToSchema;

use super::context::RequestContext;

/// Content type for Problem Details as per RFC 9457.
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

#[allow(clippy::trivially_copy_pass_by_ref)] // serde requires &T signature
fn serialize_status<S: Serializer>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u16(status.as_u16())
}

fn deserialize_status<'de, D: Deserializer<'de>>(deserializer: D) -> Result<StatusCode, D::Error> {
    let code = u16::deserialize(deserializer)?;
    StatusCode::from_u16(code).map_err(serde::de::Error::custom)
}

/// Problem Details body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(title = "Problem", description = "RFC 9457 Problem Details for HTTP APIs")]
#[must_use]
pub struct Problem {
    /// URI reference identifying the problem type.
    #[serde(rename = "type")]
    pub type_url: String,
    /// Short summary of the problem type.
    pub title: String,
    /// HTTP status code, serialized as a number.
    #[serde(serialize_with = "serialize_status", deserialize_with = "deserialize_status")]
    #[schema(value_type = u16)]
    pub status: StatusCode,
    /// Human-readable explanation of this occurrence.
    pub detail: String,
    /// Request path that produced the problem.
    pub instance: String,
    /// Machine-readable error code.
    pub code: String,
    /// Correlation id taken from the request headers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

impl Problem {
    pub fn new(status: StatusCode, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            type_url: "about:blank".to_owned(),
            title: title.into(),
            status,
            detail: detail.into(),
            instance: String::new(),
            code: String::new(),
            trace_id: None,
        }
    }

    /// Sets both the machine-readable code and the matching type URL.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self.type_url = format!("https://errors.calculator.local/{}", self.code);
        self
    }

    pub fn with_instance(mut self, uri: impl Into<String>) -> Self {
        self.instance = uri.into();
        self
    }

    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Attaches the request path and correlation id.
    pub fn with_request_context(mut self, ctx: &RequestContext) -> Self {
        self = self.with_instance(ctx.path.clone());
        if let Some(id) = &ctx.trace_id {
            self = self.with_trace_id(id.clone());
        }
        self
    }
}

pub fn bad_request(detail: impl Into<String>) -> Problem {
    Problem::new(StatusCode::BAD_REQUEST, "Bad Request", detail)
}

/// Generic 500; `detail` never carries internals.
pub fn internal_error() -> Problem {
    Problem::new(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal Server Error",
        "Internal server error",
    )
    .with_code("CALCULATOR_INTERNAL")
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = self.status;
        let mut resp = axum::Json(self).into_response();
        *resp.status_mut() = status;
        resp.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(APPLICATION_PROBLEM_JSON),
        );
        resp
    }
}
