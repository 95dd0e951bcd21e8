//! HTTP router assembly and serving.

use std::any::Any;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::extract::{DefaultBodyLimit, Request as AxumRequest};
use axum::http::{Request, StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use calculator::{
    APPLICATION_PROBLEM_JSON, CalculatorModule, Problem, RequestContext, internal_error,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use utoipa::{OpenApi, ToSchema};

use crate::config::{AppConfig, ServerConfig};
use crate::signals;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// GET /health
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_owned(),
        message: "API is running".to_owned(),
    })
}

#[derive(OpenApi)]
#[openapi(paths(health), components(schemas(HealthResponse)))]
struct ServerApiDoc;

/// Combined OpenAPI document for every route the server exposes.
#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    let mut doc = CalculatorModule::openapi();
    doc.merge(ServerApiDoc::openapi());
    doc
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(openapi())
}

fn panic_message(err: &(dyn Any + Send)) -> &str {
    if let Some(s) = err.downcast_ref::<String>() {
        s
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    }
}

#[allow(clippy::needless_pass_by_value)] // signature fixed by CatchPanicLayer
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!(panic = panic_message(err.as_ref()), "request handler panicked");
    internal_error().into_response()
}

fn is_problem_response(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.contains(APPLICATION_PROBLEM_JSON))
}

fn problem_code(status: StatusCode) -> Option<&'static str> {
    match status {
        StatusCode::NOT_FOUND => Some("CALCULATOR_NOT_FOUND"),
        StatusCode::PAYLOAD_TOO_LARGE => Some("CALCULATOR_PAYLOAD_TOO_LARGE"),
        StatusCode::GATEWAY_TIMEOUT => Some("CALCULATOR_TIMEOUT"),
        _ => None,
    }
}

/// Replaces the bodies of framework-generated 404, 413 and 504 responses
/// with Problem Details. Handler responses pass through untouched.
pub async fn bare_status_to_problem(request: AxumRequest, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let ctx = RequestContext::from_parts(&parts);
    let response = next.run(AxumRequest::from_parts(parts, body)).await;

    let status = response.status();
    if is_problem_response(&response) {
        return response;
    }
    let Some(code) = problem_code(status) else {
        return response;
    };

    let reason = status.canonical_reason().unwrap_or("Error");
    let detail = match status {
        StatusCode::NOT_FOUND => format!("No route for {}", ctx.path),
        StatusCode::PAYLOAD_TOO_LARGE => "Request body exceeds the configured limit".to_owned(),
        _ => "Request did not complete within the configured timeout".to_owned(),
    };
    tracing::debug!(path = %ctx.path, %status, code, "framework error mapped to problem");
    Problem::new(status, reason, detail)
        .with_code(code)
        .with_request_context(&ctx)
        .into_response()
}

/// Build the full application router.
///
/// Layers, innermost first: panic catcher, CORS (optional), body limit,
/// timeout, problem mapping, trace, request id propagation, request id
/// generation.
pub fn build_router(config: &ServerConfig, module: &CalculatorModule) -> Router {
    let mut router = module
        .register_rest(Router::new())
        .route("/health", get(health))
        .route("/openapi.json", get(openapi_json))
        .layer(CatchPanicLayer::custom(handle_panic));

    if config.cors_enabled {
        router = router.layer(CorsLayer::permissive());
    }

    router = router
        .layer(RequestBodyLimitLayer::new(config.body_limit_bytes))
        .layer(DefaultBodyLimit::max(config.body_limit_bytes))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::GATEWAY_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(middleware::from_fn(bare_status_to_problem))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &Request<axum::body::Body>| {
                let rid = req
                    .headers()
                    .get("x-request-id")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("n/a");
                tracing::info_span!(
                    "http_request",
                    method = %req.method(),
                    uri = %req.uri().path(),
                    request_id = %rid,
                )
            }),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));

    router
}

/// Serve `router` on an already-bound listener until `cancel` fires.
///
/// # Errors
/// Returns an error if the server stops for any other reason.
pub async fn serve(listener: TcpListener, router: Router, cancel: CancellationToken) -> Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!("HTTP server bound on {}", addr);

    let shutdown = async move {
        cancel.cancelled().await;
        tracing::info!("HTTP server shutting down gracefully (cancellation)");
    };

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")
}

/// Bind the configured address and serve until Ctrl-C or SIGTERM.
///
/// # Errors
/// Returns an error if the address cannot be bound or serving fails.
pub async fn run(config: &AppConfig) -> Result<()> {
    let module = CalculatorModule::new();
    let router = build_router(&config.server, &module);

    let listener = TcpListener::bind(config.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_addr))?;

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = signals::wait_for_shutdown().await {
            tracing::error!(error = %e, "signal handling failed, shutting down");
        }
        trigger.cancel();
    });

    serve(listener, router, cancel).await?;
    tracing::info!("calculator server stopped");
    Ok(())
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn panic_message_extracts_payload() {
        let owned: Box<dyn Any + Send> = Box::new(String::from("boom"));
        assert_eq!(panic_message(owned.as_ref()), "boom");
        let borrowed: Box<dyn Any + Send> = Box::new("static boom");
        assert_eq!(panic_message(borrowed.as_ref()), "static boom");
        let other: Box<dyn Any + Send> = Box::new(42u8);
        assert_eq!(panic_message(other.as_ref()), "unknown panic");
    }

    #[test]
    fn panic_response_is_problem() {
        let resp = handle_panic(Box::new("boom"));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn only_framework_statuses_get_problem_codes() {
        assert_eq!(problem_code(StatusCode::NOT_FOUND), Some("CALCULATOR_NOT_FOUND"));
        assert_eq!(
            problem_code(StatusCode::PAYLOAD_TOO_LARGE),
            Some("CALCULATOR_PAYLOAD_TOO_LARGE")
        );
        assert_eq!(problem_code(StatusCode::GATEWAY_TIMEOUT), Some("CALCULATOR_TIMEOUT"));
        assert_eq!(problem_code(StatusCode::BAD_REQUEST), None);
        assert_eq!(problem_code(StatusCode::METHOD_NOT_ALLOWED), None);
    }

    #[test]
    fn openapi_includes_health_and_calculator() {
        let doc = openapi();
        assert!(doc.paths.paths.contains_key("/health"));
        assert!(doc.paths.paths.contains_key("/api/calculate/add"));
    }
}
