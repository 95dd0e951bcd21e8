//! Route registration for calculator module

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Extension, Router};

use crate::domain::Service;

use super::handlers;

/// Register all REST routes for the calculator module.
///
/// # Arguments
/// * `router` - Axum router to add routes to
/// * `service` - Domain Service shared by every handler
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    let router = router
        .route("/api/calculate/add", post(handlers::add))
        .route("/api/calculate/subtract", post(handlers::subtract))
        .route("/api/calculate/multiply", post(handlers::multiply))
        .route("/api/calculate/divide", post(handlers::divide))
        .route("/api/calculate/power", post(handlers::power))
        .route("/api/calculate/sqrt", post(handlers::square_root))
        .route("/api/calculate/factorial", post(handlers::factorial))
        .route("/api/calculate/average", post(handlers::average))
        .route(
            "/api/history",
            get(handlers::get_history).delete(handlers::clear_history),
        );

    // Add Service as Extension
    router.layer(Extension(service))
}
