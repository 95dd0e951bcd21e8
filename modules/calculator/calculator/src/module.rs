//! Calculator module definition
//!
//! Owns the single shared `Service` instance and hands it to the REST layer
//! and to in-process clients.

use std::sync::Arc;

use axum::Router;
use calculator_sdk::CalculatorClientV1;

use crate::api::rest::openapi::CalculatorApiDoc;
use crate::api::rest::routes;
use crate::domain::Service;
use crate::local_client::CalculatorLocalClient;

/// Calculator module.
///
/// Every route and client obtained from one module instance shares the same
/// history.
#[derive(Debug, Default)]
pub struct CalculatorModule {
    service: Arc<Service>,
}

impl CalculatorModule {
    #[must_use]
    pub fn new() -> Self {
        tracing::info!("Initializing calculator module");
        let module = Self {
            service: Arc::new(Service::new()),
        };
        tracing::info!("calculator module initialized");
        module
    }

    #[must_use]
    pub fn service(&self) -> Arc<Service> {
        Arc::clone(&self.service)
    }

    /// In-process client backed by this module's service.
    #[must_use]
    pub fn client(&self) -> Arc<dyn CalculatorClientV1> {
        Arc::new(CalculatorLocalClient::new(self.service()))
    }

    /// Mount the calculator routes on `router`.
    pub fn register_rest(&self, router: Router) -> Router {
        tracing::info!("Registering calculator REST routes");
        let router = routes::register_routes(router, self.service());
        tracing::info!("calculator REST routes registered");
        router
    }

    #[must_use]
    pub fn openapi() -> utoipa::openapi::OpenApi {
        use utoipa::OpenApi;
        CalculatorApiDoc::openapi()
    }
}
