//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the resolving handler
//! - Wire up middleware (request ID, tracing, timeout)
//! - Bind server to listener and shut down gracefully
//! - Resolve every request's application address and report it

use axum::{
    body::Body,
    http::{HeaderMap, Method, Request},
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::GatewayConfig;
use crate::http::request::{request_id, UuidRequestId};
use crate::http::response::AddressReport;
use crate::observability::metrics;
use crate::routing::{AddressError, RouteAddress};

/// HTTP front end that resolves application addresses.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GatewayConfig) -> Self {
        let router = Self::build_router(&config);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &GatewayConfig) -> Router {
        Router::new()
            .route("/{*path}", any(resolve_handler))
            .route("/", any(resolve_handler))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id(request.headers()),
                )
            }))
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
    }

    /// The configured router, for serving or driving directly in tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

/// Resolve the request's application address.
/// Reports it as JSON; malformed URLs get 400.
async fn resolve_handler(
    method: Method,
    headers: HeaderMap,
    address: Result<RouteAddress, AddressError>,
) -> Response {
    let start_time = Instant::now();
    let request_id = request_id(&headers);

    let response = match address {
        Ok(address) => {
            tracing::debug!(
                request_id = %request_id,
                app = %address.app_name(),
                instance = %address.app_instance_name(),
                sub_path = ?address.sub_path(),
                proxy_id_hint = ?address.proxy_id_hint(),
                "Resolved application address"
            );
            Json(AddressReport::from(&address)).into_response()
        }
        Err(e) => {
            // Client error, not an incident
            tracing::debug!(
                request_id = %request_id,
                kind = e.kind(),
                error = %e,
                "Rejected request URL"
            );
            e.into_response()
        }
    };

    metrics::record_request(method.as_str(), response.status().as_u16(), start_time);
    response
}
