//! Application address gateway.
//!
//! Resolves which application, instance and sub-path an incoming request
//! targets, plus an optional proxy-id hint, before the proxy dispatches it.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{resolve, resolve_path, AddressError, QueryParams, RouteAddress};
