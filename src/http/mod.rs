//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → extract.rs (resolve RouteAddress from the request head)
//!     → [dispatch to backend] (external)
//!     → response.rs (JSON report or 400)
//!     → Send to client
//! ```

pub mod extract;
pub mod request;
pub mod response;
pub mod server;

pub use extract::resolve_parts;
pub use request::{request_id, UuidRequestId, X_REQUEST_ID};
pub use response::AddressReport;
pub use server::HttpServer;
