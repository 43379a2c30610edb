//! Request address resolution subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path, query string, headers)
//!     → grammar.rs (ordered pattern table, first structural match)
//!     → resolver.rs (validate app/instance, trim sub-path)
//!     → query.rs + headers (proxy-id hint, query before header)
//!     → Return: RouteAddress or AddressError
//! ```
//!
//! # Design Decisions
//! - Patterns compiled once, immutable and shared across tasks
//! - Deterministic: same input always resolves to the same address
//! - Explicit NoMatch rather than silent default
//! - No percent-decoding; the caller decides what path to pass in

pub mod address;
pub mod error;
pub mod grammar;
pub mod query;
pub mod resolver;

pub use address::{
    display_instance_name, RouteAddress, DEFAULT_INSTANCE, DEFAULT_INSTANCE_DISPLAY_NAME,
};
pub use error::AddressError;
pub use query::QueryParams;
pub use resolver::{
    extract_proxy_id_hint, resolve, resolve_path, validate_instance_name,
    MAX_INSTANCE_NAME_LENGTH, PROXY_HINT_HEADER, PROXY_HINT_PARAM,
};
