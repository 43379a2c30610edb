//! Request address resolution.
//!
//! # Responsibilities
//! - Match the request path against the URL grammars
//! - Validate app and instance segments
//! - Extract the proxy-id hint (query parameter before header)
//!
//! # Design Decisions
//! - Pure and stateless; safe to call from any number of tasks
//! - First error wins, no partial results
//! - `app_name` is only checked for blankness; the app registry validates it

use axum::http::HeaderMap;

use super::address::{RouteAddress, DEFAULT_INSTANCE};
use super::error::AddressError;
use super::grammar::{match_path, Captures, Grammar, PathMatch};
use super::query::QueryParams;

/// Query parameter carrying the proxy-id hint.
pub const PROXY_HINT_PARAM: &str = "shinyproxy_proxy_id_hint";

/// Header carrying the proxy-id hint.
pub const PROXY_HINT_HEADER: &str = "X-ShinyProxy-Proxy-Id-Hint";

/// Longest accepted explicit instance name.
pub const MAX_INSTANCE_NAME_LENGTH: usize = 64;

/// Resolve the full address of a request: path segments plus proxy-id hint.
pub fn resolve(
    path: &str,
    query: &QueryParams,
    headers: &HeaderMap,
) -> Result<RouteAddress, AddressError> {
    let address = resolve_path(path)?;
    Ok(address.with_proxy_id_hint(extract_proxy_id_hint(query, headers)))
}

/// Resolve app, instance and sub-path from a path alone. The hint is left unset.
pub fn resolve_path(path: &str) -> Result<RouteAddress, AddressError> {
    match match_path(path) {
        PathMatch::Matched { grammar, captures } => from_captures(grammar, captures),
        PathMatch::NoMatch => Err(AddressError::MalformedAddress),
    }
}

fn from_captures(grammar: Grammar, captures: Captures<'_>) -> Result<RouteAddress, AddressError> {
    let app_name = captures
        .app_name
        .filter(|name| !is_blank(name))
        .ok_or(AddressError::MissingAppName)?;

    let app_instance = match grammar {
        Grammar::InstanceQualified => {
            let instance = captures
                .app_instance
                .filter(|instance| !is_blank(instance))
                .ok_or(AddressError::MissingInstanceName)?;
            validate_instance_name(instance)?;
            instance
        }
        Grammar::Unqualified => DEFAULT_INSTANCE,
    };

    let sub_path = captures
        .sub_path
        .map(trim)
        .filter(|rest| !rest.is_empty())
        .map(str::to_owned);

    Ok(RouteAddress::new(app_name, app_instance, sub_path))
}

/// Check an explicit instance name: at most 64 characters from `[A-Za-z0-9_.-]`.
pub fn validate_instance_name(instance: &str) -> Result<(), AddressError> {
    let allowed = |b: u8| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'-');
    if instance.len() > MAX_INSTANCE_NAME_LENGTH || !instance.bytes().all(allowed) {
        return Err(AddressError::InvalidInstanceName);
    }
    Ok(())
}

/// Proxy-id hint of a request.
///
/// A query parameter that is present wins, even with an empty value.
/// Only then is the header consulted.
pub fn extract_proxy_id_hint(query: &QueryParams, headers: &HeaderMap) -> Option<String> {
    if let Some(hint) = query.first(PROXY_HINT_PARAM) {
        return Some(hint.to_owned());
    }

    let value = headers.get(PROXY_HINT_HEADER)?;
    match value.to_str() {
        Ok(hint) => Some(hint.to_owned()),
        Err(_) => {
            tracing::debug!(header = PROXY_HINT_HEADER, "Ignoring non-ASCII proxy-id hint header");
            None
        }
    }
}

/// Strip leading and trailing ASCII control characters and spaces.
fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| c <= ' ')
}

fn is_blank(s: &str) -> bool {
    trim(s).is_empty()
}
