//! Request extractor for [`RouteAddress`].
//!
//! Resolution reads only the request head: the URI path, the raw URI query
//! string and the headers. The body is never touched, so it can still be
//! forwarded to the backend untouched.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::observability::metrics;
use crate::routing::{resolve, AddressError, QueryParams, RouteAddress};

impl<S> FromRequestParts<S> for RouteAddress
where
    S: Send + Sync,
{
    type Rejection = AddressError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        resolve_parts(parts)
    }
}

/// Resolve the address of a request from its head.
pub fn resolve_parts(parts: &Parts) -> Result<RouteAddress, AddressError> {
    let query = QueryParams::from_uri(&parts.uri);
    let result = resolve(parts.uri.path(), &query, &parts.headers);
    metrics::record_resolution(result.as_ref().map(|_| ()));
    result
}
