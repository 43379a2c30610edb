//! Response mapping.
//!
//! # Responsibilities
//! - Map address errors to 400 Bad Request
//! - Render a resolved address as JSON
//!
//! # Design Decisions
//! - Every resolution error is a client error, never a 5xx
//! - Error bodies are plain text with the error message

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::routing::{AddressError, RouteAddress};

impl IntoResponse for AddressError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

/// JSON view of a resolved address.
#[derive(Debug, Serialize)]
pub struct AddressReport<'a> {
    pub app_name: &'a str,
    pub app_instance_name: &'a str,
    pub app_instance_display_name: &'a str,
    pub sub_path: Option<&'a str>,
    pub proxy_id_hint: Option<&'a str>,
}

impl<'a> From<&'a RouteAddress> for AddressReport<'a> {
    fn from(address: &'a RouteAddress) -> Self {
        Self {
            app_name: address.app_name(),
            app_instance_name: address.app_instance_name(),
            app_instance_display_name: address.app_instance_display_name(),
            sub_path: address.sub_path(),
            proxy_id_hint: address.proxy_id_hint(),
        }
    }
}
